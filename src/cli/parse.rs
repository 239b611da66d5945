use clap::{Args, Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "braille-chart",
    about = "Multi-series line charts drawn with braille"
)]
pub struct Cli {
    /// Emit layout diagnostics on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot every numeric column of a CSV file as one series
    Csv(CsvArgs),
    /// Plot a sine and a cosine wave
    Demo(DemoArgs),
    /// Show available color names / hex syntax
    Colors,
}

/// Canvas options shared by every plotting command.
#[derive(Args, Debug)]
pub struct CanvasArgs {
    /// Canvas width in characters (terminal width if omitted)
    #[arg(long)]
    pub width: Option<usize>,
    /// Canvas height in characters (terminal height if omitted)
    #[arg(long)]
    pub height: Option<usize>,

    /// Comma-separated colors, one per series (name or `#RRGGBB`)
    #[arg(long, value_delimiter = ',', default_value = "industrial,royalblue")]
    pub colors: Vec<String>,

    /// Hide both axes
    #[arg(long)]
    pub no_axis: bool,

    /// Spread this many trailing samples across the full width
    #[arg(long)]
    pub points: Option<usize>,

    /// Y-axis lower bound (0 or the data minimum if omitted)
    #[arg(long, allow_hyphen_values = true)]
    pub y_min: Option<f64>,
    /// Y-axis upper bound (data maximum if omitted)
    #[arg(long, allow_hyphen_values = true)]
    pub y_max: Option<f64>,
}

/// `braille-chart csv …`
#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Treat the first column as x-axis category labels
    #[arg(long)]
    pub label_column: bool,

    #[command(flatten)]
    pub canvas: CanvasArgs,
}

/// `braille-chart demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Samples per series
    #[arg(long, default_value_t = 180)]
    pub samples: usize,
    /// Degrees advanced per sample
    #[arg(long, default_value_t = 10.0)]
    pub step: f64,

    #[command(flatten)]
    pub canvas: CanvasArgs,
}
