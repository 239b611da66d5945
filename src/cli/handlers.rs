use std::{
    io::{self, Write},
    time::Instant,
};

use tracing::debug;

use crate::{
    core::{
        bounds::terminal_geometry,
        color::{Color, colorize},
        config::CanvasConfig,
        data::read_csv_from_path,
        error::PlotError,
    },
    render::Canvas,
};

use super::parse::{CanvasArgs, CsvArgs, DemoArgs};

/// Build the canvas configuration, falling back to the terminal size.
fn canvas_config(a: &CanvasArgs, x_labels: Vec<String>) -> Result<CanvasConfig, PlotError> {
    let (w, h) = terminal_geometry();
    let colors = a
        .colors
        .iter()
        .map(|c| Color::from_name(c))
        .collect::<Result<Vec<_>, _>>()?;

    let mut b = CanvasConfig::builder(
        a.width.unwrap_or(usize::from(w.0)),
        // leave a line for the shell prompt
        a.height.unwrap_or(usize::from(h.0).saturating_sub(1)),
    )
    .line_colors(colors)
    .axis(!a.no_axis)
    .x_labels(x_labels);

    if let Some(n) = a.points {
        b = b.point_count(n);
    }
    if let Some(v) = a.y_min {
        b = b.y_min(v);
    }
    if let Some(v) = a.y_max {
        b = b.y_max(v);
    }
    Ok(b.build()?)
}

fn render(config: CanvasConfig, series: &[Vec<f64>]) -> Result<(), PlotError> {
    write_chart(&mut io::stdout().lock(), config, series)
}

/// Plot `series` and write the block to `out`, terminated by a newline.
fn write_chart(
    out: &mut impl Write,
    config: CanvasConfig,
    series: &[Vec<f64>],
) -> Result<(), PlotError> {
    let t0 = Instant::now();
    let text = Canvas::new(config).plot(series)?;
    debug!(
        series = series.len(),
        elapsed_us = t0.elapsed().as_micros(),
        "rendered"
    );
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

pub fn csv(a: &CsvArgs) -> Result<(), PlotError> {
    let t_ingest = Instant::now();
    let table = read_csv_from_path(&a.file, a.label_column)?;
    debug!(
        columns = table.series.len(),
        rows = table.series.first().map_or(0, Vec::len),
        elapsed_us = t_ingest.elapsed().as_micros(),
        "CSV ingest"
    );

    let cfg = canvas_config(&a.canvas, table.labels)?;
    render(cfg, &table.series)
}

pub fn demo(a: &DemoArgs) -> Result<(), PlotError> {
    let radians = |i: usize| (i as f64 * a.step).to_radians();
    let sine: Vec<f64> = (0..a.samples)
        .map(|i| 10.0 + radians(i).sin() * 10.0)
        .collect();
    let cosine: Vec<f64> = (0..a.samples)
        .map(|i| 10.0 + radians(i).cos() * 10.0)
        .collect();

    let cfg = canvas_config(&a.canvas, Vec::new())?;
    render(cfg, &[sine, cosine])
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    for (name, color) in Color::NAMED {
        println!("{}", colorize(name, color));
    }
    println!("{}", colorize("industrial", Color::IndustrialOrange));
    println!(
        "{}  (#505050 or any other #RRGGBB)\n",
        colorize("#505050", Color::Rgb(0x50, 0x50, 0x50))
    );
}
