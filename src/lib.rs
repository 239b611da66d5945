//! Public-facing crate root – re-exports + one-shot helper.
//!
//! ```
//! use braille_chart::{CanvasConfig, Color, plot};
//!
//! let config = CanvasConfig::builder(40, 10)
//!     .line_colors([Color::Red, Color::Blue])
//!     .build()?;
//! let text = plot(&[vec![1.0, 3.0, 2.0], vec![0.5, 0.5, 4.0]], &config)?;
//! assert_eq!(text.lines().count(), 10);
//! # Ok::<(), braille_chart::PlotError>(())
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{Color, ColorError, colorize},
    config::{CanvasConfig, CanvasConfigBuilder},
    constants::DECIMAL_PRECISION,
    error::{ConfigError, PlotError},
};

pub use crate::render::{Canvas, SubPixel, SubPixelGrid, XAxis, YAxis, plot, trace};
