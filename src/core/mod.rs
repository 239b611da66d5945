//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;

// re-export frequently-used items for convenience
pub use bounds::ValueRange;
pub use color::{Color, ColorError, colorize};
pub use config::{CanvasConfig, CanvasConfigBuilder};
pub use constants::{
    BRAILLE_HORIZONTAL_RESOLUTION, BRAILLE_OFFSET, BRAILLE_VERTICAL_RESOLUTION, DECIMAL_PRECISION,
};
pub use data::SeriesTable;
pub use error::{ConfigError, PlotError};
