//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::{color::ColorError, data::ParseCsvError};

/// Precise configuration faults.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("canvas must be at least 1×1 cells, got {width}×{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("fixed point count must be positive")]
    ZeroPointCount,
    #[error("y bound `{field}` must be finite, got {value}")]
    NonFiniteBound { field: &'static str, value: f64 },
    #[error("y_min {low} must be < y_max {high}")]
    InvalidRange { low: f64, high: f64 },
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] ParseCsvError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A sample was NaN or infinite.
    #[error("series {series}, sample {index}: value {value} is not finite")]
    NonFinite {
        series: usize,
        index: usize,
        value: f64,
    },
    /// The rasterizer only traces segments that advance along x.
    #[error("segment endpoints share x = {x}; a line needs distinct columns")]
    VerticalSegment { x: i32 },
    #[error("canvas too small: need ≥{want_w}×{want_h}, got {got_w}×{got_h}")]
    CanvasTooSmall {
        want_w: usize,
        want_h: usize,
        got_w: usize,
        got_h: usize,
    },
}
