//! Canvas configuration object + fluent builder.

use crate::core::{color::Color, constants::DEFAULT_LINE_ENDING, error::ConfigError};

/// Parameters handed to the chart renderer.
///
/// Dimensions are in character cells and include the space taken by the axes.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
    /// Colour of series `i`; series past the end of the palette use
    /// [`Color::Default`].
    pub line_colors: Vec<Color>,
    pub show_axis: bool,
    /// Fixed number of samples spread across the plotted width.
    pub point_count: Option<usize>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    /// Category labels indexed like the samples of the longest series:
    /// label `i` belongs to sample `i`.  Labels of samples that fell out of
    /// the trailing window are skipped with them.
    pub x_labels: Vec<String>,
    pub line_ending: String,
}

impl CanvasConfig {
    #[inline]
    #[must_use]
    pub fn builder(width: usize, height: usize) -> CanvasConfigBuilder {
        CanvasConfigBuilder::new(width, height)
    }

    /// Colour for the series at `index`.
    #[inline]
    #[must_use]
    pub fn line_color(&self, index: usize) -> Color {
        self.line_colors.get(index).copied().unwrap_or_default()
    }

    /// Rows below the plot taken by the x axis rule and its labels.
    #[inline]
    #[must_use]
    pub fn x_axis_rows(&self) -> usize {
        match (self.show_axis, self.x_labels.is_empty()) {
            (false, _) => 0,
            (true, true) => 1,
            (true, false) => 2,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.point_count == Some(0) {
            return Err(ConfigError::ZeroPointCount);
        }
        for (field, bound) in [("y_min", self.y_min), ("y_max", self.y_max)] {
            if let Some(value) = bound.filter(|v| !v.is_finite()) {
                return Err(ConfigError::NonFiniteBound { field, value });
            }
        }
        if let (Some(low), Some(high)) = (self.y_min, self.y_max) {
            if low >= high {
                return Err(ConfigError::InvalidRange { low, high });
            }
        }
        Ok(())
    }
}

/// Fluent builder; validation happens once in `build`.
#[derive(Debug)]
pub struct CanvasConfigBuilder {
    config: CanvasConfig,
}

impl CanvasConfigBuilder {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            config: CanvasConfig {
                width,
                height,
                line_colors: Vec::new(),
                show_axis: true,
                point_count: None,
                y_min: None,
                y_max: None,
                x_labels: Vec::new(),
                line_ending: DEFAULT_LINE_ENDING.to_owned(),
            },
        }
    }

    #[inline]
    #[must_use]
    pub fn line_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.config.line_colors = colors.into_iter().collect();
        self
    }
    #[inline]
    #[must_use]
    pub fn axis(mut self, show: bool) -> Self {
        self.config.show_axis = show;
        self
    }
    #[inline]
    #[must_use]
    pub fn point_count(mut self, n: usize) -> Self {
        self.config.point_count = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn y_min(mut self, v: f64) -> Self {
        self.config.y_min = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn y_max(mut self, v: f64) -> Self {
        self.config.y_max = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn y_range(mut self, r: std::ops::RangeInclusive<f64>) -> Self {
        self.config.y_min = Some(*r.start());
        self.config.y_max = Some(*r.end());
        self
    }
    #[inline]
    #[must_use]
    pub fn x_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.config.x_labels = labels.into_iter().map(Into::into).collect();
        self
    }
    #[inline]
    #[must_use]
    pub fn line_ending(mut self, ending: impl Into<String>) -> Self {
        self.config.line_ending = ending.into();
        self
    }

    pub fn build(self) -> Result<CanvasConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Ergonomic `?` on a builder chain.
impl From<CanvasConfigBuilder> for Result<CanvasConfig, ConfigError> {
    fn from(b: CanvasConfigBuilder) -> Self {
        b.build()
    }
}
