//! Multi-series line chart: samples → sub-pixels → braille text block.
//!
//! ### Layout
//! ```text
//! ┌ y_width ┐┌──── graph_cells ────┐
//!   256.00 ┤  braille rows…          ─┐
//!     0.00 ┤ …                        ├ plot_rows
//!          └──────────────────────   ─┘  x axis rule
//!            labels…                     category labels (optional)
//! ```
//! Every line is exactly `config.width` characters before colour escapes,
//! and there are exactly `config.height` lines.
//!
//! ### Workflow
//! 1. Validate samples and resolve one [`ValueRange`] for all series.
//! 2. Size the axes, then the plot area that remains.
//! 3. Cut every series to its trailing window and trace each consecutive
//!    pair into the [`SubPixelGrid`].
//! 4. Serialize rows top to bottom with colour runs and axis text.

use tracing::{debug, trace};

use crate::{
    core::{
        bounds::ValueRange,
        color::{Color, colorize},
        config::CanvasConfig,
        constants::{BRAILLE_HORIZONTAL_RESOLUTION as HR, BRAILLE_VERTICAL_RESOLUTION as VR},
        error::PlotError,
    },
    render::{
        axis::{XAxis, YAxis, sample_x},
        braille::{Cell, SubPixel, SubPixelGrid},
        line,
    },
};

/// Plot area left over once the axes have been reserved.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Geometry {
    y_width: usize,
    cols: usize,
    rows: usize,
    /// Samples kept per series.
    window: usize,
    /// Sub-pixels per sample.
    scale: f64,
}

impl Geometry {
    fn px_rows(&self) -> usize {
        self.rows * VR
    }
}

/// Chart canvas.  Owns its configuration and the working grid, which is
/// cleared at the start of every [`Canvas::plot`].
#[derive(Debug, Clone)]
pub struct Canvas {
    config: CanvasConfig,
    grid: SubPixelGrid,
}

impl Canvas {
    #[must_use]
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            grid: SubPixelGrid::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    // --- Setters ---

    /// Replace the configuration after validating it.
    pub fn set_config(&mut self, config: CanvasConfig) -> Result<(), PlotError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }
    pub fn set_line_colors(&mut self, colors: impl IntoIterator<Item = Color>) {
        self.config.line_colors = colors.into_iter().collect();
    }
    pub fn set_axis(&mut self, show: bool) {
        self.config.show_axis = show;
    }
    pub fn set_x_labels<S: Into<String>>(&mut self, labels: impl IntoIterator<Item = S>) {
        self.config.x_labels = labels.into_iter().map(Into::into).collect();
    }
    pub fn set_line_ending(&mut self, ending: impl Into<String>) {
        self.config.line_ending = ending.into();
    }

    /// The grid of the last successful plot.
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &SubPixelGrid {
        &self.grid
    }

    // --- Plot ---

    /// Render `series` into one text block.
    ///
    /// Returns an empty string when there is nothing to draw.  Non-finite
    /// samples are rejected before anything is drawn.
    pub fn plot(&mut self, series: &[Vec<f64>]) -> Result<String, PlotError> {
        self.grid.clear();
        if series.iter().all(Vec::is_empty) {
            return Ok(String::new());
        }
        check_finite(series)?;

        let range = ValueRange::resolve(series, &self.config);
        let y_axis = self
            .config
            .show_axis
            .then(|| YAxis::compute(range, self.plot_rows()));
        let geo = self.geometry(y_axis.as_ref().map_or(0, |a| a.width))?;
        debug!(
            ?range,
            y_width = geo.y_width,
            cols = geo.cols,
            rows = geo.rows,
            window = geo.window,
            scale = geo.scale,
            "plot layout"
        );

        let mut extent_px = 0;
        for (index, values) in series.iter().enumerate() {
            let visible = trailing(values, geo.window);
            if let Some(last) = visible.len().checked_sub(1) {
                extent_px = extent_px.max(sample_x(last, geo.scale));
            }
            self.draw_series(visible, range, &geo, self.config.line_color(index))?;
        }

        let x_axis = self.config.show_axis.then(|| {
            // label i names sample i of the longest series
            let longest = series.iter().map(Vec::len).max().unwrap_or(0);
            let first_visible = longest - geo.window.min(longest);
            let labels = self.config.x_labels.get(first_visible..).unwrap_or_default();
            let mut axis = XAxis::compute(labels, geo.y_width, geo.cols, geo.scale, extent_px);
            if !self.config.x_labels.is_empty() {
                // the label row is reserved even when no label is visible
                axis.label_line.get_or_insert_with(|| " ".repeat(geo.y_width + geo.cols));
            }
            axis
        });

        Ok(self.serialize(&geo, y_axis.as_ref(), x_axis.as_ref()))
    }

    fn plot_rows(&self) -> usize {
        self.config.height.saturating_sub(self.config.x_axis_rows())
    }

    fn geometry(&self, y_width: usize) -> Result<Geometry, PlotError> {
        let rows = self.plot_rows();
        let cols = self.config.width.saturating_sub(y_width);
        if rows == 0 || cols == 0 {
            return Err(PlotError::CanvasTooSmall {
                want_w: y_width + 1,
                want_h: self.config.x_axis_rows() + 1,
                got_w: self.config.width,
                got_h: self.config.height,
            });
        }

        let px_cols = cols * HR;
        let (window, scale) = match self.config.point_count {
            Some(requested) => {
                // each sample must advance at least one sub-pixel
                let n = requested.clamp(1, px_cols);
                if n != requested {
                    trace!(requested, clamped = n, "point count exceeds plot width");
                }
                (n, px_cols as f64 / n as f64)
            }
            None => (px_cols, 1.0),
        };
        Ok(Geometry {
            y_width,
            cols,
            rows,
            window,
            scale,
        })
    }

    /// Sub-pixel row of `v`, 0 at the top.
    fn value_y(v: f64, range: ValueRange, geo: &Geometry) -> i32 {
        let top = geo.px_rows() - 1;
        let from_bottom = (range.normalize(v) * top as f64).round() as usize;
        (top - from_bottom.min(top)) as i32
    }

    fn draw_series(
        &mut self,
        values: &[f64],
        range: ValueRange,
        geo: &Geometry,
        color: Color,
    ) -> Result<(), PlotError> {
        let points: Vec<SubPixel> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                SubPixel::new(sample_x(i, geo.scale) as i32, Self::value_y(v, range, geo))
            })
            .collect();

        match points.as_slice() {
            [] => {}
            [only] => self.grid.set(*only, color),
            _ => {
                for pair in points.windows(2) {
                    for p in line::trace(pair[0], pair[1])? {
                        self.grid.set(p, color);
                    }
                }
            }
        }
        Ok(())
    }

    fn serialize(&self, geo: &Geometry, y_axis: Option<&YAxis>, x_axis: Option<&XAxis>) -> String {
        let cols = 0..geo.cols as i32;
        let rows = 0..geo.rows as i32;
        let mut lines: Vec<String> = Vec::with_capacity(self.config.height);

        for (top, cells) in self.grid.render(cols, rows).iter().enumerate() {
            let mut line = String::new();
            if let Some(label) = y_axis.and_then(|a| a.labels.get(top)) {
                line.push_str(&label.text);
            }
            push_color_runs(&mut line, cells);
            lines.push(line);
        }

        if let Some(axis) = x_axis {
            lines.push(axis.rule.clone());
            if let Some(labels) = &axis.label_line {
                lines.push(labels.clone());
            }
        }
        lines.join(&self.config.line_ending)
    }
}

/// Append `cells`, wrapping each run of one colour in a single escape pair.
fn push_color_runs(out: &mut String, cells: &[Cell]) {
    let mut run = String::new();
    let mut run_color = Color::Default;
    for cell in cells {
        // blank cells join any run, they look the same in every colour
        let color = if cell.mask == 0 { run_color } else { cell.color };
        if color != run_color && !run.is_empty() {
            out.push_str(&colorize(&run, run_color));
            run.clear();
        }
        run_color = color;
        run.push(cell.glyph());
    }
    out.push_str(&colorize(&run, run_color));
}

/// Last `n` items of `values`.
#[inline]
fn trailing<T>(values: &[T], n: usize) -> &[T] {
    &values[values.len().saturating_sub(n)..]
}

fn check_finite(series: &[Vec<f64>]) -> Result<(), PlotError> {
    for (s, values) in series.iter().enumerate() {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(PlotError::NonFinite {
                series: s,
                index,
                value,
            });
        }
    }
    Ok(())
}

/// Render `series` once with `config`.
pub fn plot(series: &[Vec<f64>], config: &CanvasConfig) -> Result<String, PlotError> {
    Canvas::new(config.clone()).plot(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: usize, height: usize) -> Canvas {
        Canvas::new(CanvasConfig::builder(width, height).build().unwrap())
    }

    fn bare(width: usize, height: usize) -> Canvas {
        Canvas::new(CanvasConfig::builder(width, height).axis(false).build().unwrap())
    }

    #[test]
    fn test_empty_input() {
        let mut c = canvas(20, 5);
        assert_eq!(c.plot(&[]).unwrap(), "");
        assert_eq!(c.plot(&[vec![], vec![]]).unwrap(), "");
    }

    #[test]
    fn test_rejects_non_finite() {
        let mut c = canvas(20, 5);
        let err = c.plot(&[vec![1.0], vec![2.0, f64::NAN]]).unwrap_err();
        assert!(matches!(
            err,
            PlotError::NonFinite {
                series: 1,
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_flat_zero_data_draws_baseline() {
        let out = bare(2, 2).plot(&[vec![0.0, 0.0, 0.0, 0.0]]).unwrap();
        // bottom sub-pixel row of the bottom cell row, all four columns
        assert_eq!(out, "  \n⣀⣀");
    }

    #[test]
    fn test_rising_line() {
        // 2×1 cells = 4×4 sub-pixels, values map to rows 3, 2, 1, 0
        let out = bare(2, 1).plot(&[vec![0.0, 1.0, 2.0, 3.0]]).unwrap();
        assert_eq!(out, "⡠⠊");
    }

    #[test]
    fn test_single_sample() {
        let out = bare(1, 1).plot(&[vec![5.0]]).unwrap();
        // max value sits on the top row
        assert_eq!(out, "⠁");
    }

    #[test]
    fn test_colour_runs() {
        let mut c = Canvas::new(
            CanvasConfig::builder(2, 1)
                .axis(false)
                .line_colors([Color::Red])
                .build()
                .unwrap(),
        );
        let out = c.plot(&[vec![1.0, 1.0, 1.0, 1.0]]).unwrap();
        assert_eq!(out, "\x1b[31m⠉⠉\x1b[0m");
    }

    #[test]
    fn test_canvas_too_small_for_labels() {
        let err = canvas(5, 5).plot(&[vec![1.0, 2.0]]).unwrap_err();
        assert!(matches!(err, PlotError::CanvasTooSmall { .. }));
    }

    #[test]
    fn test_point_count_spreads_samples() {
        let mut c = Canvas::new(
            CanvasConfig::builder(4, 1)
                .axis(false)
                .point_count(3)
                .build()
                .unwrap(),
        );
        c.plot(&[vec![9.0, 0.0, 0.0, 0.0]]).unwrap();
        // three trailing zeros, 8/3 sub-pixels apart: x = 0, 3, 5
        let dots: usize = (0..4)
            .filter_map(|col| c.grid().cell(crate::render::braille::CellPos { col, row: 0 }))
            .map(|cell| cell.mask.count_ones() as usize)
            .sum();
        assert_eq!(dots, 6);
    }

    #[test]
    fn test_point_count_wider_than_plot_is_clamped() {
        let mut c = Canvas::new(
            CanvasConfig::builder(2, 1)
                .axis(false)
                .point_count(100)
                .build()
                .unwrap(),
        );
        // clamped to one sample per sub-pixel column
        assert_eq!(c.plot(&[vec![0.0, 1.0, 2.0, 3.0]]).unwrap(), "⡠⠊");
    }

    #[test]
    fn test_setters_apply_between_plots() {
        let mut c = canvas(30, 6);
        let data = [vec![1.0, 2.0, 3.0]];
        let with_axis = c.plot(&data).unwrap();
        c.set_axis(false);
        let without = c.plot(&data).unwrap();
        assert_ne!(with_axis, without);
        assert_eq!(without.lines().count(), 6);
        c.set_line_ending("\r\n");
        assert_eq!(c.plot(&data).unwrap().matches("\r\n").count(), 5);
    }
}
