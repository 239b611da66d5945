//! Axis layout sharing the fixed character budget with the plot.
//!
//! ```text
//! 256.00 ┤   ⡠⠤⠤⠤⠤⠤⠤⠤⠤⢄
//!   0.00 ┤ ⠤⠔⠁         ⠑⠤
//!        └─┬──────┬────────
//!          mon    tue
//! ```
//!
//! The y label column is sized once from the value bounds.  The x rule
//! starts under the `┤` tick so both axes meet in one corner, and category
//! labels are placed greedily left to right, each under the column of its
//! own sample.

use crate::core::{
    bounds::{ValueRange, y_label_width},
    constants::{
        AXIS_CORNER, AXIS_RULE, AXIS_TICK, BRAILLE_HORIZONTAL_RESOLUTION as HR, DECIMAL_PRECISION,
        Y_TICK, Y_TICK_WIDTH,
    },
};

/// Text anchored at a column (x axis) or row (y axis), counted from the
/// left edge of the canvas or the top of the plot respectively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisLabel {
    pub text: String,
    pub offset: usize,
}

/// Sub-pixel x of sample `index` under horizontal compression `scale`.
#[inline]
#[must_use]
pub fn sample_x(index: usize, scale: f64) -> usize {
    (index as f64 * scale).round() as usize
}

// --- Y Axis ---

#[derive(Clone, Debug, PartialEq)]
pub struct YAxis {
    /// Characters taken by every label, tick included.
    pub width: usize,
    range: ValueRange,
    rows: usize,
    /// One label per plot row, top row first.
    pub labels: Vec<AxisLabel>,
}

impl YAxis {
    /// Labels for `rows` character rows spanning `range`.
    ///
    /// Row `r`, counted from the bottom, reads `min + r * span / rows`.
    #[must_use]
    pub fn compute(range: ValueRange, rows: usize) -> Self {
        let width = y_label_width(range, DECIMAL_PRECISION);
        let mut axis = Self {
            width,
            range,
            rows,
            labels: Vec::with_capacity(rows),
        };
        let num_w = width - Y_TICK_WIDTH;
        let prec = DECIMAL_PRECISION;
        axis.labels = (0..rows)
            .map(|top| {
                let value = axis.value_at(rows - 1 - top);
                AxisLabel {
                    text: format!("{value:>num_w$.prec$}{Y_TICK}"),
                    offset: top,
                }
            })
            .collect();
        axis
    }

    /// Value shown on the row `row` places above the bottom.
    #[inline]
    #[must_use]
    pub fn value_at(&self, row: usize) -> f64 {
        if self.range.is_degenerate() || self.rows == 0 {
            return self.range.min;
        }
        self.range.min + row as f64 * (self.range.span() / self.rows as f64)
    }
}

// --- X Axis ---

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XAxis {
    /// Horizontal rule, corner under the y tick.
    pub rule: String,
    /// Category label line; `None` when no labels were configured.
    pub label_line: Option<String>,
    /// Labels that made it onto the line, offsets in canvas columns.
    pub placed: Vec<AxisLabel>,
}

impl XAxis {
    /// Lay out the rule and category labels.
    ///
    /// * `y_width` – width of the y label column in front of the plot
    /// * `graph_cells` – plot width in characters
    /// * `scale` – sub-pixels per sample
    /// * `extent_px` – sub-pixel x of the last plotted sample
    ///
    /// A label is placed only if it and a one-cell connector fit before the
    /// right edge; the first label that does not fit ends the walk.  After a
    /// placement the cursor skips every sample whose column is covered by
    /// the label, so labels never touch.
    #[must_use]
    pub fn compute(
        labels: &[String],
        y_width: usize,
        graph_cells: usize,
        scale: f64,
        extent_px: usize,
    ) -> Self {
        let total = y_width + graph_cells;
        let corner = y_width.saturating_sub(Y_TICK_WIDTH - 1);

        let mut rule: Vec<char> = Vec::with_capacity(total);
        rule.resize(corner, ' ');
        rule.push(AXIS_CORNER);
        rule.resize(total, AXIS_RULE);

        if labels.is_empty() {
            return Self {
                rule: rule.into_iter().collect(),
                label_line: None,
                placed: Vec::new(),
            };
        }

        let mut line = vec![' '; total];
        let mut placed = Vec::new();
        let mut cursor = 0usize;

        while let Some(text) = labels.get(cursor) {
            let px = sample_x(cursor, scale);
            if px > extent_px {
                break;
            }
            let w = text.chars().count();
            if w == 0 {
                cursor += 1;
                continue;
            }
            let col = px / HR;
            if col + w + 1 > graph_cells {
                break;
            }

            let at = y_width + col;
            rule[at] = AXIS_TICK;
            for (slot, ch) in line[at..at + w].iter_mut().zip(text.chars()) {
                *slot = ch;
            }
            placed.push(AxisLabel {
                text: text.clone(),
                offset: at,
            });

            let span_px = ((w + 1) * HR) as f64;
            cursor += ((span_px / scale).ceil() as usize).max(1);
        }

        Self {
            rule: rule.into_iter().collect(),
            label_line: Some(line.into_iter().collect()),
            placed,
        }
    }
}
