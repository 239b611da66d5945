//! Geometry helpers: value range + terminal size plumbing.

use std::fmt::Write;

use terminal_size::{Height, Width, terminal_size};

use crate::core::{config::CanvasConfig, constants::Y_TICK_WIDTH};

/// Vertical extent shared by every series on one canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Global bounds over all series, overridden by explicit config bounds.
    ///
    /// * `max` is the largest sample unless `y_max` is set.
    /// * `min` is `y_min` if set, else `0` or the smallest sample when that
    ///   is negative, so non-negative data is measured from zero.
    /// * A single explicit bound drags the other one along so the range
    ///   never inverts.
    /// * Samples must already be finite.
    #[must_use]
    pub fn resolve(series: &[Vec<f64>], config: &CanvasConfig) -> Self {
        let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
        for v in series.iter().flatten() {
            low = low.min(*v);
            high = high.max(*v);
        }
        if !low.is_finite() || !high.is_finite() {
            (low, high) = (0.0, 0.0);
        }
        // `+ 0.0` folds a `-0.0` minimum into `0.0`
        let low = low.min(0.0) + 0.0;
        let (min, max) = match (config.y_min, config.y_max) {
            (Some(min), Some(max)) => (min, max),
            (Some(min), None) => (min, high.max(min)),
            (None, Some(max)) => (low.min(max), max),
            (None, None) => (low, high),
        };
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// A range without height (all-zero or constant data).
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.span().abs() < f64::EPSILON || self.span() < 0.0
    }

    /// Position of `v` inside the range, clamped to `0.0..=1.0`.
    /// Degenerate ranges put every value on the baseline.
    #[inline]
    #[must_use]
    pub fn normalize(&self, v: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        ((v - self.min) / self.span()).clamp(0.0, 1.0)
    }
}

/// Current terminal geometry (80×24 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(24)))
}

/// Width of the y label column: the widest formatted bound plus the tick
/// decoration.  Only the bounds are measured, never individual row labels.
#[must_use]
pub fn y_label_width(range: ValueRange, decimals: usize) -> usize {
    let mut s = String::new();
    let mut widest = 0;
    for bound in [range.min, range.max] {
        s.clear();
        let _ = write!(&mut s, "{bound:.decimals$}");
        widest = widest.max(s.chars().count());
    }
    widest + Y_TICK_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> CanvasConfig {
        CanvasConfig::builder(10, 5).build().unwrap()
    }

    #[test]
    fn test_resolve_from_zero() {
        let r = ValueRange::resolve(&[vec![3.0, 9.0], vec![5.0]], &cfg());
        assert_eq!(r, ValueRange { min: 0.0, max: 9.0 });
    }

    #[test]
    fn test_resolve_negative_and_explicit() {
        let r = ValueRange::resolve(&[vec![-4.0, 2.0]], &cfg());
        assert_eq!(r, ValueRange { min: -4.0, max: 2.0 });

        let explicit = CanvasConfig::builder(10, 5).y_max(100.0).build().unwrap();
        let r = ValueRange::resolve(&[vec![1.0, 2.0]], &explicit);
        assert_eq!(r.max, 100.0);
    }

    #[test]
    fn test_lone_y_min_above_data_never_inverts() {
        let config = CanvasConfig::builder(10, 5).y_min(10.0).build().unwrap();
        let r = ValueRange::resolve(&[vec![1.0, 2.0, 3.0]], &config);
        assert_eq!(r, ValueRange { min: 10.0, max: 10.0 });
        assert!(r.min <= r.max);

        let config = CanvasConfig::builder(10, 5).y_min(1.5).build().unwrap();
        let r = ValueRange::resolve(&[vec![1.0, 2.0, 3.0]], &config);
        assert_eq!(r, ValueRange { min: 1.5, max: 3.0 });
    }

    #[test]
    fn test_lone_y_max_below_data_never_inverts() {
        let config = CanvasConfig::builder(10, 5).y_max(-5.0).build().unwrap();
        let r = ValueRange::resolve(&[vec![1.0, 2.0, 3.0]], &config);
        assert_eq!(r, ValueRange { min: -5.0, max: -5.0 });

        let config = CanvasConfig::builder(10, 5).y_max(-20.0).build().unwrap();
        let r = ValueRange::resolve(&[vec![-10.0, -1.0]], &config);
        assert_eq!(r, ValueRange { min: -20.0, max: -20.0 });
        assert!(r.min <= r.max);
    }

    #[test]
    fn test_negative_zero_minimum_is_positive_zero() {
        let r = ValueRange::resolve(&[vec![-0.0, 4.0]], &cfg());
        assert!(r.min.is_sign_positive());
        // " 0.00" and "4.00" are both four characters wide
        assert_eq!(y_label_width(r, 2), "4.00".len() + 3);
    }

    #[test]
    fn test_degenerate_normalizes_to_baseline() {
        let r = ValueRange::resolve(&[vec![0.0, 0.0]], &cfg());
        assert!(r.is_degenerate());
        assert_eq!(r.normalize(0.0), 0.0);
    }

    #[test]
    fn test_normalize_clamps() {
        let r = ValueRange { min: 0.0, max: 10.0 };
        assert_eq!(r.normalize(5.0), 0.5);
        assert_eq!(r.normalize(20.0), 1.0);
        assert_eq!(r.normalize(-3.0), 0.0);
    }

    #[test]
    fn test_label_width() {
        let r = ValueRange { min: 0.0, max: 256.0 };
        // "256.00" + " ┤ "
        assert_eq!(y_label_width(r, 2), 9);
        let r = ValueRange { min: -1000.0, max: 5.0 };
        assert_eq!(y_label_width(r, 2), "-1000.00".len() + 3);
    }
}
