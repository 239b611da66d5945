//! Slope-stepping line tracer between two sub-pixels.
//!
//! The chart always advances x by at least one sub-pixel per sample, so
//! only segments with distinct x are traced.  A vertical pair is reported
//! as [`PlotError::VerticalSegment`] instead of guessing a direction.

use crate::{core::error::PlotError, render::braille::SubPixel};

/// `n / d` rounded half away from zero.  `d` must be positive.
#[inline]
fn div_round(n: i64, d: i64) -> i64 {
    debug_assert!(d > 0);
    if n >= 0 {
        (2 * n + d) / (2 * d)
    } else {
        -((-2 * n + d) / (2 * d))
    }
}

/// Every sub-pixel on the segment from `p0` to `p1`, walked left to right.
///
/// * One point per integer x in `[min x, max x]`, the column's resting y.
/// * When y moves by more than one between neighbouring columns, the
///   departing column is filled vertically so the line has no gaps.
/// * Both endpoints are included; the result is the same for
///   `(p0, p1)` and `(p1, p0)`.
pub fn trace(p0: SubPixel, p1: SubPixel) -> Result<Vec<SubPixel>, PlotError> {
    if p0.x == p1.x {
        return Err(PlotError::VerticalSegment { x: p0.x });
    }
    let (left, right) = if p0.x < p1.x { (p0, p1) } else { (p1, p0) };

    let dx = i64::from(right.x) - i64::from(left.x);
    let dy = i64::from(right.y) - i64::from(left.y);
    let dir = if dy < 0 { -1 } else { 1 };

    let mut points = Vec::with_capacity(usize::try_from(dx + dy.abs()).unwrap_or(0) + 1);
    let mut y = left.y;
    points.push(left);

    for step in 1..=dx {
        // i64 -> i32 is exact: the target lies between left.y and right.y
        let target = left.y + i32::try_from(div_round(step * dy, dx)).unwrap_or(0);
        let x = left.x + i32::try_from(step).unwrap_or(0);
        // in-fill on the departing column, stopping one short of the target
        while (target - y).abs() > 1 {
            y += dir;
            points.push(SubPixel::new(x - 1, y));
        }
        y = target;
        points.push(SubPixel::new(x, y));
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn pts(v: &[(i32, i32)]) -> Vec<SubPixel> {
        v.iter().map(|&(x, y)| SubPixel::new(x, y)).collect()
    }

    #[test]
    fn test_horizontal() {
        let line = trace(SubPixel::new(0, 3), SubPixel::new(3, 3)).unwrap();
        assert_eq!(line, pts(&[(0, 3), (1, 3), (2, 3), (3, 3)]));
    }

    #[test]
    fn test_shallow_slope() {
        let line = trace(SubPixel::new(0, 0), SubPixel::new(4, 2)).unwrap();
        // 0.5 rounds away from zero
        assert_eq!(line, pts(&[(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]));
    }

    #[test]
    fn test_steep_segment_is_filled() {
        let line = trace(SubPixel::new(0, 0), SubPixel::new(1, 5)).unwrap();
        assert_eq!(
            line,
            pts(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 5)])
        );
        let up = trace(SubPixel::new(5, 10), SubPixel::new(6, 7)).unwrap();
        assert_eq!(up, pts(&[(5, 10), (5, 9), (5, 8), (6, 7)]));
    }

    #[test]
    fn test_vertical_rejected() {
        let err = trace(SubPixel::new(2, 0), SubPixel::new(2, 9)).unwrap_err();
        assert!(matches!(err, PlotError::VerticalSegment { x: 2 }));
    }

    #[test]
    fn test_negative_space() {
        let line = trace(SubPixel::new(-2, -1), SubPixel::new(-4, 1)).unwrap();
        assert_eq!(line, pts(&[(-4, 1), (-3, 0), (-2, -1)]));
    }

    proptest! {
        #[test]
        fn prop_direction_independent(
            x0 in -200i32..200, y0 in -200i32..200,
            x1 in -200i32..200, y1 in -200i32..200,
        ) {
            prop_assume!(x0 != x1);
            let a = SubPixel::new(x0, y0);
            let b = SubPixel::new(x1, y1);
            let fwd: BTreeSet<_> = trace(a, b).unwrap().into_iter().collect();
            let back: BTreeSet<_> = trace(b, a).unwrap().into_iter().collect();
            prop_assert_eq!(fwd, back);
        }

        #[test]
        fn prop_covers_every_column_without_gaps(
            x0 in -100i32..100, y0 in -100i32..100,
            dx in 1i32..60, y1 in -100i32..100,
        ) {
            let line = trace(SubPixel::new(x0, y0), SubPixel::new(x0 + dx, y1)).unwrap();
            prop_assert_eq!(line.first().copied(), Some(SubPixel::new(x0, y0)));
            prop_assert_eq!(line.last().copied(), Some(SubPixel::new(x0 + dx, y1)));

            // exactly one resting point per column, the rest is in-fill
            let fill: usize = line
                .windows(2)
                .map(|w| usize::from(w[0].x == w[1].x))
                .sum();
            prop_assert_eq!(line.len() - fill, (dx + 1) as usize);
            let cols: BTreeSet<_> = line.iter().map(|p| p.x).collect();
            prop_assert_eq!(cols.len(), (dx + 1) as usize);

            // 8-connected: no gaps in either direction
            for w in line.windows(2) {
                prop_assert!((w[1].x - w[0].x) <= 1 && w[1].x >= w[0].x);
                prop_assert!((w[1].y - w[0].y).abs() <= 1);
            }
        }
    }
}
