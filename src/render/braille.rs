//! Sparse sub-pixel grid packed into braille cells.
//!
//! ### Coordinates
//! Sub-pixel space is unbounded signed integer space.  A point `(x, y)`
//! belongs to cell `(x div 2, y div 4)` and selects its dot from
//! [`DOT_BITS`] with `[y mod 4][x mod 2]`.  Division and modulo are
//! Euclidean, so negative coordinates follow the same layout as positive
//! ones: `x = -1` is the right-hand dot of column `-1`.
//!
//! ### Storage
//! One `HashMap` entry per touched cell, keyed by the packed
//! `(column, row)` pair.  Every entry carries the OR of its dots plus the
//! colour of the last write.  Cells that were never touched render as
//! mask 0.
//!
//! ### Glyphs
//! Every mask maps to `U+2800 + mask`.  Mask 0 is emitted as a plain
//! space rather than the blank braille pattern so empty regions stay
//! byte-identical to padding.

use std::collections::HashMap;
use std::ops::Range;

use crate::core::{
    color::Color,
    constants::{
        BRAILLE_HORIZONTAL_RESOLUTION as HR, BRAILLE_OFFSET, BRAILLE_VERTICAL_RESOLUTION as VR,
        DOT_BITS,
    },
};

/// A point in sub-pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubPixel {
    pub x: i32,
    pub y: i32,
}

impl SubPixel {
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Owning cell in character space.
    #[inline]
    #[must_use]
    pub const fn cell(self) -> CellPos {
        CellPos {
            col: self.x.div_euclid(HR as i32),
            row: self.y.div_euclid(VR as i32),
        }
    }

    /// The single mask bit this point sets inside its cell.
    #[inline]
    #[must_use]
    pub const fn bit(self) -> u8 {
        DOT_BITS[self.y.rem_euclid(VR as i32) as usize][self.x.rem_euclid(HR as i32) as usize]
    }
}

/// A character cell position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub col: i32,
    pub row: i32,
}

/// Occupancy mask + colour of one character cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub mask: u8,
    pub color: Color,
}

impl Cell {
    /// Display character for this cell; a space when no dot is on.
    #[inline]
    #[must_use]
    pub fn glyph(self) -> char {
        if self.mask == 0 {
            ' '
        } else {
            braille_char(self.mask)
        }
    }
}

/// `U+2800 + mask`.  Every `u8` lands inside the braille block.
#[inline]
#[must_use]
pub fn braille_char(mask: u8) -> char {
    char::from_u32(BRAILLE_OFFSET + u32::from(mask)).unwrap_or(' ')
}

#[derive(Debug, Default, Clone)]
pub struct SubPixelGrid {
    cells: HashMap<CellPos, Cell>,
}

impl SubPixelGrid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn `p` on and tag its cell with `color` (last writer wins).
    #[inline]
    pub fn set(&mut self, p: SubPixel, color: Color) {
        let cell = self.cells.entry(p.cell()).or_default();
        cell.mask |= p.bit();
        cell.color = color;
    }

    /// Stored cell, if any dot of it was ever set.
    #[inline]
    #[must_use]
    pub fn cell(&self, pos: CellPos) -> Option<Cell> {
        self.cells.get(&pos).copied()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Inclusive bounding box of stored cells as `(min, max)`.
    #[must_use]
    pub fn extent(&self) -> Option<(CellPos, CellPos)> {
        let mut it = self.cells.keys();
        let first = *it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| {
            (
                CellPos {
                    col: lo.col.min(p.col),
                    row: lo.row.min(p.row),
                },
                CellPos {
                    col: hi.col.max(p.col),
                    row: hi.row.max(p.row),
                },
            )
        }))
    }

    /// Cells of the window, row-major from the top.  Missing cells come
    /// back as the default (mask 0, no colour).
    #[must_use]
    pub fn render(&self, cols: Range<i32>, rows: Range<i32>) -> Vec<Vec<Cell>> {
        rows.map(|row| {
            cols.clone()
                .map(|col| self.cell(CellPos { col, row }).unwrap_or_default())
                .collect()
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bit_layout() {
        let bits: Vec<u8> = (0..4)
            .flat_map(|y| (0..2).map(move |x| SubPixel::new(x, y).bit()))
            .collect();
        assert_eq!(bits, [0x01, 0x08, 0x02, 0x10, 0x04, 0x20, 0x40, 0x80]);
    }

    #[test]
    fn test_full_cell_glyph() {
        let mut g = SubPixelGrid::new();
        for y in 0..4 {
            for x in 0..2 {
                g.set(SubPixel::new(x, y), Color::Default);
            }
        }
        let out = g.render(0..1, 0..1);
        assert_eq!(out[0][0].glyph(), '⣿');
    }

    #[test]
    fn test_blank_cell_is_space() {
        let g = SubPixelGrid::new();
        assert_eq!(g.render(0..2, 0..1)[0][1].glyph(), ' ');
        assert_eq!(braille_char(0), '\u{2800}');
    }

    #[test]
    fn test_negative_coordinates() {
        let p = SubPixel::new(-1, -1);
        assert_eq!(p.cell(), CellPos { col: -1, row: -1 });
        // bottom-right dot, same as (1, 3)
        assert_eq!(p.bit(), SubPixel::new(1, 3).bit());
        assert_eq!(SubPixel::new(-4, -5).cell(), CellPos { col: -2, row: -2 });
    }

    #[test]
    fn test_last_writer_wins_colour() {
        let mut g = SubPixelGrid::new();
        g.set(SubPixel::new(0, 0), Color::Red);
        g.set(SubPixel::new(1, 1), Color::Blue);
        let cell = g.cell(CellPos { col: 0, row: 0 }).unwrap();
        assert_eq!(cell.mask, 0x01 | 0x10);
        assert_eq!(cell.color, Color::Blue);
    }

    #[test]
    fn test_extent_and_clear() {
        let mut g = SubPixelGrid::new();
        assert_eq!(g.extent(), None);
        g.set(SubPixel::new(-3, 9), Color::Default);
        g.set(SubPixel::new(10, -2), Color::Default);
        assert_eq!(
            g.extent(),
            Some((CellPos { col: -2, row: -1 }, CellPos { col: 5, row: 2 }))
        );
        g.clear();
        assert!(g.is_empty());
    }

    proptest! {
        #[test]
        fn prop_single_set_yields_single_bit(x in -1000i32..1000, y in -1000i32..1000) {
            let mut g = SubPixelGrid::new();
            let p = SubPixel::new(x, y);
            g.set(p, Color::Green);
            let cell = g.cell(p.cell()).unwrap();
            prop_assert_eq!(cell.mask.count_ones(), 1);
            prop_assert_eq!(cell.mask, p.bit());
            prop_assert_eq!(
                cell.glyph() as u32,
                BRAILLE_OFFSET + u32::from(p.bit())
            );
        }

        #[test]
        fn prop_set_is_idempotent(points in prop::collection::vec((-50i32..50, -50i32..50), 1..40)) {
            let mut once = SubPixelGrid::new();
            let mut twice = SubPixelGrid::new();
            for &(x, y) in &points {
                once.set(SubPixel::new(x, y), Color::Default);
                twice.set(SubPixel::new(x, y), Color::Default);
                twice.set(SubPixel::new(x, y), Color::Default);
            }
            prop_assert_eq!(once.render(-25..25, -13..13), twice.render(-25..25, -13..13));
        }
    }
}
