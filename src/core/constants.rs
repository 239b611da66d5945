//! A collection of constants.

/// First code point of the Unicode braille block (all dots off).
pub const BRAILLE_OFFSET: u32 = 0x2800;

/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;
/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_VERTICAL_RESOLUTION: usize = 4;

/// Bit for every dot of a cell, indexed `[y % 4][x % 2]`.
///
/// ```text
/// ,___,
/// |1 4|
/// |2 5|
/// |3 6|
/// |7 8|
/// `````
/// ```
pub const DOT_BITS: [[u8; BRAILLE_HORIZONTAL_RESOLUTION]; BRAILLE_VERTICAL_RESOLUTION] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// Axis values are rounded to two decimal places.
///
/// 14.832 becomes 14.83
pub const DECIMAL_PRECISION: usize = 2;

/// Decoration after every y label. Stacked rows form the vertical axis.
pub const Y_TICK: &str = " ┤ ";
/// Display width of [`Y_TICK`].
pub const Y_TICK_WIDTH: usize = 3;

/// Corner where the two axes meet.
pub const AXIS_CORNER: char = '└';
/// Plain horizontal rule.
pub const AXIS_RULE: char = '─';
/// Connector above a category label.
pub const AXIS_TICK: char = '┬';

/// Line terminator used unless configured otherwise.
pub const DEFAULT_LINE_ENDING: &str = "\n";
