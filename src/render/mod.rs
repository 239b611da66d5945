pub mod axis;
pub mod braille;
pub mod chart;
pub mod line;

pub use axis::{AxisLabel, XAxis, YAxis};
pub use braille::{Cell, CellPos, SubPixel, SubPixelGrid};
pub use chart::{Canvas, plot};
pub use line::trace;
