//! Line colour tags + ANSI wrapper.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex colour digit in `{0}`")]
    InvalidHexDigit(String),
    #[error("hex colour must be exactly 6 digits, got `{0}`")]
    InvalidHexLength(String),
    #[error("unknown colour name `{0}`")]
    UnknownName(String),
}

/// Colour tag stored per braille cell.
///
/// `Default` means "no escape at all"; the terminal's foreground is used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// 210, 135, 10
    IndustrialOrange,
    /// 65, 105, 225
    RoyalBlue,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Names accepted by [`Color::from_name`], in display order.
    pub const NAMED: [(&'static str, Color); 11] = [
        ("default", Color::Default),
        ("black", Color::Black),
        ("red", Color::Red),
        ("green", Color::Green),
        ("yellow", Color::Yellow),
        ("blue", Color::Blue),
        ("magenta", Color::Magenta),
        ("cyan", Color::Cyan),
        ("white", Color::White),
        ("orange", Color::IndustrialOrange),
        ("royalblue", Color::RoyalBlue),
    ];

    /// Parse colour names, `#rrggbb` or bare `rrggbb`.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        match lower.as_str() {
            "industrial" => Ok(Self::IndustrialOrange),
            "royal-blue" | "royal_blue" => Ok(Self::RoyalBlue),
            hex if hex.starts_with('#')
                || (hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit())) =>
            {
                Self::from_hex(trimmed)
            }
            name => Self::NAMED
                .iter()
                .find(|(n, _)| *n == name)
                .map(|&(_, c)| c)
                .ok_or_else(|| ColorError::UnknownName(trimmed.to_owned())),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength(hex.to_owned()));
        }
        let byte = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit(hex.to_owned()))
        };
        Ok(Self::Rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    /// Escape sequence that switches the foreground to this colour.
    /// Empty for [`Color::Default`].
    #[must_use]
    pub fn escape(self) -> String {
        match self {
            Self::Default => String::new(),
            Self::Black => "\x1b[30m".into(),
            Self::Red => "\x1b[31m".into(),
            Self::Green => "\x1b[32m".into(),
            Self::Yellow => "\x1b[33m".into(),
            Self::Blue => "\x1b[34m".into(),
            Self::Magenta => "\x1b[35m".into(),
            Self::Cyan => "\x1b[36m".into(),
            Self::White => "\x1b[37m".into(),
            Self::IndustrialOrange => rgb_escape(210, 135, 10),
            Self::RoyalBlue => rgb_escape(65, 105, 225),
            Self::Rgb(r, g, b) => rgb_escape(r, g, b),
        }
    }
}

/// True-colour escape `ESC[38;2;R;G;Bm`.
fn rgb_escape(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

const RESET: &str = "\x1b[0m";

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.escape())
    }
}

/// Wrap `text` in colour + reset sequence.  Identity for [`Color::Default`].
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    match color {
        Color::Default => text.to_owned(),
        c => format!("{c}{text}{RESET}"),
    }
}
