//! Cell styles
//!
//! `ColorStyle` is what a style provider hands the viewport for every
//! rendered column. It maps one-to-one onto crossterm's colour and attribute
//! commands when painted.

use crossterm::style::{Attribute, Color as CrosstermColor};
use std::str::FromStr;

/// Terminal colour: 16 named colours, the 256-colour palette, or RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Reset,
    Black,
    DarkGrey,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
    White,
    Grey,
    Ansi256(u8),
    Rgb { r: u8, g: u8, b: u8 },
}

const NAMED: &[(&str, Color)] = &[
    ("reset", Color::Reset),
    ("black", Color::Black),
    ("darkgrey", Color::DarkGrey),
    ("red", Color::Red),
    ("darkred", Color::DarkRed),
    ("green", Color::Green),
    ("darkgreen", Color::DarkGreen),
    ("yellow", Color::Yellow),
    ("darkyellow", Color::DarkYellow),
    ("blue", Color::Blue),
    ("darkblue", Color::DarkBlue),
    ("magenta", Color::Magenta),
    ("darkmagenta", Color::DarkMagenta),
    ("cyan", Color::Cyan),
    ("darkcyan", Color::DarkCyan),
    ("white", Color::White),
    ("grey", Color::Grey),
];

impl FromStr for Color {
    type Err = String;

    /// Accepts a colour name (`red`, `darkcyan`), a palette index (`208`),
    /// or a hex triple (`#ff8800`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();

        if let Some(hex) = lowered.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(format!("Invalid hex colour: {s}"));
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
            return match (channel(0), channel(2), channel(4)) {
                (Ok(r), Ok(g), Ok(b)) => Ok(Color::Rgb { r, g, b }),
                _ => Err(format!("Invalid hex colour: {s}")),
            };
        }

        if let Ok(index) = lowered.parse::<u8>() {
            return Ok(Color::Ansi256(index));
        }

        NAMED
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, color)| *color)
            .ok_or_else(|| format!("Unknown colour: {s}"))
    }
}

impl From<Color> for CrosstermColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Reset => CrosstermColor::Reset,
            Color::Black => CrosstermColor::Black,
            Color::DarkGrey => CrosstermColor::DarkGrey,
            Color::Red => CrosstermColor::Red,
            Color::DarkRed => CrosstermColor::DarkRed,
            Color::Green => CrosstermColor::Green,
            Color::DarkGreen => CrosstermColor::DarkGreen,
            Color::Yellow => CrosstermColor::Yellow,
            Color::DarkYellow => CrosstermColor::DarkYellow,
            Color::Blue => CrosstermColor::Blue,
            Color::DarkBlue => CrosstermColor::DarkBlue,
            Color::Magenta => CrosstermColor::Magenta,
            Color::DarkMagenta => CrosstermColor::DarkMagenta,
            Color::Cyan => CrosstermColor::Cyan,
            Color::DarkCyan => CrosstermColor::DarkCyan,
            Color::White => CrosstermColor::White,
            Color::Grey => CrosstermColor::Grey,
            Color::Ansi256(n) => CrosstermColor::AnsiValue(n),
            Color::Rgb { r, g, b } => CrosstermColor::Rgb { r, g, b },
        }
    }
}

/// Style of one rendered cell
///
/// `None` colours leave the terminal default in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl ColorStyle {
    /// The terminal default style
    #[must_use]
    pub const fn plain() -> Self {
        ColorStyle {
            fg: None,
            bg: None,
            bold: false,
            dim: false,
        }
    }

    #[must_use]
    pub fn fg(fg: Color) -> Self {
        Self::plain().with_fg(fg)
    }

    #[must_use]
    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = Some(fg);
        self
    }

    #[must_use]
    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::plain()
    }

    /// Attributes to switch on when painting this style
    #[must_use]
    pub fn attributes(&self) -> Vec<Attribute> {
        let mut attrs = Vec::new();
        if self.bold {
            attrs.push(Attribute::Bold);
        }
        if self.dim {
            attrs.push(Attribute::Dim);
        }
        attrs
    }
}
