//! Cell: the atomic unit of a glyph raster.
//!
//! A cell is one grid position's glyph plus its foreground and background
//! colors. A space glyph means "no paint": compositing leaves whatever is
//! beneath it visible.

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Red (255, 0, 0)
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green (0, 255, 0)
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Blue (0, 0, 255)
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

/// A cell color: either a concrete RGB value or transparent.
///
/// Transparency is a first-class color so blank grid cells can carry a
/// "no background" value and run encoding can merge on exact color pairs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// No paint; the surface beneath shows through.
    #[default]
    Transparent,
    /// A concrete 24-bit color.
    Rgb(Rgb),
}

impl Color {
    /// White.
    pub const WHITE: Self = Self::Rgb(Rgb::WHITE);
    /// Black.
    pub const BLACK: Self = Self::Rgb(Rgb::BLACK);
    /// Red.
    pub const RED: Self = Self::Rgb(Rgb::RED);
    /// Green.
    pub const GREEN: Self = Self::Rgb(Rgb::GREEN);
    /// Blue.
    pub const BLUE: Self = Self::Rgb(Rgb::BLUE);

    /// Default foreground for blank cells and row separators.
    pub const DEFAULT_FG: Self = Self::WHITE;

    /// Check whether this color is transparent.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        matches!(self, Self::Transparent)
    }

    /// Get the concrete RGB value, if any.
    #[inline]
    pub const fn rgb(self) -> Option<Rgb> {
        match self {
            Self::Transparent => None,
            Self::Rgb(rgb) => Some(rgb),
        }
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transparent => write!(f, "transparent"),
            Self::Rgb(rgb) => rgb.fmt(f),
        }
    }
}

impl From<Rgb> for Color {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

/// A single glyph cell.
///
/// The glyph is exactly one printable character; the space character denotes
/// "empty/no paint" and is skipped by the compositor.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The glyph to display.
    pub ch: char,
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
}

// Cells are copied per grid position every tick; keep them small.
const _: () = assert!(std::mem::size_of::<Cell>() <= 16);

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

impl Cell {
    /// A blank cell: space glyph, default foreground, transparent background.
    pub const BLANK: Self = Self {
        ch: ' ',
        fg: Color::DEFAULT_FG,
        bg: Color::Transparent,
    };

    /// Create a cell with default colors.
    #[inline]
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            fg: Color::DEFAULT_FG,
            bg: Color::Transparent,
        }
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// Whether this cell paints nothing (space glyph).
    #[inline]
    pub const fn is_blank(self) -> bool {
        self.ch == ' '
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({:?} fg={:?} bg={:?})", self.ch, self.fg, self.bg)
    }
}
