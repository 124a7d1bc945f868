//! Cell: one styled character on the render surface.
//!
//! Widgets draw into a [`Buffer`](super::Buffer) of cells; the host turns
//! that grid into terminal output. A cell holds a single `char`. Wide
//! characters take two cells, the second flagged as a continuation.

use bitflags::bitflags;

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
    /// Mid gray used for dimmed text.
    pub const GRAY: Self = Self::new(110, 110, 110);
    /// Default foreground (white)
    pub const DEFAULT_FG: Self = Self::WHITE;
    /// Default background (black)
    pub const DEFAULT_BG: Self = Self::BLACK;

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

bitflags! {
    /// Text style modifiers.
    ///
    /// # Example
    /// ```
    /// use flyedit::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::REVERSED;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0010_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

bitflags! {
    /// Cell-level flags.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        /// Right half of a wide character; draws nothing itself.
        const WIDE_CONTINUATION = 0b0000_0001;
        /// The terminal cursor belongs here.
        const CURSOR = 0b0000_0010;
    }
}

impl std::fmt::Debug for CellFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Colors and modifiers applied to drawn text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Text modifiers.
    pub modifiers: Modifiers,
}

impl Style {
    /// Create a style without modifiers.
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            modifiers: Modifiers::empty(),
        }
    }

    /// Add modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Rgb::DEFAULT_FG, Rgb::DEFAULT_BG)
    }
}

/// A single styled cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    symbol: char,
    fg: Rgb,
    bg: Rgb,
    modifiers: Modifiers,
    flags: CellFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// A blank cell with default colors.
    pub const EMPTY: Self = Self::new(' ');

    /// Create a cell with default colors.
    #[inline]
    pub const fn new(symbol: char) -> Self {
        Self {
            symbol,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
            flags: CellFlags::empty(),
        }
    }

    /// Create a cell drawn with `style`.
    #[inline]
    pub const fn styled(symbol: char, style: Style) -> Self {
        Self {
            symbol,
            fg: style.fg,
            bg: style.bg,
            modifiers: style.modifiers,
            flags: CellFlags::empty(),
        }
    }

    /// The right half of a wide character.
    pub const fn wide_continuation(style: Style) -> Self {
        let mut cell = Self::styled(' ', style);
        cell.flags = CellFlags::WIDE_CONTINUATION;
        cell
    }

    /// The character in this cell.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Text modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Cell flags.
    #[inline]
    pub const fn flags(&self) -> CellFlags {
        self.flags
    }

    /// Check if this is the right half of a wide character.
    pub const fn is_wide_continuation(&self) -> bool {
        self.flags.contains(CellFlags::WIDE_CONTINUATION)
    }

    /// Check if the terminal cursor belongs on this cell.
    pub const fn is_cursor(&self) -> bool {
        self.flags.contains(CellFlags::CURSOR)
    }

    /// Mark or unmark this cell as the cursor position.
    pub fn set_cursor(&mut self, cursor: bool) -> &mut Self {
        self.flags.set(CellFlags::CURSOR, cursor);
        self
    }

    /// Builder: set foreground.
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Builder: set background.
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Builder: set modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Reset to [`Cell::EMPTY`].
    pub const fn reset(&mut self) {
        *self = Self::EMPTY;
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("symbol", &self.symbol)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("modifiers", &self.modifiers)
            .field("flags", &self.flags)
            .finish()
    }
}
