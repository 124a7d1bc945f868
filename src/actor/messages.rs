//! Input vocabulary shared by the reader thread and the components.

/// Keys the editing components understand.
///
/// Anything else crossterm reports is dropped at conversion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Backspace.
    Backspace,
    /// Delete.
    Delete,
    /// Enter/Return.
    Enter,
    /// Escape.
    Esc,
    /// Cursor left.
    Left,
    /// Cursor right.
    Right,
    /// Cursor up.
    Up,
    /// Cursor down.
    Down,
    /// Home.
    Home,
    /// End.
    End,
}

/// Modifier state of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift.
    pub shift: bool,
    /// Control.
    pub control: bool,
    /// Alt/Option.
    pub alt: bool,
    /// Super/Command.
    pub super_key: bool,
}

impl KeyModifiers {
    /// Nothing held.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        super_key: false,
    };

    /// Control held.
    pub const CONTROL: Self = Self {
        control: true,
        ..Self::NONE
    };

    /// Shift held.
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Whether a held modifier turns a character into a command.
    ///
    /// Shift alone still produces text.
    pub const fn is_command(&self) -> bool {
        self.control || self.alt || self.super_key
    }
}

/// One unit of input handed to an editable component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press.
    Key {
        /// Which key.
        code: KeyCode,
        /// Modifiers held with it.
        modifiers: KeyModifiers,
    },

    /// The terminal changed size.
    Resize {
        /// Columns.
        width: u16,
        /// Rows.
        height: u16,
    },

    /// Bracketed paste; inserted as one edit.
    Paste(String),

    /// The input thread hit an error reading the terminal.
    Error(String),

    /// The input thread stopped.
    Shutdown,
}

impl InputEvent {
    /// A key press without modifiers.
    pub const fn key(code: KeyCode) -> Self {
        Self::Key {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A key press with Control held.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::Key {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// A plain character key press.
    pub const fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }
}
