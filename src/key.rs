/// Key codes representing individual keys on the keyboard.
///
/// This enum provides a platform-agnostic representation of keys.
/// Hosts should map their platform-specific key events to these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A key that produced a decoded character.
    /// Case does not matter: the engine folds case before matching hints
    /// and search text.
    Char(char),
    /// The Escape key, cancels the running selection.
    Esc,
    /// The Enter/Return key, commits the currently rotated target.
    Enter,
    /// The Backspace key, erases typed hint characters first, then query text.
    Backspace,
    /// The Tab key, rotates among overlapping targets.
    Tab,
    /// Any other key, carried as the host's raw key code.
    /// Modifier-only presses land here and are ignored.
    Other(u16),
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    ///
    /// These can be combined to represent multiple modifiers held simultaneously.
    /// On macOS `ALT` is Option and `META` is Command.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

/// A key press event with optional modifiers.
///
/// This represents a single key press, including any modifier keys held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the key press.
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: Modifiers) -> Self {
        Self { code, mods }
    }

    /// A character press without modifiers.
    pub fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c), Modifiers::empty())
    }

    /// The decoded character if it is printable text.
    pub fn printable(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::new(code, Modifiers::empty())
    }
}
