//! Key combinations and the palette keymap
//!
//! Hosts translate their platform key events into [`KeyCombination`] values and
//! hand them to [`event_for_key`], which decides which [`PaletteEvent`] (if any)
//! the key means in the palette's current state:
//!
//! | Key              | Palette inactive | Palette active       |
//! |------------------|------------------|----------------------|
//! | activation key   | `Open`           | -                    |
//! | Up               | -                | `SelectPrevious`     |
//! | Down             | -                | `SelectNext`         |
//! | Enter            | -                | `Commit`             |
//! | Escape           | -                | `Cancel`             |
//! | Cmd+1 .. Cmd+9   | -                | `QuickSelect(0..9)`  |

use crate::palette::state::{PaletteEvent, QUICK_SELECT_SLOTS};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Failure to parse a key combination string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("empty key combination")]
    Empty,

    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),

    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

// =============================================================================
// Modifiers
// =============================================================================

/// Modifier keys held with a key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    /// Command on macOS, Super/Windows elsewhere
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };
    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };
    pub const ALT: Self = Self {
        alt: true,
        ..Self::NONE
    };
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };
    pub const META: Self = Self {
        meta: true,
        ..Self::NONE
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

// =============================================================================
// KeyCode / KeyCombination
// =============================================================================

/// Keys the palette cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Up,
    Down,
    Enter,
    Escape,
    /// A printable character, stored lowercase
    Char(char),
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Up => write!(f, "Up"),
            KeyCode::Down => write!(f, "Down"),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
        }
    }
}

/// A key plus its modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyCombination {
    pub key: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyCombination {
    pub fn new(key: KeyCode, modifiers: Modifiers) -> Self {
        let key = match key {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        Self { key, modifiers }
    }

    /// A key with no modifiers
    pub fn plain(key: KeyCode) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Parse a string like "cmd+k" or "Ctrl+Shift+P"
    pub fn parse(s: &str) -> Result<Self, KeyParseError> {
        let parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let (key_part, modifier_parts) = match parts.split_last() {
            Some((key, mods)) if !key.is_empty() => (*key, mods),
            _ => return Err(KeyParseError::Empty),
        };

        let mut modifiers = Modifiers::NONE;
        for part in modifier_parts {
            match part.to_lowercase().as_str() {
                "cmd" | "command" | "meta" | "super" | "win" => modifiers.meta = true,
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" | "option" | "opt" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                _ => return Err(KeyParseError::UnknownModifier(part.to_string())),
            }
        }

        let key = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "enter" | "return" => KeyCode::Enter,
            "escape" | "esc" => KeyCode::Escape,
            "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(KeyParseError::UnknownKey(key_part.to_string())),
                }
            }
        };

        Ok(Self::new(key, modifiers))
    }

    /// Human readable form, e.g. "Cmd+K"
    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }
        if self.modifiers.meta {
            parts.push("Cmd".to_string());
        }
        parts.push(self.key.to_string());
        parts.join("+")
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

// =============================================================================
// Keymap
// =============================================================================

/// Translate a key into a palette event.
///
/// Plain characters are not events: text entry belongs to the host's text field,
/// which reports the whole query through `PaletteEvent::QueryChanged`.
pub fn event_for_key(
    combination: &KeyCombination,
    active: bool,
    activation_key: Option<&KeyCombination>,
) -> Option<PaletteEvent> {
    if !active {
        return match activation_key {
            Some(key) if key == combination => Some(PaletteEvent::Open),
            _ => None,
        };
    }

    match (combination.key, combination.modifiers) {
        (KeyCode::Up, Modifiers::NONE) => Some(PaletteEvent::SelectPrevious),
        (KeyCode::Down, Modifiers::NONE) => Some(PaletteEvent::SelectNext),
        (KeyCode::Enter, Modifiers::NONE) => Some(PaletteEvent::Commit),
        (KeyCode::Escape, Modifiers::NONE) => Some(PaletteEvent::Cancel),
        (KeyCode::Char(c), Modifiers::META) => quick_select_slot(c).map(PaletteEvent::QuickSelect),
        _ => None,
    }
}

/// Map '1'..'9' to slot 0..9
fn quick_select_slot(c: char) -> Option<usize> {
    let digit = c.to_digit(10)? as usize;
    (1..=QUICK_SELECT_SLOTS)
        .contains(&digit)
        .then(|| digit - 1)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let combo = KeyCombination::parse("cmd+k").unwrap();

        assert_eq!(combo.key, KeyCode::Char('k'));
        assert_eq!(combo.modifiers, Modifiers::META);
    }

    #[test]
    fn test_parse_multiple_modifiers() {
        let combo = KeyCombination::parse("Ctrl+Shift+P").unwrap();

        assert_eq!(combo.key, KeyCode::Char('p'));
        assert!(combo.modifiers.ctrl);
        assert!(combo.modifiers.shift);
        assert!(!combo.modifiers.meta);
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(KeyCombination::parse("up").unwrap().key, KeyCode::Up);
        assert_eq!(KeyCombination::parse("Return").unwrap().key, KeyCode::Enter);
        assert_eq!(KeyCombination::parse("esc").unwrap().key, KeyCode::Escape);
        assert_eq!(
            KeyCombination::parse("alt+space").unwrap().key,
            KeyCode::Char(' ')
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(KeyCombination::parse(""), Err(KeyParseError::Empty));
        assert_eq!(KeyCombination::parse("cmd+"), Err(KeyParseError::Empty));
        assert_eq!(
            KeyCombination::parse("hyper+k"),
            Err(KeyParseError::UnknownModifier("hyper".to_string()))
        );
        assert_eq!(
            KeyCombination::parse("cmd+pageup"),
            Err(KeyParseError::UnknownKey("pageup".to_string()))
        );
    }

    #[test]
    fn test_display() {
        let combo = KeyCombination::parse("shift+cmd+k").unwrap();
        assert_eq!(combo.display(), "Shift+Cmd+K");
        assert_eq!(KeyCombination::plain(KeyCode::Enter).to_string(), "Enter");
    }

    #[test]
    fn test_activation_key_opens_inactive_palette() {
        let activation = KeyCombination::parse("cmd+k").unwrap();

        assert_eq!(
            event_for_key(&activation, false, Some(&activation)),
            Some(PaletteEvent::Open)
        );
        assert_eq!(event_for_key(&activation, true, Some(&activation)), None);
        assert_eq!(event_for_key(&activation, false, None), None);
    }

    #[test]
    fn test_navigation_keys_when_active() {
        let key = |code| KeyCombination::plain(code);

        assert_eq!(
            event_for_key(&key(KeyCode::Up), true, None),
            Some(PaletteEvent::SelectPrevious)
        );
        assert_eq!(
            event_for_key(&key(KeyCode::Down), true, None),
            Some(PaletteEvent::SelectNext)
        );
        assert_eq!(
            event_for_key(&key(KeyCode::Enter), true, None),
            Some(PaletteEvent::Commit)
        );
        assert_eq!(
            event_for_key(&key(KeyCode::Escape), true, None),
            Some(PaletteEvent::Cancel)
        );
        assert_eq!(event_for_key(&key(KeyCode::Down), false, None), None);
    }

    #[test]
    fn test_quick_select_keys() {
        let cmd = |c| KeyCombination::new(KeyCode::Char(c), Modifiers::META);

        assert_eq!(
            event_for_key(&cmd('1'), true, None),
            Some(PaletteEvent::QuickSelect(0))
        );
        assert_eq!(
            event_for_key(&cmd('9'), true, None),
            Some(PaletteEvent::QuickSelect(8))
        );
        assert_eq!(event_for_key(&cmd('0'), true, None), None);
        assert_eq!(
            event_for_key(&KeyCombination::plain(KeyCode::Char('1')), true, None),
            None
        );
    }
}
