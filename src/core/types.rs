// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/types.rs
//!
//! Core type definitions for shortcut validation
//!
//! This module defines the fundamental types used throughout the crate:
//! - `Modifier`: Keyboard modifier keys (Ctrl, Shift, Alt, Meta)
//! - `Key`: The primary key that completes a shortcut
//! - `ShortcutCombo`: A set of modifiers plus exactly one key
//!
//! Names are matched exactly as written in the allow-list. "ctrl" or "a"
//! are not accepted; callers are expected to send canonical names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::validator::ShortcutError;

/// Keyboard modifier keys
///
/// The derived ordering (Ctrl < Shift < Alt < Meta) is the canonical order
/// used when a combo is normalised and displayed.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Modifier {
    /// Control key
    Ctrl,
    /// Shift key
    Shift,
    /// Alt/Option key
    Alt,
    /// Meta key (Cmd on macOS, Windows/Super elsewhere)
    Meta,
}

impl Modifier {
    /// All modifiers in canonical order
    pub const ALL: [Modifier; 4] = [Modifier::Ctrl, Modifier::Shift, Modifier::Alt, Modifier::Meta];

    /// Canonical name as accepted by `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Ctrl => "Ctrl",
            Modifier::Shift => "Shift",
            Modifier::Alt => "Alt",
            Modifier::Meta => "Meta",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Modifier {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modifier::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ShortcutError::InvalidModifier(s.to_string()))
    }
}

/// Primary (non-modifier) key of a shortcut
///
/// Only the keys listed here may be assigned. `Character` holds an
/// uppercase ASCII letter or a digit, `Function` holds 1 to 12.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    /// A–Z or 0–9
    Character(char),
    /// F1–F12
    Function(u8),
    Enter,
    Escape,
    Space,
    Tab,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// Named keys paired with their canonical spelling
const NAMED_KEYS: &[(Key, &str)] = &[
    (Key::Enter, "Enter"),
    (Key::Escape, "Escape"),
    (Key::Space, "Space"),
    (Key::Tab, "Tab"),
    (Key::Backspace, "Backspace"),
    (Key::Delete, "Delete"),
    (Key::Insert, "Insert"),
    (Key::Home, "Home"),
    (Key::End, "End"),
    (Key::PageUp, "PageUp"),
    (Key::PageDown, "PageDown"),
    (Key::ArrowUp, "ArrowUp"),
    (Key::ArrowDown, "ArrowDown"),
    (Key::ArrowLeft, "ArrowLeft"),
    (Key::ArrowRight, "ArrowRight"),
];

impl Key {
    /// Every key in the allow-list, letters first, then digits, function
    /// keys and named keys.
    pub fn all() -> Vec<Key> {
        ('A'..='Z')
            .chain('0'..='9')
            .map(Key::Character)
            .chain((1..=12).map(Key::Function))
            .chain(NAMED_KEYS.iter().map(|(key, _)| *key))
            .collect()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Character(c) => write!(f, "{}", c),
            Key::Function(n) => write!(f, "F{}", n),
            named => {
                let name = NAMED_KEYS
                    .iter()
                    .find(|(key, _)| key == named)
                    .map(|(_, name)| *name)
                    .unwrap_or_default();
                write!(f, "{}", name)
            }
        }
    }
}

impl FromStr for Key {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || ShortcutError::UnsupportedKey(s.to_string());

        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return if c.is_ascii_uppercase() || c.is_ascii_digit() {
                Ok(Key::Character(c))
            } else {
                Err(unsupported())
            };
        }

        // "F1".."F12" only; leading zeros and signs are not canonical
        if let Some(number) = s.strip_prefix('F') {
            return match number.parse::<u8>() {
                Ok(n @ 1..=12) if number == n.to_string() => Ok(Key::Function(n)),
                _ => Err(unsupported()),
            };
        }

        NAMED_KEYS
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(key, _)| *key)
            .ok_or_else(unsupported)
    }
}

impl TryFrom<String> for Key {
    type Error = ShortcutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

/// A set of modifiers plus one key
///
/// Equality is set-equality on modifiers combined with an exact key match.
/// `ShortcutCombo::new` sorts and deduplicates the modifiers so that the
/// derived `Eq` and `Hash` implement exactly that.
///
/// # Example
/// ```
/// use shortcut_guard::core::{Key, Modifier, ShortcutCombo};
///
/// let a = ShortcutCombo::new(vec![Modifier::Shift, Modifier::Ctrl], Key::Escape);
/// let b = ShortcutCombo::new(vec![Modifier::Ctrl, Modifier::Shift, Modifier::Ctrl], Key::Escape);
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "Ctrl+Shift+Escape");
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "RawCombo")]
pub struct ShortcutCombo {
    /// Modifier keys, sorted and without duplicates
    pub modifiers: Vec<Modifier>,

    /// Primary key
    pub key: Key,
}

impl ShortcutCombo {
    /// Create a new ShortcutCombo with normalised modifiers
    pub fn new(mut modifiers: Vec<Modifier>, key: Key) -> Self {
        modifiers.sort();
        modifiers.dedup();

        Self { modifiers, key }
    }
}

impl fmt::Display for ShortcutCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier)?;
        }
        write!(f, "{}", self.key)
    }
}

/// Deserialisation shape; routed through `ShortcutCombo::new`
#[derive(Deserialize)]
struct RawCombo {
    modifiers: Vec<Modifier>,
    key: Key,
}

impl From<RawCombo> for ShortcutCombo {
    fn from(raw: RawCombo) -> Self {
        ShortcutCombo::new(raw.modifiers, raw.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_display() {
        assert_eq!(format!("{}", Modifier::Ctrl), "Ctrl");
        assert_eq!(format!("{}", Modifier::Meta), "Meta");
    }

    #[test]
    fn test_named_key_display() {
        assert_eq!(Key::PageDown.to_string(), "PageDown");
        assert_eq!(Key::ArrowLeft.to_string(), "ArrowLeft");
    }

    #[test]
    fn test_allow_list_size() {
        // 26 letters + 10 digits + 12 function keys + 15 named keys
        assert_eq!(Key::all().len(), 63);
    }
}
