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

//! Whitelist validation of proposed shortcuts
//!
//! A shortcut is accepted only when its key and every modifier are on the
//! allow-list and the resulting combo is not reserved by the operating
//! system. Checks run in a fixed order and the first failure wins:
//!
//! 1. Empty key
//! 2. Key not on the allow-list
//! 3. No modifiers
//! 4. Modifier not on the allow-list
//! 5. Reserved combo
//!
//! Input names are trimmed and empty modifier entries are dropped before
//! any check runs.

use log::debug;
use thiserror::Error;

use crate::core::reserved::find_reserved;
use crate::core::types::{Key, Modifier, ShortcutCombo};

/// Reasons a shortcut is rejected
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ShortcutError {
    /// Key was empty after trimming
    #[error("Please choose a key for your shortcut.")]
    MissingKey,

    /// Key not on the allow-list
    #[error("This key is not supported for custom shortcuts. Please pick a standard key (e.g., A–Z, 0–9, F1–F12, Enter, etc.).")]
    UnsupportedKey(String),

    /// No modifiers left after trimming
    #[error("Add at least one modifier (Ctrl, Shift, Alt, or Cmd) to avoid conflicts with normal typing.")]
    MissingModifier,

    /// First modifier not on the allow-list
    #[error("“{0}” is not a valid modifier. Use Ctrl, Shift, Alt, or Cmd (Meta).")]
    InvalidModifier(String),

    /// Combo is reserved by the operating system
    #[error("This shortcut is reserved by your operating system and can’t be used.")]
    Reserved(ShortcutCombo),
}

/// Validates a proposed shortcut
///
/// Returns the normalised combo when the shortcut may be assigned.
///
/// # Example
/// ```
/// use shortcut_guard::core::{validate_shortcut, ShortcutError};
///
/// let combo = validate_shortcut(&["Ctrl"], "K")?;
/// assert_eq!(combo.to_string(), "Ctrl+K");
///
/// assert!(matches!(
///     validate_shortcut(&["Shift", "Ctrl"], "Escape"),
///     Err(ShortcutError::Reserved(_))
/// ));
/// # Ok::<(), ShortcutError>(())
/// ```
pub fn validate_shortcut<S: AsRef<str>>(
    modifiers: &[S],
    key: &str,
) -> Result<ShortcutCombo, ShortcutError> {
    let result = check(modifiers, key);

    if let Err(e) = &result {
        let names: Vec<&str> = modifiers.iter().map(AsRef::as_ref).collect();
        debug!("Rejected shortcut {:?} + {:?}: {:?}", names, key, e);
    }

    result
}

/// Validates a proposed shortcut, returning the rejection message if any
///
/// `None` means the shortcut is valid.
pub fn validate<S: AsRef<str>>(modifiers: &[S], key: &str) -> Option<String> {
    validate_shortcut(modifiers, key)
        .err()
        .map(|e| e.to_string())
}

fn check<S: AsRef<str>>(modifiers: &[S], key: &str) -> Result<ShortcutCombo, ShortcutError> {
    let names: Vec<&str> = modifiers
        .iter()
        .map(|m| m.as_ref().trim())
        .filter(|m| !m.is_empty())
        .collect();
    let key = key.trim();

    if key.is_empty() {
        return Err(ShortcutError::MissingKey);
    }

    let key: Key = key.parse()?;

    if names.is_empty() {
        return Err(ShortcutError::MissingModifier);
    }

    let modifiers = names
        .into_iter()
        .map(str::parse)
        .collect::<Result<Vec<Modifier>, _>>()?;

    let combo = ShortcutCombo::new(modifiers, key);

    if find_reserved(&combo).is_some() {
        return Err(ShortcutError::Reserved(combo));
    }

    Ok(combo)
}
