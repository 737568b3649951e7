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

//! Shortcuts reserved by common operating systems
//!
//! A combo is reserved only when its modifier set and key match an entry
//! exactly. Ctrl+Shift+Q is therefore allowed even though Ctrl+Q is not.

use crate::core::types::{Key, Modifier, ShortcutCombo};

/// A modifier+key pairing the operating system keeps for itself
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReservedShortcut {
    /// Modifiers, in any order
    pub modifiers: &'static [Modifier],
    /// Primary key
    pub key: Key,
    /// What the operating system does with it
    pub description: &'static str,
}

impl ReservedShortcut {
    /// Normalised combo for comparison and display
    pub fn combo(&self) -> ShortcutCombo {
        ShortcutCombo::new(self.modifiers.to_vec(), self.key)
    }
}

const RESERVED_SHORTCUTS: &[ReservedShortcut] = &[
    ReservedShortcut {
        modifiers: &[Modifier::Alt],
        key: Key::Function(4),
        description: "Close window (Windows, Linux)",
    },
    ReservedShortcut {
        modifiers: &[Modifier::Ctrl],
        key: Key::Character('Q'),
        description: "Quit application",
    },
    ReservedShortcut {
        modifiers: &[Modifier::Ctrl, Modifier::Alt],
        key: Key::Delete,
        description: "Security options (Windows), log out (Linux)",
    },
    ReservedShortcut {
        modifiers: &[Modifier::Ctrl, Modifier::Shift],
        key: Key::Escape,
        description: "Task Manager (Windows)",
    },
    ReservedShortcut {
        modifiers: &[Modifier::Meta],
        key: Key::Character('Q'),
        description: "Quit application (macOS)",
    },
    ReservedShortcut {
        modifiers: &[Modifier::Meta, Modifier::Shift],
        key: Key::Character('Q'),
        description: "Log out (macOS)",
    },
];

/// Returns the full reserved table
pub fn reserved_shortcuts() -> &'static [ReservedShortcut] {
    RESERVED_SHORTCUTS
}

/// Looks up a combo in the reserved table
///
/// `combo` must already be normalised (it is when built through
/// `ShortcutCombo::new`).
pub fn find_reserved(combo: &ShortcutCombo) -> Option<&'static ReservedShortcut> {
    RESERVED_SHORTCUTS
        .iter()
        .find(|reserved| reserved.key == combo.key && reserved.combo() == *combo)
}
