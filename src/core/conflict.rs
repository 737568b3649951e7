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

//! Duplicate shortcut detection
//!
//! When several actions are assigned the same combo, only one of them can
//! fire. The detector indexes validated combos in a HashMap so that
//! lookups stay O(1) and listing all conflicts is O(n) in the number of
//! distinct combos.

use serde::Serialize;
use std::collections::HashMap;

use crate::core::types::ShortcutCombo;

/// Detects actions sharing a shortcut.
///
/// A conflict exists when any combo maps to two or more actions.
pub struct ConflictDetector {
    /// Maps each combo to every action using it, in insertion order.
    assignments: HashMap<ShortcutCombo, Vec<String>>,
}

/// A combo claimed by more than one action.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Conflict {
    /// The shared combination
    pub combo: ShortcutCombo,

    /// All actions using this combo (always 2 or more)
    pub actions: Vec<String>,
}

impl ConflictDetector {
    /// Creates a new empty conflict detector.
    pub fn new() -> Self {
        Self {
            assignments: HashMap::new(),
        }
    }

    /// Records that `action` uses `combo`.
    pub fn add(&mut self, combo: ShortcutCombo, action: impl Into<String>) {
        self.assignments
            .entry(combo)
            .or_default()
            .push(action.into());
    }

    /// Finds all conflicts, ordered by combo text for stable output.
    pub fn find_conflicts(&self) -> Vec<Conflict> {
        let mut conflicts: Vec<Conflict> = self
            .assignments
            .iter()
            .filter(|(_, actions)| actions.len() > 1)
            .map(|(combo, actions)| Conflict {
                combo: combo.clone(),
                actions: actions.clone(),
            })
            .collect();

        conflicts.sort_by_key(|c| c.combo.to_string());
        conflicts
    }

    /// Returns true if this combo has 2 or more actions.
    pub fn has_conflict(&self, combo: &ShortcutCombo) -> bool {
        self.assignments
            .get(combo)
            .map(|actions| actions.len() > 1)
            .unwrap_or(false)
    }

    /// Returns the total number of assignments tracked.
    pub fn total_assignments(&self) -> usize {
        self.assignments.values().map(Vec::len).sum()
    }
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new()
    }
}
