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

//! Shortcuts file loading and checking.
//!
//! A shortcuts file assigns one shortcut per action:
//!
//! ```text
//! # Editor
//! open_palette = Ctrl+Shift+P
//! save_all     = Ctrl+Alt+S
//! ```
//!
//! Loading expands a leading `~`, reads and parses the file. Checking runs
//! every assignment through the validator and then looks for actions that
//! share a combo.
//!
//! # Example
//!
//! ```no_run
//! use shortcut_guard::config::{check_assignments, load_shortcuts};
//!
//! let assignments = load_shortcuts("~/.config/shortcut-guard/shortcuts.conf")?;
//! let report = check_assignments(&assignments);
//! println!("{} rejected, {} conflicts", report.rejections.len(), report.conflicts.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;

pub use error::ConfigError;

use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{parser::parse_shortcuts_file, validate_shortcut, Assignment, Conflict, ConflictDetector};

/// Default location of the shortcuts file
pub const DEFAULT_SHORTCUTS_PATH: &str = "~/.config/shortcut-guard/shortcuts.conf";

/// An assignment the validator refused.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rejection {
    /// Line in the shortcuts file
    pub line: usize,
    /// Action name
    pub action: String,
    /// Shortcut text as written
    pub shortcut: String,
    /// User-facing rejection message
    pub message: String,
}

/// Outcome of checking a whole shortcuts file.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CheckReport {
    /// Number of assignments checked
    pub total: usize,
    /// Assignments that failed validation
    pub rejections: Vec<Rejection>,
    /// Valid combos claimed by several actions
    pub conflicts: Vec<Conflict>,
}

impl CheckReport {
    /// True when nothing was rejected and nothing conflicts.
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty() && self.conflicts.is_empty()
    }
}

/// Expands a leading `~` in a user-supplied path.
pub fn expand_path(path: impl AsRef<Path>) -> Result<PathBuf, ConfigError> {
    let path = path.as_ref();
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.display().to_string()))?;

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// Reads and parses a shortcuts file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file doesn't exist and
/// `ConfigError::Parse` if a line is not an `action = shortcut` assignment.
pub fn load_shortcuts(path: impl AsRef<Path>) -> Result<Vec<Assignment>, ConfigError> {
    let path = expand_path(path)?;

    if !path.exists() {
        return Err(ConfigError::NotFound(path));
    }

    let content = fs::read_to_string(&path)?;
    let assignments = parse_shortcuts_file(&content)?;

    info!("Loaded {} shortcut assignments from {}", assignments.len(), path.display());
    Ok(assignments)
}

/// Validates every assignment and detects duplicate combos.
///
/// Only assignments that pass validation take part in conflict detection.
pub fn check_assignments(assignments: &[Assignment]) -> CheckReport {
    let mut detector = ConflictDetector::new();
    let mut rejections = Vec::new();

    for assignment in assignments {
        match validate_shortcut(&assignment.modifiers, &assignment.key) {
            Ok(combo) => detector.add(combo, assignment.action.clone()),
            Err(e) => rejections.push(Rejection {
                line: assignment.line,
                action: assignment.action.clone(),
                shortcut: assignment.shortcut.clone(),
                message: e.to_string(),
            }),
        }
    }

    let conflicts = detector.find_conflicts();
    debug!(
        "Checked {} assignments: {} rejected, {} conflicts",
        assignments.len(),
        rejections.len(),
        conflicts.len()
    );

    CheckReport {
        total: assignments.len(),
        rejections,
        conflicts,
    }
}

#[cfg(test)]
mod tests;
