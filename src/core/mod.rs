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

//! src/core/mod.rs
//!
//! Core validation logic
//!
//! This module contains the fundamental data structures and algorithms
//! for shortcut validation, including:
//! - Type definitions for modifiers, keys and shortcut combos
//! - The table of OS-reserved combos
//! - Whitelist validation with prioritised rejection reasons
//! - Text parsing for shortcut strings and shortcut files
//! - Duplicate detection using HashMap-based O(1) lookup
//!
//! Nothing here performs I/O, so every rule is unit-testable in isolation.

pub mod conflict;
pub mod parser;
pub mod reserved;
pub mod types;
pub mod validator;

pub use conflict::{Conflict, ConflictDetector};
pub use parser::{parse_shortcut, Assignment, ParseError};
pub use reserved::{find_reserved, reserved_shortcuts, ReservedShortcut};
pub use types::*;
pub use validator::{validate, validate_shortcut, ShortcutError};

#[cfg(test)]
mod tests;
