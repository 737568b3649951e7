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

//! Shortcut Guard
//!
//! Validates user-defined keyboard shortcuts before they are assigned.
//!
//! # Features
//!
//! - **Allow-list validation:** Only standard keys and the four modifiers
//! - **Reserved combos:** Rejects shortcuts the operating system keeps for itself
//! - **User-facing messages:** Every rejection carries a ready-to-show message
//! - **Conflict detection:** Finds actions sharing a shortcut in a shortcuts file
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, reserved table, validation, parsing, conflicts)
//! - **`config`:** Shortcuts file loading and whole-file checks
//!
//! # Examples
//!
//! ## Validating a single shortcut
//!
//! ```
//! use shortcut_guard::validate;
//!
//! assert_eq!(validate(&["Ctrl"], "K"), None);
//! assert_eq!(
//!     validate(&["Ctrl"], "Q").as_deref(),
//!     Some("This shortcut is reserved by your operating system and can’t be used.")
//! );
//! ```
//!
//! ## Parsing shortcut text
//!
//! ```
//! use shortcut_guard::core::{parse_shortcut, validate_shortcut};
//!
//! let (modifiers, key) = parse_shortcut("Shift+Ctrl+Escape");
//! assert!(validate_shortcut(&modifiers, &key).is_err());
//! ```

pub mod config;
pub mod core;

// Re-export commonly used types for convenience
pub use core::{validate, validate_shortcut, Key, Modifier, ShortcutCombo, ShortcutError};
