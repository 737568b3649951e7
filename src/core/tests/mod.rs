//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Conflict detection tests
//! - Parser tests
//! - Validation tests
//! - Type tests (Modifier, Key, ShortcutCombo)

#[cfg(test)]
mod types_tests;
