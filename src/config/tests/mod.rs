//! Config module tests
//!
//! - Shortcuts file loading (tilde expansion, missing files, syntax errors)
//! - Whole-file checking (rejections and conflicts)

#[cfg(test)]
mod loader_tests;
