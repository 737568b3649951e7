// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::config::{expand_path, load_shortcuts, ConfigError};
use crate::core::parser::ParseError;

/// Helper: Creates a temporary shortcuts file for testing.
fn create_shortcuts_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shortcuts.conf");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

#[test]
fn test_load_valid_file() {
    let (_temp_dir, path) = create_shortcuts_file(
        "# Editor\nopen_palette = Ctrl+Shift+P\n\nquit = Ctrl+Q\n",
    );

    let assignments = load_shortcuts(&path).unwrap();
    assert_eq!(assignments.len(), 2);
    assert_eq!(assignments[0].action, "open_palette");
    assert_eq!(assignments[0].line, 2);
    assert_eq!(assignments[1].line, 4);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nonexistent.conf");

    match load_shortcuts(&path) {
        Err(ConfigError::NotFound(p)) => assert_eq!(p, path),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

#[test]
fn test_load_reports_syntax_error() {
    let (_temp_dir, path) = create_shortcuts_file("ok = Ctrl+K\nthis line is wrong\n");

    match load_shortcuts(&path) {
        Err(ConfigError::Parse(ParseError::InvalidSyntax { line, .. })) => assert_eq!(line, 2),
        other => panic!("Expected Parse error, got: {:?}", other),
    }
}

#[test]
fn test_expand_path_leaves_absolute_paths() {
    let expanded = expand_path("/tmp/shortcuts.conf").unwrap();
    assert_eq!(expanded, PathBuf::from("/tmp/shortcuts.conf"));
}

#[test]
fn test_expand_path_expands_tilde() {
    let expanded = expand_path("~/shortcuts.conf").unwrap();
    assert!(!expanded.to_string_lossy().starts_with('~'));
    assert!(expanded.ends_with("shortcuts.conf"));
}
