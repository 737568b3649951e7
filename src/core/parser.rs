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

//! src/core/parser.rs
//!
//! Text parsing for shortcuts and shortcut files
//!
//! This module turns text into the raw modifier/key names that
//! `validate_shortcut` consumes. It handles:
//! - Shortcut strings like `Ctrl+Shift+K`
//! - Shortcut files with one `action = Ctrl+Shift+K` assignment per line
//! - Comments and blank lines
//! - Line numbers for error reporting
//!
//! # Architecture
//! The parser uses nom combinators for composable, type-safe parsing.
//! It only splits text. Names are passed through untouched (whitespace
//! included) so that the validator stays the single source of truth for
//! what is accepted.

use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::{char, space0},
    combinator::rest,
    multi::separated_list1,
    IResult, Parser,
};
use serde::Serialize;
use thiserror::Error;

/// Parse errors with line number context
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },
}

/// One `action = shortcut` line from a shortcuts file
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Assignment {
    /// 1-based line number in the source file
    pub line: usize,

    /// Action the shortcut triggers (e.g., "open_palette")
    pub action: String,

    /// Shortcut text as written (e.g., "Ctrl+Shift+P")
    pub shortcut: String,

    /// Raw modifier names split from `shortcut`
    pub modifiers: Vec<String>,

    /// Raw key name split from `shortcut`
    pub key: String,
}

/// Split a shortcut string into modifier names and a key name
///
/// The last `+`-separated segment is the key, all earlier segments are
/// modifiers. Nothing is validated here.
///
/// # Example
/// ```
/// use shortcut_guard::core::parser::parse_shortcut;
///
/// let (modifiers, key) = parse_shortcut("Ctrl+Shift+K");
/// assert_eq!(modifiers, vec!["Ctrl", "Shift"]);
/// assert_eq!(key, "K");
/// ```
pub fn parse_shortcut(input: &str) -> (Vec<String>, String) {
    let mut segments = match split_segments(input) {
        Ok((_, segments)) => segments,
        Err(_) => vec![input],
    };

    let key = segments.pop().unwrap_or_default().to_string();
    let modifiers = segments.into_iter().map(str::to_string).collect();

    (modifiers, key)
}

/// Split on `+`, keeping empty segments
fn split_segments(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char('+'), take_while(|c: char| c != '+')).parse(input)
}

/// Parse a complete shortcuts file
///
/// # Arguments
/// * `content` - The full file content as a string
///
/// # Returns
/// Every assignment in file order, or the first syntax error
///
/// # Example
/// ```ignore
/// let content = std::fs::read_to_string("shortcuts.conf")?;
/// let assignments = parse_shortcuts_file(&content)?;
/// ```
pub fn parse_shortcuts_file(content: &str) -> Result<Vec<Assignment>, ParseError> {
    let mut assignments = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        // Skip empty lines and comments
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        match parse_assignment_line(line_trimmed) {
            Ok((_, (action, shortcut))) => {
                let (modifiers, key) = parse_shortcut(shortcut);
                assignments.push(Assignment {
                    line: line_num,
                    action: action.to_string(),
                    shortcut: shortcut.to_string(),
                    modifiers,
                    key,
                });
            }
            Err(_) => {
                return Err(ParseError::InvalidSyntax {
                    line: line_num,
                    message: format!("expected '<action> = <shortcut>', found '{}'", line_trimmed),
                });
            }
        }
    }

    Ok(assignments)
}

/// Parse a single assignment line
///
/// Format: ACTION = SHORTCUT
/// Example: open_palette = Ctrl+Shift+P
pub fn parse_assignment_line(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, action) =
        take_while1(|c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))(input)?;
    let (input, _) = (space0, char('='), space0).parse(input)?;
    let (input, shortcut) = rest(input)?;

    Ok((input, (action, shortcut.trim_end())))
}
