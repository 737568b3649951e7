//! CLI entry point for shortcut-guard
//!
//! Provides command-line interface for validating single shortcuts,
//! checking shortcuts files and listing the allow-list and reserved combos.

use clap::{Parser, Subcommand};
use colored::*;
use log::{debug, LevelFilter};
use serde::Serialize;
use std::path::PathBuf;

use shortcut_guard::config::{check_assignments, load_shortcuts, CheckReport, DEFAULT_SHORTCUTS_PATH};
use shortcut_guard::core::{parse_shortcut, reserved_shortcuts, validate_shortcut, Key, Modifier, ShortcutCombo};

#[derive(Parser)]
#[command(name = "shortcut-guard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Emit JSON instead of coloured text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single shortcut
    Validate {
        /// Shortcut text, e.g. "Ctrl+Shift+K"
        #[arg(conflicts_with_all = ["modifier", "key"])]
        shortcut: Option<String>,

        /// Modifier name (repeatable)
        #[arg(short, long)]
        modifier: Vec<String>,

        /// Key name
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Check every assignment in a shortcuts file
    Check {
        /// Path to shortcuts file
        #[arg(short, long, default_value = DEFAULT_SHORTCUTS_PATH)]
        file: PathBuf,
    },

    /// List shortcuts reserved by the operating system
    Reserved,

    /// List allowed keys and modifiers
    Keys,
}

#[derive(Serialize)]
struct ValidationOutput {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    combo: Option<ShortcutCombo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct ReservedOutput {
    combo: ShortcutCombo,
    description: &'static str,
}

#[derive(Serialize)]
struct KeysOutput {
    modifiers: Vec<Modifier>,
    keys: Vec<Key>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    debug!("shortcut-guard v{}", env!("CARGO_PKG_VERSION"));

    let ok = match cli.command {
        Commands::Validate { shortcut, modifier, key } => {
            let (modifiers, key) = match shortcut {
                Some(text) => parse_shortcut(&text),
                None => (modifier, key.unwrap_or_default()),
            };
            validate_one(&modifiers, &key, cli.json)?
        }
        Commands::Check { file } => check_file(&file, cli.json)?,
        Commands::Reserved => {
            list_reserved(cli.json)?;
            true
        }
        Commands::Keys => {
            list_keys(cli.json)?;
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}

/// Validate one shortcut and print the outcome
fn validate_one(modifiers: &[String], key: &str, json: bool) -> anyhow::Result<bool> {
    let result = validate_shortcut(modifiers, key);

    if json {
        let output = match &result {
            Ok(combo) => ValidationOutput { valid: true, combo: Some(combo.clone()), error: None },
            Err(e) => ValidationOutput { valid: false, combo: None, error: Some(e.to_string()) },
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match &result {
            Ok(combo) => println!("{} {} is available", "✓".green().bold(), combo.to_string().cyan().bold()),
            Err(e) => println!("{} {}", "✗".red().bold(), e),
        }
    }

    Ok(result.is_ok())
}

/// Check a shortcuts file for rejected assignments and conflicts
fn check_file(path: &PathBuf, json: bool) -> anyhow::Result<bool> {
    let assignments = load_shortcuts(path)?;
    let report = check_assignments(&assignments);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(path, &report);
    }

    Ok(report.is_clean())
}

fn print_report(path: &PathBuf, report: &CheckReport) {
    println!("{} Checked {} shortcuts in {}\n", "→".cyan(), report.total, path.display());

    if report.is_clean() {
        println!("{} {}", "✓".green().bold(), "All shortcuts are valid and unique!".bold());
        return;
    }

    if !report.rejections.is_empty() {
        println!(
            "{} {} rejected shortcut{}:\n",
            "✗".red().bold(),
            report.rejections.len(),
            if report.rejections.len() == 1 { "" } else { "s" }
        );

        for rejection in &report.rejections {
            println!("  {} {} = {}",
                 format!("line {}:", rejection.line).dimmed(),
                 rejection.action.magenta(),
                 rejection.shortcut.cyan(),
            );
            println!("    {}", rejection.message);
        }
        println!();
    }

    if !report.conflicts.is_empty() {
        println!(
            "{} Found {} conflict{}:\n",
            "✗".red().bold(),
            report.conflicts.len(),
            if report.conflicts.len() == 1 { "" } else { "s" }
        );

        for (i, conflict) in report.conflicts.iter().enumerate() {
            println!("{} {}",
                 format!("Conflict {}", i + 1).yellow().bold(),
                 conflict.combo.to_string().cyan()
            );

            for (idx, action) in conflict.actions.iter().enumerate() {
                println!("  {} {}", format!("{}.", idx + 1).dimmed(), action.magenta());
            }
            println!();
        }

        println!("{}", "⚠ Only one action per shortcut will fire!".yellow());
    }
}

/// List the reserved combos
fn list_reserved(json: bool) -> anyhow::Result<()> {
    if json {
        let output: Vec<ReservedOutput> = reserved_shortcuts()
            .iter()
            .map(|r| ReservedOutput { combo: r.combo(), description: r.description })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Reserved by the operating system:\n".bold());
    for reserved in reserved_shortcuts() {
        println!("  {:<24} {}", reserved.combo().to_string().cyan(), reserved.description);
    }

    Ok(())
}

/// List allowed modifiers and keys
fn list_keys(json: bool) -> anyhow::Result<()> {
    let output = KeysOutput { modifiers: Modifier::ALL.to_vec(), keys: Key::all() };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let join = |names: Vec<String>| names.join(", ");

    println!("{} {}", "Modifiers:".bold(), join(output.modifiers.iter().map(|m| m.to_string()).collect()));
    println!("{} {}", "Keys:".bold(), join(output.keys.iter().map(|k| k.to_string()).collect()));

    Ok(())
}
