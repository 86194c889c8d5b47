//! Shared helpers for CLI commands.
//!
//! Project root resolution (walking up for `marquee.toml`) and duration
//! parsing for the `--time` flag.

use std::path::{Path, PathBuf};

use crate::GlobalArgs;

/// Walks up from `start` looking for the nearest directory containing
/// `marquee.toml`.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join("marquee.toml").exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find marquee.toml in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Resolves the project root directory from global CLI args.
///
/// If `--config` is specified, uses that path (file → parent dir, dir →
/// itself). Otherwise walks up from the current directory looking for
/// `marquee.toml`.
pub fn resolve_project_root(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        if p.is_file() {
            Ok(p.parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")))
        } else {
            Ok(p)
        }
    } else {
        find_project_root(&std::env::current_dir()?)
    }
}

/// Parses a human-readable duration string into seconds.
///
/// Supports units: `us`, `ms`, `s`.
/// Examples: `"2s"`, `"500ms"`, `"250us"`.
pub fn parse_duration(s: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".into());
    }

    // Find where the numeric part ends and the unit begins
    let digit_end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());

    if digit_end == 0 {
        return Err(format!("invalid duration: no numeric value in '{s}'").into());
    }

    let number: f64 = s[..digit_end]
        .parse()
        .map_err(|_| format!("invalid number in duration '{s}'"))?;

    let unit = s[digit_end..].trim();

    let multiplier = match unit {
        "us" => 1e-6,
        "ms" => 1e-3,
        "s" => 1.0,
        "" => return Err(format!("missing unit in duration '{s}' (use us, ms, or s)").into()),
        _ => return Err(format!("unknown duration unit '{unit}' (use us, ms, or s)").into()),
    };

    Ok(number * multiplier)
}
