// Rust guideline compliant 2026-10-15

//! Implementation of the `jiraport convert` command.
//!
//! Decodes a Jira XML export, converts it, and writes the Shortcut import
//! payload as JSON.

use crate::commands::{load_config, load_users};
use crate::output::{format_summary, to_json, write_line};
use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use jiraport_core::{convert, decode_file, ConversionContext, ConversionSummary};
use std::path::Path;

/// Converts a Jira export into Shortcut import JSON.
///
/// # Arguments
///
/// * `export` - Path to the Jira XML export
/// * `config_path` - Optional config file (defaults to `jiraport.toml`)
/// * `user_map` - Optional JSON user map replacing the config's users
/// * `output` - Optional output file (defaults to stdout)
/// * `compact` - Write single-line JSON
///
/// # Returns
///
/// Ok if the payload was written, Err otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - The config or user map cannot be loaded
/// - The fallback user is not mapped
/// - The export cannot be read or decoded
/// - A sub-task's parent story is missing from the export
/// - The output cannot be written
pub fn execute(
    export: &Path,
    config_path: Option<&Path>,
    user_map: Option<&Path>,
    output: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let users = load_users(&config, user_map)?;
    let now: DateTime<FixedOffset> = Utc::now().into();
    let ctx = ConversionContext::with_users(&config, users, now)?;

    let items = decode_file(export)
        .with_context(|| format!("Failed to decode export {}", export.display()))?;
    let data = convert(&items, &ctx)?;
    let json = to_json(&data, compact)?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote import payload");
        }
        None => write_line(std::io::stdout().lock(), &json)?,
    }

    let summary = ConversionSummary::of(&data);
    write_line(std::io::stderr().lock(), &format_summary(&summary))?;

    Ok(())
}
