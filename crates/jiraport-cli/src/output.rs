// Rust guideline compliant 2026-10-15

//! Output formatting for the jiraport CLI.
//!
//! Conversion results go out as JSON; the human-facing reports are tables.

use anyhow::Result;
use jiraport_core::{ConversionSummary, ImportData};
use std::io::Write;
use tabled::{builder::Builder, settings::Style};

/// Serializes the import graph as JSON.
///
/// # Arguments
/// * `data` - The converted graph
/// * `compact` - Emit single-line JSON instead of pretty-printed
///
/// # Returns
/// The JSON document
pub fn to_json(data: &ImportData, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    Ok(json)
}

/// Writes text to a writer followed by a newline.
pub fn write_line<W: Write>(mut writer: W, text: &str) -> Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Renders a two-column table from header and rows.
pub fn two_column_table(header: [&str; 2], rows: Vec<[String; 2]>) -> String {
    let mut builder = Builder::default();
    builder.push_record(header.map(str::to_string));
    for row in rows {
        builder.push_record(row);
    }
    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

/// Formats conversion counts as a table.
pub fn format_summary(summary: &ConversionSummary) -> String {
    two_column_table(
        ["Record", "Count"],
        vec![
            ["Epics".to_string(), summary.epics.to_string()],
            ["Stories".to_string(), summary.stories.to_string()],
            ["Tasks".to_string(), summary.tasks.to_string()],
            ["Comments".to_string(), summary.comments.to_string()],
            ["Unowned stories".to_string(), summary.unowned_stories.to_string()],
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_table_contains_counts() {
        let summary = ConversionSummary {
            epics: 2,
            stories: 7,
            tasks: 3,
            comments: 11,
            unowned_stories: 1,
        };
        let table = format_summary(&summary);
        assert!(table.contains("Epics"));
        assert!(table.contains("Stories"));
        assert!(table.contains("11"));
    }

    #[test]
    fn test_json_compact_and_pretty() {
        let data = ImportData::default();
        assert_eq!(to_json(&data, true).unwrap(), r#"{"epics":[],"stories":[]}"#);
        assert!(to_json(&data, false).unwrap().contains('\n'));
    }
}
