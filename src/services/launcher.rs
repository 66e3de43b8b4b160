//! Launcher (Alfred Script Filter) output.

use crate::models::display::{DisplayItem, ResultList};
use crate::services::ffprobe;
use crate::{Error, Result};
use colored::Colorize;
use std::io::Write;

/// Render rows as a tab-indented Script Filter document.
pub fn render(items: &[DisplayItem]) -> Result<String> {
    let list = ResultList {
        items: items.to_vec(),
    };

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    serde::Serialize::serialize(&list, &mut serializer)?;

    String::from_utf8(buffer).map_err(|e| Error::other(e.to_string()))
}

/// Write the result list for the launcher.
pub fn output<W: Write>(writer: &mut W, items: &[DisplayItem]) -> Result<()> {
    writeln!(writer, "{}", render(items)?)?;
    Ok(())
}

/// Row reporting a failure through the launcher itself.
pub fn error_item(err: &Error) -> DisplayItem {
    let subtitle = ffprobe::diagnostic(err).unwrap_or_default();
    DisplayItem::informational(err.to_string(), subtitle)
}

/// Write a single error row for the launcher.
pub fn error<W: Write>(writer: &mut W, err: &Error) -> Result<()> {
    output(writer, &[error_item(err)])
}

/// Write rows as colored plain text, for terminal use.
pub fn output_text<W: Write>(writer: &mut W, items: &[DisplayItem]) -> Result<()> {
    for item in items {
        writeln!(writer, "{}", item.title.bold())?;
        if !item.subtitle.is_empty() {
            writeln!(writer, "  {}", item.subtitle.dimmed())?;
        }
    }
    Ok(())
}
