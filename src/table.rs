use crate::api::models::Record;
use std::io::{self, Write};

/// Writes `records` as a plain two-column (name, content) table framed by
/// dashed rules, one row per record.
pub fn write_records<W: Write>(out: &mut W, records: &[&Record]) -> io::Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let name_width = records.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    let content_width = records
        .iter()
        .map(|r| r.content.chars().count())
        .max()
        .unwrap_or(0);
    let rule = format!("{}  {}", "-".repeat(name_width), "-".repeat(content_width));

    writeln!(out, "{}", rule)?;
    for record in records {
        writeln!(
            out,
            "{:<width$}  {}",
            record.name,
            record.content,
            width = name_width
        )?;
    }
    writeln!(out, "{}", rule)
}
