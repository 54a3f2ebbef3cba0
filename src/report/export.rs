//! JSON export of the fetched records.
//!
//! The document keeps the raw API payloads untouched so it can be fed to other
//! tools; only the summary block is derived.

use super::stats::RecordsSummary;
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct ExportSummary {
    pub recent_count: usize,
    pub all_records_count: usize,
    pub present: usize,
    pub absent: usize,
}

#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub timestamp: String,
    pub recent_records: &'a [Value],
    pub all_records: &'a [Value],
    pub summary: ExportSummary,
}

/// Assemble the export document.
pub fn build_export_document<'a>(
    recent: &'a [Value],
    all: &'a [Value],
    summary: &RecordsSummary,
    generated_at: DateTime<Local>,
) -> ExportDocument<'a> {
    ExportDocument {
        timestamp: generated_at.to_rfc3339(),
        recent_records: recent,
        all_records: all,
        summary: ExportSummary {
            recent_count: recent.len(),
            all_records_count: all.len(),
            present: summary.present,
            absent: summary.absent,
        },
    }
}

/// Write the export document as pretty JSON.
///
/// # Arguments
/// * `output_path` - File to create or overwrite
/// * `recent` - Raw recent activity items (may be empty)
/// * `all` - Raw history records, in fetch order
/// * `summary` - Statistics over `all`
pub fn export_json_report(
    output_path: &Path,
    recent: &[Value],
    all: &[Value],
    summary: &RecordsSummary,
) -> std::io::Result<()> {
    let document = build_export_document(recent, all, summary, Local::now());
    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(file, &document)?;
    Ok(())
}
