//! Report generation - turns normalized attendance data into text.
//!
//! This module handles:
//! - The overview block and per-category course performance
//! - The attendance history table and the dashboard's recent activity list
//! - Whole-history statistics
//! - JSON export of the raw records
//!
//! Every `format_*` function is pure and deterministic: the same input always
//! renders the same bytes. Low-level layout lives in `console_format`.
//!
//! # Module Organization
//!
//! - `overview` - Overall percentage, counts, active courses
//! - `performance` - RTU / Lab sections, sorting and truncation
//! - `history` - History table and recent activity
//! - `stats` - Present/absent/other summary
//! - `export` - JSON document for `--export`

mod export;
mod history;
mod overview;
mod performance;
mod stats;

pub use export::export_json_report;
pub use history::{format_history, format_recent_activity};
pub use overview::format_overview;
pub use performance::{format_performance_section, select_class_type};
pub use stats::{format_statistics, summarize_records};
