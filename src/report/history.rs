//! Attendance history table and the dashboard's recent activity list.

use crate::console_format::{format_row, format_rule, section_title};
use crate::models::{AttendanceRecord, DisplayZone};

const HISTORY_HEADERS: [&str; 5] = ["Date", "Time", "Status", "Course", "Teacher"];
const HISTORY_WIDTHS: [usize; 5] = [14, 9, 12, 40, 25];

const RECENT_HEADERS: [&str; 6] = ["#", "Date", "Course", "Status", "Semester", "Section"];
const RECENT_WIDTHS: [usize; 6] = [3, 14, 40, 12, 10, 15];

/// Newest `markedAt` first; records without one go last, input order kept on ties.
pub fn sort_by_marked_at(records: &mut [&AttendanceRecord]) {
    records.sort_by(|a, b| b.marked_at.cmp(&a.marked_at));
}

/// Render the full history table.
///
/// # Arguments
/// * `records` - Records in any order
/// * `total_available` - Server-reported total
/// * `limit` - Caller's record limit (0 = none)
/// * `zone` - Zone used for the date and time columns
pub fn format_history(records: &[AttendanceRecord], total_available: u64, limit: usize, zone: DisplayZone) -> String {
    let mut output = section_title("Attendance History");
    if records.is_empty() {
        output.push_str("No attendance records found.\n");
        return output;
    }

    let mut sorted: Vec<&AttendanceRecord> = records.iter().collect();
    sort_by_marked_at(&mut sorted);

    output.push_str(&format_row(&HISTORY_HEADERS, &HISTORY_WIDTHS));
    output.push('\n');
    output.push_str(&format_rule(&HISTORY_WIDTHS));
    output.push('\n');

    for record in sorted {
        let course_label = format!("{} ({})", record.course_name, record.course_code);
        let cells = [
            record.display_date(zone),
            record.display_time(zone),
            record.status_badge(),
            course_label,
            record.teacher.clone(),
        ];
        let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
        output.push_str(&format_row(&cells, &HISTORY_WIDTHS));
        output.push('\n');
        output.push_str(&format!("      Section: {} | Semester: {}\n", record.section, record.semester));
    }

    if limit > 0 && total_available > limit as u64 {
        output.push_str(&format!(
            "Showing {} of {} records. Adjust --records-limit to view more.\n",
            records.len(),
            total_available
        ));
    } else {
        output.push_str(&format!("Total records displayed: {} (of {}).\n", records.len(), total_available));
    }
    output
}

/// Render the dashboard's recent activity list, in server order.
pub fn format_recent_activity(records: &[AttendanceRecord], zone: DisplayZone) -> String {
    let mut output = section_title("Recent Activity");
    if records.is_empty() {
        output.push_str("No recent records found.\n");
        return output;
    }

    output.push_str(&format_row(&RECENT_HEADERS, &RECENT_WIDTHS));
    output.push('\n');
    output.push_str(&format_rule(&RECENT_WIDTHS));
    output.push('\n');

    for (idx, record) in records.iter().enumerate() {
        let cells = [
            (idx + 1).to_string(),
            record.display_date(zone),
            record.course_name.clone(),
            record.status_badge(),
            record.semester.clone(),
            record.section.clone(),
        ];
        let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
        output.push_str(&format_row(&cells, &RECENT_WIDTHS));
        output.push('\n');
    }
    output
}
