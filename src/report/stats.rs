//! Statistics over a set of attendance records.
//!
//! Counts are taken over whatever was fetched: with `--records-limit` set this
//! is the limited subset, not the server's full history.

use crate::console_format::{format_percentage, section_title};
use crate::models::AttendanceRecord;
use std::collections::BTreeSet;

/// Present/absent/other breakdown of a record set
#[derive(Debug, Clone, PartialEq)]
pub struct RecordsSummary {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub other: usize,
    /// `present / total * 100`, or 0 for an empty set
    pub percentage: f64,
    /// Distinct course display names
    pub distinct_courses: usize,
}

/// Calculate summary statistics for a record set.
pub fn summarize_records(records: &[AttendanceRecord]) -> RecordsSummary {
    let total = records.len();
    let present = records.iter().filter(|r| r.is_present()).count();
    let absent = records.iter().filter(|r| r.is_absent()).count();
    let courses: BTreeSet<&str> = records.iter().map(|r| r.course_name.as_str()).collect();

    RecordsSummary {
        total,
        present,
        absent,
        other: total - present - absent,
        percentage: share(present, total),
        distinct_courses: courses.len(),
    }
}

fn share(part: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { part as f64 / total as f64 * 100.0 }
}

/// Render the statistics block.
pub fn format_statistics(summary: &RecordsSummary) -> String {
    let count_with_share = |count: usize| {
        if summary.total > 0 {
            format!("{} ({})", count, format_percentage(share(count, summary.total)))
        } else {
            count.to_string()
        }
    };

    let mut output = section_title("Records Statistics");
    output.push_str(&format!("Total Records      : {}\n", summary.total));
    output.push_str(&format!("Present            : {}\n", count_with_share(summary.present)));
    output.push_str(&format!("Absent             : {}\n", count_with_share(summary.absent)));
    output.push_str(&format!("Other Status       : {}\n", summary.other));
    output.push_str(&format!("Overall Attendance : {}\n", format_percentage(summary.percentage)));
    output.push_str(&format!("Total Courses      : {}\n", summary.distinct_courses));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(course: &str, status: &str) -> AttendanceRecord {
        AttendanceRecord::from_payload(&json!({"courseName": course, "status": status}))
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize_records(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.percentage, 0.0);
        assert_eq!(summary.distinct_courses, 0);
        assert!(format_statistics(&summary).contains("Overall Attendance : 0.0%\n"));
        assert!(format_statistics(&summary).contains("Present            : 0\n"));
    }

    #[test]
    fn test_summary_counts() {
        let records = vec![
            record("Maths", "PRESENT"),
            record("Maths", "present"),
            record("Physics", "ABSENT"),
            record("Physics", "LATE"),
        ];
        let summary = summarize_records(&records);
        assert_eq!(
            summary,
            RecordsSummary { total: 4, present: 2, absent: 1, other: 1, percentage: 50.0, distinct_courses: 2 }
        );
    }

    #[test]
    fn test_format_statistics() {
        let records = vec![record("Maths", "PRESENT"), record("Maths", "PRESENT"), record("Art", "ABSENT"), record("Art", "PRESENT")];
        let text = format_statistics(&summarize_records(&records));
        assert_eq!(
            text,
            "\n=== Records Statistics ===\n\
             Total Records      : 4\n\
             Present            : 3 (75.0%)\n\
             Absent             : 1 (25.0%)\n\
             Other Status       : 0\n\
             Overall Attendance : 75.0%\n\
             Total Courses      : 2\n"
        );
    }
}
