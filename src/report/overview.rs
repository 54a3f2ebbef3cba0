//! Overview block at the top of the report.

use crate::console_format::{format_percentage, section_title};
use crate::models::{CoursePerformance, OverallStats};
use std::collections::BTreeSet;

/// Number of distinct courses across all performance records.
pub fn count_active_courses(courses: &[CoursePerformance]) -> usize {
    courses.iter().map(CoursePerformance::identity).collect::<BTreeSet<_>>().len()
}

/// Render the overview block.
pub fn format_overview(overall: &OverallStats, courses: &[CoursePerformance]) -> String {
    let mut output = section_title("Overview");
    output.push_str(&format!("Overall Attendance : {}\n", format_percentage(overall.percentage)));
    output.push_str(&format!("Classes Attended   : {}\n", overall.attended));
    output.push_str(&format!("Total Classes      : {}\n", overall.total));
    output.push_str(&format!("Active Courses     : {}\n", count_active_courses(courses)));
    output
}
