//! Per-category course performance (RTU classes, labs).

use crate::console_format::{PROGRESS_BAR_WIDTH, format_percentage, progress_bar, section_title};
use crate::models::CoursePerformance;

/// Courses whose class type matches `tag`, case-insensitively, in input order.
pub fn select_class_type<'a>(courses: &'a [CoursePerformance], tag: &str) -> Vec<&'a CoursePerformance> {
    courses.iter().filter(|c| c.is_class_type(tag)).collect()
}

/// Sort by percentage, then attended classes, both descending.
///
/// The sort is stable, so equal courses keep their relative order and sorting
/// an already-sorted list changes nothing.
pub fn sort_courses(courses: &mut [&CoursePerformance]) {
    courses.sort_by(|a, b| b.percentage.total_cmp(&a.percentage).then_with(|| b.attended.cmp(&a.attended)));
}

/// Render one performance section.
///
/// # Arguments
/// * `title` - Section heading, e.g. "RTU Performance"
/// * `courses` - Courses of this category, any order
/// * `max_items` - How many courses to show (at least one is always shown)
pub fn format_performance_section(title: &str, courses: &[&CoursePerformance], max_items: usize) -> String {
    let mut output = section_title(title);
    if courses.is_empty() {
        output.push_str("No data available.\n");
        return output;
    }

    let mut sorted = courses.to_vec();
    sort_courses(&mut sorted);
    let visible = max_items.max(1).min(sorted.len());

    for course in &sorted[..visible] {
        output.push_str(&format!("- {}\n", course.name));
        output.push_str(&format!(
            "  Percentage : {} {}\n",
            format_percentage(course.percentage),
            progress_bar(course.percentage, PROGRESS_BAR_WIDTH)
        ));
        output.push_str(&format!("  Attendance : {}\n", course.ratio()));
    }

    let hidden = sorted.len() - visible;
    if hidden > 0 {
        output.push_str(&format!("Showing top {} of {} courses ({} more hidden).\n", visible, sorted.len(), hidden));
    }
    output
}
