/// Tests for console formatting helpers
///
/// These pin the exact text layout so report output stays stable.

#[cfg(test)]
mod tests {
    use crate::console_format::*;

    #[test]
    fn test_display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_display_width_badges() {
        assert_eq!(display_width("✅ Present"), 10);
        assert_eq!(display_width("█"), 1);
    }

    #[test]
    fn test_truncate_with_padding_exact_fit() {
        assert_eq!(truncate_with_padding("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_with_padding_needs_padding() {
        assert_eq!(truncate_with_padding("hi", 5), "hi   ");
    }

    #[test]
    fn test_truncate_with_padding_needs_truncation() {
        let result = truncate_with_padding("Object Oriented Programming (CS2003)", 20);
        assert_eq!(result, "Object Oriented P...");
        assert_eq!(display_width(&result), 20);
    }

    #[test]
    fn test_truncate_with_padding_wide_chars() {
        let result = truncate_with_padding("✅✅✅✅✅✅", 7);
        assert_eq!(display_width(&result), 7);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_format_row_trims_last_column() {
        let row = format_row(&["a", "bb", "c"], &[3, 4, 5]);
        assert_eq!(row, "a   bb   c");
    }

    #[test]
    fn test_format_rule() {
        assert_eq!(format_rule(&[3, 4]), "--------");
        assert_eq!(format_rule(&[]), "");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(87.46), "87.5%");
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(112.0), "112.0%");
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0, 4), "[░░░░]");
        assert_eq!(progress_bar(100.0, 4), "[████]");
        assert_eq!(progress_bar(150.0, 4), "[████]");
        assert_eq!(progress_bar(-20.0, 4), "[░░░░]");
        assert_eq!(progress_bar(f64::NAN, 4), "[░░░░]");
    }

    #[test]
    fn test_progress_bar_rounding() {
        // 50% of 25 cells = 12.5, rounds away from zero
        let bar = progress_bar(50.0, PROGRESS_BAR_WIDTH);
        assert_eq!(bar.matches('█').count(), 13);
        assert_eq!(bar.matches('░').count(), 12);
        assert_eq!(display_width(&bar), PROGRESS_BAR_WIDTH + 2);
    }

    #[test]
    fn test_section_title() {
        assert_eq!(section_title("Overview"), "\n=== Overview ===\n");
    }
}
