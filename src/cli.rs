use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://103.159.68.35:3536/api";
pub const DEFAULT_MAX_ITEMS: usize = 5;
pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug, Clone)]
#[command(name = "tnjr-attendance")]
#[command(about = "Display attendance overview, course performance and full history from the student portal API")]
#[command(version)]
pub struct CliArgs {
    /// Student roll number (env: TNJR_ROLL_NUMBER / ROLL_NUMBER)
    #[arg(long, value_name = "ROLL")]
    pub roll: Option<String>,

    /// Student login email (env: TNJR_EMAIL / EMAIL)
    #[arg(long)]
    pub email: Option<String>,

    /// Student password (env: TNJR_PASSWORD / PASSWORD)
    /// If omitted everywhere, you'll be prompted
    #[arg(long)]
    pub password: Option<String>,

    /// Maximum courses to show in each performance section
    #[arg(long, default_value_t = DEFAULT_MAX_ITEMS)]
    pub max_items: usize,

    /// Limit the number of attendance records fetched and printed (0 means all)
    #[arg(long, default_value = "0")]
    pub records_limit: usize,

    /// Records requested per page when fetching history
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Override the API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Shared secret for the X-App-Signature header (env: TNJR_SIGNATURE_KEY)
    #[arg(long, value_name = "KEY")]
    pub signature_key: Option<String>,

    /// Also fetch and print the dashboard's recent activity list
    #[arg(long)]
    pub recent: bool,

    /// Write recent and full records plus a summary to this JSON file
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Render dates and times in UTC instead of the local time zone
    #[arg(long)]
    pub utc: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        let mut args = CliArgs::parse();
        args.base_url = args.base_url.trim().trim_end_matches('/').to_string();
        args
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("--page-size must be at least 1".to_string());
        }

        if self.timeout == 0 {
            return Err("--timeout must be at least 1 second".to_string());
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!("--base-url must be an http(s) URL, got '{}'", self.base_url));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs::parse_from(["tnjr-attendance"])
    }

    #[test]
    fn test_defaults() {
        let args = args();
        assert_eq!(args.max_items, 5);
        assert_eq!(args.records_limit, 0);
        assert_eq!(args.page_size, 100);
        assert_eq!(args.timeout, 30);
        assert_eq!(args.base_url, DEFAULT_BASE_URL);
        assert!(!args.recent);
        assert!(args.export.is_none());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "tnjr-attendance",
            "--roll",
            "24ETCAD024",
            "--max-items",
            "3",
            "--records-limit",
            "20",
            "--export",
            "out.json",
            "--recent",
            "--utc",
        ]);
        assert_eq!(args.roll.as_deref(), Some("24ETCAD024"));
        assert_eq!(args.max_items, 3);
        assert_eq!(args.records_limit, 20);
        assert_eq!(args.export, Some(PathBuf::from("out.json")));
        assert!(args.recent);
        assert!(args.utc);
    }

    #[test]
    fn test_validate_zero_page_size_fails() {
        let mut args = args();
        args.page_size = 0;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_zero_timeout_fails() {
        let mut args = args();
        args.timeout = 0;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_bad_base_url_fails() {
        let mut args = args();
        args.base_url = "ftp://example".to_string();
        assert!(args.validate().is_err());
    }
}
