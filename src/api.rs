/// Typed calls against the student dashboard endpoints
///
/// Login lives in `auth`; the paged history walk lives in `pagination`.
use crate::client::{ApiClient, Transport};
use crate::error::ApiResult;
use crate::models::{CoursePerformance, OverallStats};
use serde_json::Value;

pub const STATS_PATH: &str = "/student/dashboard/attendance/stats";
pub const RECORDS_PATH: &str = "/student/dashboard/attendance/records";
pub const DASHBOARD_STATS_PATH: &str = "/student/dashboard/stats";

/// Normalized attendance stats
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceStats {
    pub overall: OverallStats,
    pub courses: Vec<CoursePerformance>,
}

impl AttendanceStats {
    pub fn from_payload(raw: &Value) -> Self {
        let courses = raw
            .get("byCourse")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(CoursePerformance::from_payload).collect())
            .unwrap_or_default();
        Self { overall: OverallStats::from_payload(raw.get("overall").unwrap_or(&Value::Null)), courses }
    }
}

/// One page of the records listing, still raw
#[derive(Debug, Clone)]
pub struct RecordsPage {
    pub records: Vec<Value>,
    /// `None` when the server left it out
    pub total_count: Option<u64>,
    pub has_next_page: bool,
}

impl RecordsPage {
    pub fn from_payload(mut raw: Value) -> Self {
        let records = match raw.get_mut("records").map(Value::take) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };
        let pagination = raw.get("pagination").unwrap_or(&Value::Null);
        let total_count = pagination
            .get("totalCount")
            .filter(|v| !v.is_null())
            .map(|_| crate::models::count_at(pagination, "/totalCount"));
        let has_next_page = pagination.get("hasNextPage").and_then(Value::as_bool).unwrap_or(false);
        Self { records, total_count, has_next_page }
    }
}

/// `GET /student/dashboard/attendance/stats`
pub fn get_attendance_stats<T: Transport>(client: &ApiClient<T>) -> ApiResult<AttendanceStats> {
    let raw = client.get(STATS_PATH, &[])?;
    Ok(AttendanceStats::from_payload(&raw))
}

/// `GET /student/dashboard/attendance/records?page=&limit=`
pub fn get_records_page<T: Transport>(client: &ApiClient<T>, page: u32, page_size: usize) -> ApiResult<RecordsPage> {
    let raw = client.get(RECORDS_PATH, &[("page", page.to_string()), ("limit", page_size.to_string())])?;
    Ok(RecordsPage::from_payload(raw))
}

/// `GET /student/dashboard/stats`, returning its `recentActivity` list raw
///
/// The server already trims this list to the latest handful of marks.
pub fn get_recent_activity<T: Transport>(client: &ApiClient<T>) -> ApiResult<Vec<Value>> {
    let mut raw = client.get(DASHBOARD_STATS_PATH, &[])?;
    match raw.get_mut("recentActivity").map(Value::take) {
        Some(Value::Array(items)) => Ok(items),
        _ => Ok(Vec::new()),
    }
}
