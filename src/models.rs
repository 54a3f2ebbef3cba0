/// Normalized domain records built from raw API payloads
///
/// The API is inconsistent about where it puts things (`course.name` on one
/// endpoint, `courseName` on another), so every text field is read through an
/// ordered list of JSON pointer rules. Missing, null or malformed fields fall
/// back to a default; building a record never fails.
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Ordered extraction rules for one text field
///
/// Each path is tried in order; the first scalar that is not null and not an
/// empty string wins, otherwise `default` is used.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub paths: &'static [&'static str],
    pub default: &'static str,
}

impl FieldRule {
    pub const fn new(paths: &'static [&'static str], default: &'static str) -> Self {
        Self { paths, default }
    }

    /// First matching value, or `None` when no rule matches
    pub fn find(&self, raw: &Value) -> Option<String> {
        self.paths.iter().find_map(|path| raw.pointer(path).and_then(scalar_text))
    }

    /// First matching value, or the default
    pub fn extract(&self, raw: &Value) -> String {
        self.find(raw).unwrap_or_else(|| self.default.to_string())
    }
}

// Stats payload, one `byCourse` item
pub const PERF_NAME: FieldRule = FieldRule::new(&["/courseName", "/courseCode"], "Unknown");
pub const PERF_COURSE_ID: FieldRule = FieldRule::new(&["/courseId", "/courseCode"], "");
pub const PERF_CLASS_TYPE: FieldRule = FieldRule::new(&["/classType"], "UNKNOWN");

// Records payload, one `records` / `recentActivity` item.
// `/course` as a bare string shows up in the dashboard's recent activity list.
pub const RECORD_COURSE_NAME: FieldRule = FieldRule::new(&["/course/name", "/courseName", "/course"], "Unknown");
pub const RECORD_COURSE_CODE: FieldRule = FieldRule::new(&["/course/code", "/courseCode"], "Unknown");
pub const RECORD_STATUS: FieldRule = FieldRule::new(&["/status"], "UNKNOWN");
pub const RECORD_TEACHER: FieldRule = FieldRule::new(&["/teacher/name", "/teacherName"], "-");
pub const RECORD_SECTION: FieldRule = FieldRule::new(&["/section", "/course/section"], "-");
pub const RECORD_SEMESTER: FieldRule = FieldRule::new(&["/semester"], "-");

// Login payload, `student` object
pub const STUDENT_NAME: FieldRule = FieldRule::new(&["/name"], "Unknown Student");
pub const STUDENT_ROLL: FieldRule = FieldRule::new(&["/rollNumber"], "");

pub const RTU_CLASSES: &str = "RTU_CLASSES";
pub const LABS: &str = "LABS";

/// Render a JSON scalar as text; objects, arrays, null and "" yield nothing
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Numeric field; non-numeric or absent input reads as 0
pub fn number_at(raw: &Value, pointer: &str) -> f64 {
    let parsed = match raw.pointer(pointer) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Non-negative count field
pub fn count_at(raw: &Value, pointer: &str) -> u64 {
    let value = number_at(raw, pointer);
    if value > 0.0 { value.trunc() as u64 } else { 0 }
}

/// Parse an ISO-8601 timestamp. A trailing `Z` means UTC; text without an
/// offset is read as UTC. Unparseable input yields `None`.
pub fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

fn timestamp_at(raw: &Value, pointer: &str) -> Option<DateTime<FixedOffset>> {
    raw.pointer(pointer).and_then(Value::as_str).and_then(parse_timestamp)
}

/// Time zone used when turning timestamps into display text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    Local,
    Utc,
}

impl DisplayZone {
    fn format(&self, dt: &DateTime<FixedOffset>, pattern: &str) -> String {
        match self {
            DisplayZone::Local => dt.with_timezone(&Local).format(pattern).to_string(),
            DisplayZone::Utc => dt.with_timezone(&chrono::Utc).format(pattern).to_string(),
        }
    }
}

/// Who logged in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentIdentity {
    pub name: String,
    pub roll_number: String,
}

impl StudentIdentity {
    /// Build from the login response's `student` object. The canonical roll
    /// number falls back to the submitted one, uppercased.
    pub fn from_payload(raw: &Value, submitted_roll: &str) -> Self {
        Self {
            name: STUDENT_NAME.extract(raw),
            roll_number: STUDENT_ROLL.find(raw).unwrap_or_else(|| submitted_roll.to_uppercase()),
        }
    }
}

/// The stats payload's `overall` block
#[derive(Debug, Clone, PartialEq)]
pub struct OverallStats {
    pub percentage: f64,
    pub attended: u64,
    pub total: u64,
}

impl OverallStats {
    pub fn from_payload(raw: &Value) -> Self {
        Self {
            percentage: number_at(raw, "/percentage"),
            attended: count_at(raw, "/attendedClasses"),
            total: count_at(raw, "/totalClasses"),
        }
    }
}

/// Per-course attendance from the stats endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct CoursePerformance {
    pub name: String,
    /// As reported; may fall outside 0..=100
    pub percentage: f64,
    pub attended: u64,
    pub total: u64,
    pub class_type: String,
    pub course_id: String,
}

impl CoursePerformance {
    pub fn from_payload(raw: &Value) -> Self {
        Self {
            name: PERF_NAME.extract(raw),
            percentage: number_at(raw, "/percentage"),
            attended: count_at(raw, "/attendedClasses"),
            total: count_at(raw, "/totalClasses"),
            class_type: PERF_CLASS_TYPE.extract(raw),
            course_id: PERF_COURSE_ID.extract(raw),
        }
    }

    /// `"attended/total"`, or `"-"` when no classes were held
    pub fn ratio(&self) -> String {
        if self.total == 0 { "-".to_string() } else { format!("{}/{}", self.attended, self.total) }
    }

    /// Case-insensitive class type check
    pub fn is_class_type(&self, tag: &str) -> bool {
        self.class_type.to_uppercase() == tag.to_uppercase()
    }

    /// Key used to count distinct courses
    pub fn identity(&self) -> &str {
        if self.course_id.is_empty() { &self.name } else { &self.course_id }
    }
}

/// One attendance mark from the records or recent-activity endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub course_name: String,
    pub course_code: String,
    /// Uppercased
    pub status: String,
    pub teacher: String,
    pub section: String,
    pub semester: String,
    pub date: Option<DateTime<FixedOffset>>,
    pub marked_at: Option<DateTime<FixedOffset>>,
}

impl AttendanceRecord {
    pub fn from_payload(raw: &Value) -> Self {
        Self {
            course_name: RECORD_COURSE_NAME.extract(raw),
            course_code: RECORD_COURSE_CODE.extract(raw),
            status: RECORD_STATUS.extract(raw).to_uppercase(),
            teacher: RECORD_TEACHER.extract(raw),
            section: RECORD_SECTION.extract(raw),
            semester: RECORD_SEMESTER.extract(raw),
            date: timestamp_at(raw, "/date"),
            marked_at: timestamp_at(raw, "/markedAt"),
        }
    }

    pub fn is_present(&self) -> bool {
        self.status == "PRESENT"
    }

    pub fn is_absent(&self) -> bool {
        self.status == "ABSENT"
    }

    /// e.g. `Mar 04, 2024`; prefers `date`, then `markedAt`
    pub fn display_date(&self, zone: DisplayZone) -> String {
        match self.date.as_ref().or(self.marked_at.as_ref()) {
            Some(dt) => zone.format(dt, "%b %d, %Y"),
            None => "-".to_string(),
        }
    }

    /// e.g. `09:15 AM`; only from `markedAt`
    pub fn display_time(&self, zone: DisplayZone) -> String {
        match &self.marked_at {
            Some(dt) => zone.format(dt, "%I:%M %p"),
            None => "-".to_string(),
        }
    }

    pub fn status_badge(&self) -> String {
        let label = capitalize(&self.status);
        match self.status.as_str() {
            "PRESENT" => format!("✅ {}", label),
            "ABSENT" => format!("❌ {}", label),
            _ => format!("⚠️ {}", label),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;
