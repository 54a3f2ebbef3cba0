use crate::api::{self, AttendanceStats};
use crate::auth::{self, Credentials};
use crate::client::{ApiClient, Transport};
use crate::config::RunOptions;
use crate::error::ApiResult;
use crate::models::{AttendanceRecord, LABS, RTU_CLASSES, StudentIdentity};
use crate::pagination::{self, FetchedRecords};
use crate::report;
use crate::ui;
use log::{debug, info};
use serde_json::Value;
use std::io::Write;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Everything fetched for one report
#[derive(Debug, Clone)]
pub struct FetchedData {
    pub stats: AttendanceStats,
    pub history: FetchedRecords,
    /// Raw dashboard recent activity, when requested
    pub recent: Option<Vec<Value>>,
}

/// Run one full session against the live API
///
/// This is the main entry point used by `main`: log in, fetch, render to
/// stdout. Returns the process exit status.
pub fn run(credentials: &Credentials, options: &RunOptions) -> i32 {
    let client = ApiClient::connect(&options.base_url, &options.signature_key, options.timeout);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_client(&client, credentials, options, &mut out)
}

/// Run one session over any transport, writing the report to `out`
///
/// Diagnostics go to stderr. Login or fetch failures abort before anything of
/// the report is written.
pub fn run_with_client<T: Transport, W: Write>(
    client: &ApiClient<T>,
    credentials: &Credentials,
    options: &RunOptions,
    out: &mut W,
) -> i32 {
    let student = match auth::authenticate(client, credentials) {
        Ok(student) => student,
        Err(e) => {
            ui::print_error(&format!("Login failed: {}", e.user_detail()));
            return EXIT_FAILURE;
        }
    };

    let data = match fetch_data(client, options) {
        Ok(data) => data,
        Err(e) => {
            ui::print_error(&format!("Failed to fetch attendance data: {}", e.user_detail()));
            return EXIT_FAILURE;
        }
    };

    let records: Vec<AttendanceRecord> = data.history.records.iter().map(AttendanceRecord::from_payload).collect();
    let text = render_report(&student, &data, &records, options);
    if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
        ui::print_error(&format!("Failed to write report: {}", e));
        return EXIT_FAILURE;
    }

    if let Some(path) = &options.export_path {
        let summary = report::summarize_records(&records);
        let recent = data.recent.as_deref().unwrap_or(&[]);
        match report::export_json_report(path, recent, &data.history.records, &summary) {
            Ok(()) => {
                info!("exported {} records to {}", records.len(), path.display());
                let _ = writeln!(out, "\nData exported to {}", path.display());
            }
            Err(e) => ui::print_warning(&format!("Could not export to {}: {}", path.display(), e)),
        }
    }

    EXIT_SUCCESS
}

/// Stats, then history, then (optionally) recent activity; first failure wins
pub fn fetch_data<T: Transport>(client: &ApiClient<T>, options: &RunOptions) -> ApiResult<FetchedData> {
    let stats = api::get_attendance_stats(client)?;
    debug!("stats: {} courses", stats.courses.len());

    let history = pagination::fetch_all(client, options.page_size, options.records_limit)?;
    info!(
        "fetched {} of {} records in {} page(s)",
        history.records.len(),
        history.total_available,
        history.pages_requested
    );

    let recent = if options.show_recent { Some(api::get_recent_activity(client)?) } else { None };

    Ok(FetchedData { stats, history, recent })
}

/// Render every report section, in display order
pub fn render_report(
    student: &StudentIdentity,
    data: &FetchedData,
    records: &[AttendanceRecord],
    options: &RunOptions,
) -> String {
    let courses = &data.stats.courses;
    let rtu = report::select_class_type(courses, RTU_CLASSES);
    let labs = report::select_class_type(courses, LABS);

    let mut output = format!("Authenticated as {} ({})\n", student.name, student.roll_number);
    output.push_str(&report::format_overview(&data.stats.overall, courses));
    output.push_str(&report::format_performance_section("RTU Performance", &rtu, options.max_items));
    output.push_str(&report::format_performance_section("Lab Performance", &labs, options.max_items));

    if let Some(recent) = &data.recent {
        let recent: Vec<AttendanceRecord> = recent.iter().map(AttendanceRecord::from_payload).collect();
        output.push_str(&report::format_recent_activity(&recent, options.zone));
    }

    output.push_str(&report::format_history(
        records,
        data.history.total_available,
        options.records_limit,
        options.zone,
    ));
    output.push_str(&report::format_statistics(&report::summarize_records(records)));
    output
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
