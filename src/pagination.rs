/// Walk the paged records endpoint
///
/// Pages are requested strictly in order starting at 1. The walk stops when the
/// server reports no further page, or as soon as a caller-supplied record limit
/// is reached. Any failing page aborts the whole walk; there is no resume.
use crate::api;
use crate::client::{ApiClient, Transport};
use crate::error::ApiResult;
use log::{debug, warn};
use serde_json::Value;

/// Raw records in server order plus the server's own total
#[derive(Debug, Clone)]
pub struct FetchedRecords {
    pub records: Vec<Value>,
    /// Server-reported `totalCount`, or the number retrieved when it never reported one
    pub total_available: u64,
    pub pages_requested: u32,
}

/// Fetch the attendance history
///
/// # Arguments
/// * `page_size` - Records requested per page (0 is treated as 1)
/// * `limit` - Stop after this many records (0 means fetch everything)
pub fn fetch_all<T: Transport>(client: &ApiClient<T>, page_size: usize, limit: usize) -> ApiResult<FetchedRecords> {
    let page_size = page_size.max(1);
    let mut records: Vec<Value> = Vec::new();
    let mut total_count: u64 = 0;
    let mut page: u32 = 1;

    loop {
        debug!("fetching records page {} (limit {})", page, page_size);
        let batch = api::get_records_page(client, page, page_size)?;

        // Last reported value wins if the server changes its mind mid-walk
        if let Some(count) = batch.total_count {
            total_count = count;
        }
        let batch_len = batch.records.len();
        debug!("page {}: {} records (total {}, next {})", page, batch_len, total_count, batch.has_next_page);

        for raw in batch.records {
            records.push(raw);
            if limit > 0 && records.len() >= limit {
                debug!("record limit {} reached on page {}", limit, page);
                return Ok(finish(records, total_count, page));
            }
        }

        if !batch.has_next_page {
            break;
        }
        if batch_len == 0 {
            warn!("page {} was empty but reported another page; stopping", page);
            break;
        }
        page += 1;
    }

    Ok(finish(records, total_count, page))
}

fn finish(records: Vec<Value>, total_count: u64, pages_requested: u32) -> FetchedRecords {
    let total_available = if total_count > 0 { total_count } else { records.len() as u64 };
    FetchedRecords { records, total_available, pages_requested }
}
