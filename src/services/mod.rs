use actix_web::HttpResponse;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::export::range::{
    parse_day, resolve_explicit, resolve_quick_filter, DateRange, QuickFilter,
};

pub mod agency;
pub mod health;
pub mod partner;

pub use agency::AgencyService;
pub use health::HealthService;
pub use partner::PartnerService;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Recorded once at process start, served by the health endpoint.
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MessageResponse {
    pub message: String,
}

pub(crate) fn message_response(message: &str) -> MessageResponse {
    MessageResponse {
        message: message.to_string(),
    }
}

/// Export endpoint query parameters. Explicit `start`/`end` calendar dates
/// override the named quick filter; all absent means full history.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExportQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    pub range: Option<String>,
}

pub(crate) fn resolve_export_range(query: &ExportQuery) -> Result<DateRange> {
    if query.start.is_some() || query.end.is_some() {
        let start = query.start.as_deref().map(parse_day).transpose()?;
        let end = query.end.as_deref().map(parse_day).transpose()?;
        return Ok(resolve_explicit(start, end));
    }

    if let Some(name) = &query.range {
        let filter = QuickFilter::parse(name)?;
        return Ok(resolve_quick_filter(filter, Utc::now()));
    }

    Ok(DateRange::unbounded())
}

pub(crate) fn xlsx_attachment(filename: &str, bytes: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(XLSX_CONTENT_TYPE)
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename={}", filename),
        ))
        .body(bytes)
}
