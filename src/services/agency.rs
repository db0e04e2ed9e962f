use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use tracing::{error, info};

use super::{message_response, resolve_export_range, xlsx_attachment, ExportQuery};
use crate::export::rows::agency_sheet;
use crate::export::workbook_bytes;
use crate::storage::{AgencyChannelVisit, AgencySubmission, VisitStore};

pub const AGENCY_EXPORT_FILENAME: &str = "agency_channel_data.xlsx";

pub struct AgencyService;

impl AgencyService {
    /// POST /api/agency
    pub async fn submit(
        payload: web::Json<AgencySubmission>,
        store: web::Data<Arc<dyn VisitStore>>,
    ) -> impl Responder {
        let record = AgencyChannelVisit::from_submission(payload.into_inner(), Utc::now());
        info!(
            "Ingesting agency visit by '{}' at {}",
            record.employee_name, record.date_time
        );

        match store.insert_agency(record).await {
            Ok(()) => HttpResponse::Created()
                .json(message_response("Agency Channel form saved successfully")),
            Err(e) => {
                error!("Save agency error: {}", e);
                HttpResponse::InternalServerError().json(message_response("Server error"))
            }
        }
    }

    /// GET /api/agency/excel
    pub async fn export_excel(
        query: web::Query<ExportQuery>,
        store: web::Data<Arc<dyn VisitStore>>,
    ) -> impl Responder {
        info!("Agency export requested with filters: {:?}", query);

        let range = match resolve_export_range(&query) {
            Ok(range) => range,
            Err(e) => {
                return HttpResponse::BadRequest().json(message_response(e.message()));
            }
        };

        let visits = match store.agency_visits(range).await {
            Ok(records) => records,
            Err(e) => {
                error!("Agency export query error: {}", e);
                return HttpResponse::InternalServerError()
                    .json(message_response("Error generating Agency Excel"));
            }
        };

        if visits.is_empty() {
            return HttpResponse::NotFound().json(message_response("No agency data found"));
        }

        let sheet = agency_sheet(&visits);
        match workbook_bytes(&sheet) {
            Ok(bytes) => {
                info!("Agency export: {} rows", visits.len());
                xlsx_attachment(AGENCY_EXPORT_FILENAME, bytes)
            }
            Err(e) => {
                error!("Agency export serialization error: {}", e);
                HttpResponse::InternalServerError()
                    .json(message_response("Error generating Agency Excel"))
            }
        }
    }
}
