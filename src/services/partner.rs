use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use tracing::{error, info};

use super::{message_response, resolve_export_range, xlsx_attachment, ExportQuery};
use crate::export::rows::partner_sheet;
use crate::export::workbook_bytes;
use crate::storage::{PartnerSubmission, PartnerVisit, VisitStore};

pub const PARTNER_EXPORT_FILENAME: &str = "partners_data.xlsx";

pub struct PartnerService;

impl PartnerService {
    /// POST /api/partners
    pub async fn submit(
        payload: web::Json<PartnerSubmission>,
        store: web::Data<Arc<dyn VisitStore>>,
    ) -> impl Responder {
        let record = PartnerVisit::from_submission(payload.into_inner(), Utc::now());
        info!(
            "Ingesting partner visit by '{}' at {}",
            record.employee_name, record.visiting_date_time
        );

        match store.insert_partner(record).await {
            Ok(()) => HttpResponse::Created()
                .json(message_response("Partner form saved successfully")),
            Err(e) => {
                error!("Save partner error: {}", e);
                HttpResponse::InternalServerError().json(message_response("Server error"))
            }
        }
    }

    /// GET /api/partners/excel
    pub async fn export_excel(
        query: web::Query<ExportQuery>,
        store: web::Data<Arc<dyn VisitStore>>,
    ) -> impl Responder {
        info!("Partner export requested with filters: {:?}", query);

        let range = match resolve_export_range(&query) {
            Ok(range) => range,
            Err(e) => {
                return HttpResponse::BadRequest().json(message_response(e.message()));
            }
        };

        let partners = match store.partners(range).await {
            Ok(records) => records,
            Err(e) => {
                error!("Partner export query error: {}", e);
                return HttpResponse::InternalServerError()
                    .json(message_response("Error generating Partner Excel"));
            }
        };

        if partners.is_empty() {
            return HttpResponse::NotFound().json(message_response("No partner data found"));
        }

        let sheet = partner_sheet(&partners);
        match workbook_bytes(&sheet) {
            Ok(bytes) => {
                info!("Partner export: {} rows", partners.len());
                xlsx_attachment(PARTNER_EXPORT_FILENAME, bytes)
            }
            Err(e) => {
                error!("Partner export serialization error: {}", e);
                HttpResponse::InternalServerError()
                    .json(message_response("Error generating Partner Excel"))
            }
        }
    }
}
