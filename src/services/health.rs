use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::error;

use super::AppStartTime;
use crate::export::range::DateRange;
use crate::storage::VisitStore;

const STORE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
    pub storage_backend: String,
    pub partner_count: Option<usize>,
    pub uptime_seconds: i64,
}

pub struct HealthService;

impl HealthService {
    /// GET /health
    pub async fn health_check(
        store: web::Data<Arc<dyn VisitStore>>,
        start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let uptime_seconds = (Utc::now() - start_time.start_datetime)
            .num_seconds()
            .max(0);
        let storage_backend = store.backend_name().await;

        let check = tokio::time::timeout(
            STORE_CHECK_TIMEOUT,
            store.partners(DateRange::unbounded()),
        )
        .await;

        match check {
            Ok(Ok(partners)) => HttpResponse::Ok().json(HealthStatus {
                status: "ok".to_string(),
                storage_backend,
                partner_count: Some(partners.len()),
                uptime_seconds,
            }),
            Ok(Err(e)) => {
                error!("Storage health check failed: {}", e);
                HttpResponse::ServiceUnavailable().json(HealthStatus {
                    status: "unhealthy".to_string(),
                    storage_backend,
                    partner_count: None,
                    uptime_seconds,
                })
            }
            Err(_) => {
                error!("Storage health check timed out");
                HttpResponse::ServiceUnavailable().json(HealthStatus {
                    status: "unhealthy".to_string(),
                    storage_backend,
                    partner_count: None,
                    uptime_seconds,
                })
            }
        }
    }
}
