use std::sync::{Arc, Mutex, RwLock};

use actix_web::{test as actix_test, web, App};
use chrono::{DateTime, Duration, Utc};

use visittrack::errors::VisitError;
use visittrack::export::range::DateRange;
use visittrack::services::{
    AgencyService, ExportQuery, MessageResponse, PartnerService, XLSX_CONTENT_TYPE,
};
use visittrack::storage::{AgencyChannelVisit, PartnerVisit, VisitStore};

// Mock store for handler tests.
#[derive(Default)]
struct MockStore {
    partners: RwLock<Vec<PartnerVisit>>,
    agency: RwLock<Vec<AgencyChannelVisit>>,
    should_fail: Mutex<bool>,
}

impl MockStore {
    fn new_failing() -> Self {
        Self {
            should_fail: Mutex::new(true),
            ..Default::default()
        }
    }
}

#[async_trait::async_trait]
impl VisitStore for MockStore {
    async fn insert_partner(&self, record: PartnerVisit) -> Result<(), VisitError> {
        if *self.should_fail.lock().unwrap() {
            return Err(VisitError::storage_operation("Mock store error"));
        }
        self.partners.write().unwrap().push(record);
        Ok(())
    }

    async fn insert_agency(&self, record: AgencyChannelVisit) -> Result<(), VisitError> {
        if *self.should_fail.lock().unwrap() {
            return Err(VisitError::storage_operation("Mock store error"));
        }
        self.agency.write().unwrap().push(record);
        Ok(())
    }

    async fn partners(&self, range: DateRange) -> Result<Vec<PartnerVisit>, VisitError> {
        if *self.should_fail.lock().unwrap() {
            return Err(VisitError::storage_operation("Mock store error"));
        }
        Ok(self
            .partners
            .read()
            .unwrap()
            .iter()
            .filter(|p| range.contains(p.visiting_date_time))
            .cloned()
            .collect())
    }

    async fn agency_visits(&self, range: DateRange) -> Result<Vec<AgencyChannelVisit>, VisitError> {
        if *self.should_fail.lock().unwrap() {
            return Err(VisitError::storage_operation("Mock store error"));
        }
        Ok(self
            .agency
            .read()
            .unwrap()
            .iter()
            .filter(|a| range.contains(a.date_time))
            .cloned()
            .collect())
    }

    async fn backend_name(&self) -> String {
        "mock".to_string()
    }
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/partners", web::post().to(PartnerService::submit))
            .route("/partners/excel", web::get().to(PartnerService::export_excel))
            .route("/agency", web::post().to(AgencyService::submit))
            .route("/agency/excel", web::get().to(AgencyService::export_excel)),
    );
}

fn shared(store: &Arc<MockStore>) -> web::Data<Arc<dyn VisitStore>> {
    let store: Arc<dyn VisitStore> = store.clone();
    web::Data::new(store)
}

fn partner_payload(visiting: &str) -> serde_json::Value {
    serde_json::json!({
        "employeeName": "Asha Rao",
        "partnerName": "Mehta Stores",
        "partnerContactNumber": "9876543210",
        "partnerEmail": "mehta@example.com",
        "shopName": "Mehta General Store",
        "cityVillage": "Pune",
        "district": "Pune",
        "state": "Maharashtra",
        "visitingDateTime": visiting,
        "onboardingStatus": "yes",
        "retailerImage": "https://img.example.com/a.jpg",
        "latitude": 18.5204,
        "longitude": 73.8567
    })
}

fn agency_visit(date_time: DateTime<Utc>) -> AgencyChannelVisit {
    AgencyChannelVisit {
        id: uuid::Uuid::new_v4(),
        employee_name: "Ravi".into(),
        designation: "FSC".into(),
        date_time,
        number_of_partner_meet: 3.0,
        motor_login_premium: 0.0,
        health_login_premium: 0.0,
        li_login_premium: 0.0,
        number_of_fsc_onboarding: 1.0,
        number_of_file_login: 0.0,
        mutual_fund: 0.0,
        number_of_sip: 2.0,
        insurance_premium: 15000.0,
        latitude: None,
        longitude: None,
        created_at: date_time,
        updated_at: date_time,
    }
}

#[actix_web::test]
async fn test_submit_partner_success() {
    let store = Arc::new(MockStore::default());
    let app = actix_test::init_service(
        App::new().app_data(shared(&store)).configure(routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/partners")
        .set_json(partner_payload("2024-03-15T04:30:00Z"))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: MessageResponse = actix_test::read_body_json(resp).await;
    assert_eq!(body.message, "Partner form saved successfully");

    let stored = store.partners.read().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].employee_name, "Asha Rao");
    assert_eq!(stored[0].city_village, "Pune");
    assert!(stored[0].tehsil.is_none());
    assert_eq!(
        stored[0].visiting_date_time,
        "2024-03-15T04:30:00Z".parse::<DateTime<Utc>>().unwrap()
    );
}

#[actix_web::test]
async fn test_submit_partner_store_failure_is_500() {
    let store = Arc::new(MockStore::new_failing());
    let app = actix_test::init_service(
        App::new().app_data(shared(&store)).configure(routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/partners")
        .set_json(partner_payload("2024-03-15T04:30:00Z"))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: MessageResponse = actix_test::read_body_json(resp).await;
    assert_eq!(body.message, "Server error");
}

#[actix_web::test]
async fn test_submit_agency_defaults_numeric_fields() {
    let store = Arc::new(MockStore::default());
    let app = actix_test::init_service(
        App::new().app_data(shared(&store)).configure(routes),
    )
    .await;

    // Only the required fields; every counter should default to 0.
    let req = actix_test::TestRequest::post()
        .uri("/api/agency")
        .set_json(serde_json::json!({
            "employeeName": "Ravi",
            "designation": "FSC",
            "dateTime": "2024-03-15T04:30:00Z"
        }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: MessageResponse = actix_test::read_body_json(resp).await;
    assert_eq!(body.message, "Agency Channel form saved successfully");

    let stored = store.agency.read().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].number_of_partner_meet, 0.0);
    assert_eq!(stored[0].insurance_premium, 0.0);
    assert!(stored[0].latitude.is_none());
}

#[actix_web::test]
async fn test_export_empty_collection_is_404() {
    let store = Arc::new(MockStore::default());
    let app = actix_test::init_service(
        App::new().app_data(shared(&store)).configure(routes),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/api/partners/excel")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: MessageResponse = actix_test::read_body_json(resp).await;
    assert_eq!(body.message, "No partner data found");
}

#[actix_web::test]
async fn test_export_returns_workbook_attachment() {
    let store = Arc::new(MockStore::default());
    let app = actix_test::init_service(
        App::new().app_data(shared(&store)).configure(routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/partners")
        .set_json(partner_payload("2024-03-15T04:30:00Z"))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = actix_test::TestRequest::get()
        .uri("/api/partners/excel")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(content_type, XLSX_CONTENT_TYPE);

    let disposition = resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(disposition, "attachment; filename=partners_data.xlsx");

    let body = actix_test::read_body(resp).await;
    assert_eq!(&body[..2], b"PK"); // XLSX is a ZIP container
}

#[actix_web::test]
async fn test_export_start_after_end_is_404_not_error() {
    let store = Arc::new(MockStore::default());
    store
        .agency
        .write()
        .unwrap()
        .push(agency_visit("2024-05-01T10:00:00Z".parse().unwrap()));
    let app = actix_test::init_service(
        App::new().app_data(shared(&store)).configure(routes),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/api/agency/excel?start=2024-05-02&end=2024-05-01")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_export_filters_by_whole_days() {
    let store = Arc::new(MockStore::default());
    // Two records on consecutive days, both mid-day IST.
    store
        .agency
        .write()
        .unwrap()
        .push(agency_visit("2024-05-01T06:30:00Z".parse().unwrap()));
    store
        .agency
        .write()
        .unwrap()
        .push(agency_visit("2024-05-02T06:30:00Z".parse().unwrap()));
    let app = actix_test::init_service(
        App::new().app_data(shared(&store)).configure(routes),
    )
    .await;

    // Day-1-only filter matches exactly the first record.
    let req = actix_test::TestRequest::get()
        .uri("/api/agency/excel?start=2024-05-01&end=2024-05-01")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let range = visittrack::export::range::resolve_explicit(
        Some("2024-05-01".parse().unwrap()),
        Some("2024-05-01".parse().unwrap()),
    );
    let matched = store.agency_visits(range).await.unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(
        matched[0].date_time,
        "2024-05-01T06:30:00Z".parse::<DateTime<Utc>>().unwrap()
    );
}

#[actix_web::test]
async fn test_export_invalid_date_param_is_400() {
    let store = Arc::new(MockStore::default());
    let app = actix_test::init_service(
        App::new().app_data(shared(&store)).configure(routes),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/api/partners/excel?start=01-05-2024")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_export_quick_filter_today() {
    let store = Arc::new(MockStore::default());
    store.agency.write().unwrap().push(agency_visit(Utc::now()));
    store
        .agency
        .write()
        .unwrap()
        .push(agency_visit(Utc::now() - Duration::days(10)));
    let app = actix_test::init_service(
        App::new().app_data(shared(&store)).configure(routes),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/api/agency/excel?range=today")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = actix_test::TestRequest::get()
        .uri("/api/agency/excel?range=yesterday")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_export_query_failure_is_500() {
    let store = Arc::new(MockStore::new_failing());
    let app = actix_test::init_service(
        App::new().app_data(shared(&store)).configure(routes),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/api/agency/excel")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: MessageResponse = actix_test::read_body_json(resp).await;
    assert_eq!(body.message, "Error generating Agency Excel");
}

#[actix_web::test]
async fn test_health_check_reports_backend() {
    let store = Arc::new(MockStore::default());
    let app = actix_test::init_service(
        App::new()
            .app_data(shared(&store))
            .app_data(web::Data::new(visittrack::services::AppStartTime {
                start_datetime: Utc::now(),
            }))
            .route(
                "/health",
                web::get().to(visittrack::services::HealthService::health_check),
            ),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/health").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage_backend"], "mock");
    assert_eq!(body["partner_count"], 0);
}

#[actix_web::test]
async fn test_health_check_unhealthy_store_is_503() {
    let store = Arc::new(MockStore::new_failing());
    let app = actix_test::init_service(
        App::new()
            .app_data(shared(&store))
            .app_data(web::Data::new(visittrack::services::AppStartTime {
                start_datetime: Utc::now(),
            }))
            .route(
                "/health",
                web::get().to(visittrack::services::HealthService::health_check),
            ),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/health").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 503);

    let body: serde_json::Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["partner_count"], serde_json::Value::Null);
}

#[test]
fn test_export_query_deserializes_from_url_params() {
    let query: ExportQuery =
        serde_json::from_value(serde_json::json!({"start": "2024-05-01"})).unwrap();
    assert_eq!(query.start.as_deref(), Some("2024-05-01"));
    assert!(query.end.is_none());
    assert!(query.range.is_none());
}
