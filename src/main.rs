use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::info;

use visittrack::config::Config;
use visittrack::services::{AgencyService, AppStartTime, HealthService, PartnerService};
use visittrack::storage::StorageFactory;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let store = StorageFactory::create(&config)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    info!("Using storage backend: {}", store.backend_name().await);

    let bind_address = config.bind_address();
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        // The forms are served from a separate browser origin.
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .service(
                web::scope("/api")
                    .route("/partners", web::post().to(PartnerService::submit))
                    .route("/partners/excel", web::get().to(PartnerService::export_excel))
                    .route("/agency", web::post().to(AgencyService::submit))
                    .route("/agency/excel", web::get().to(AgencyService::export_excel)),
            )
            .route("/health", web::get().to(HealthService::health_check))
    })
    .bind(bind_address)?
    .run()
    .await
}
