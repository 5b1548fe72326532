use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use internship_match::config::Settings;
use internship_match::core::{Assistant, Catalog, Matcher};
use internship_match::models::ScoringPolicy;
use internship_match::routes::{self, AppState};
use std::sync::Arc;
use tracing::{info, warn, error};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting internship matching service...");

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    // The catalog is required; refuse to serve without it
    let catalog = Catalog::load(&settings.catalog.path).map_err(|e| {
        error!("Failed to load catalog: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    info!("Loaded {} postings from {}", catalog.len(), settings.catalog.path);
    if catalog.is_empty() {
        warn!("Catalog {} is empty; every match request will return no results", settings.catalog.path);
    }

    let policy = ScoringPolicy {
        domain_bonus: settings.scoring.domain_bonus,
    };

    let matcher = Matcher::new(Arc::new(catalog), policy);

    info!("Matcher initialized with policy: {:?}", policy);

    // Build application state
    let app_state = AppState {
        matcher,
        assistant: Assistant::default(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
