// ABOUTME: PricePantry server entry point
// ABOUTME: Wires config, storage, catalogue, and collaborators into the router

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pantry_alerts::AlertStorage;
use pantry_api::{create_api_router, AppState};
use pantry_catalog::Catalog;
use pantry_lists::ShoppingListStorage;
use pantry_notify::{NoopGateway, NotificationGateway, ResendGateway};
use pantry_push::PushStorage;
use pantry_scrape::ScrapeService;
use pantry_storage::ApiUsage;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let pool = pantry_storage::connect(config.db_path.clone()).await?;

    let catalog = Catalog::generate();
    info!("Catalogue ready with {} products", catalog.len());

    let notifier: Arc<dyn NotificationGateway> = match &config.resend_api_key {
        Some(api_key) => Arc::new(ResendGateway::new(
            api_key.clone(),
            config.sender_email.clone(),
        )),
        None => {
            info!("RESEND_API_KEY not set, alert emails are disabled");
            Arc::new(NoopGateway)
        }
    };

    let state = AppState {
        catalog: Arc::new(catalog),
        alerts: AlertStorage::new(pool.clone()),
        lists: ShoppingListStorage::new(pool.clone()),
        push: PushStorage::new(pool),
        notifier,
        scraper: Arc::new(ScrapeService::new()),
        usage: Arc::new(ApiUsage::default()),
    };

    let cors = build_cors(&config)?;
    let app = create_api_router(state).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors(config: &Config) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    if config.cors_origins.iter().any(|o| o == "*") {
        return Ok(cors.allow_origin(Any));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|o| o.parse::<axum::http::HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(cors.allow_origin(origins))
}
