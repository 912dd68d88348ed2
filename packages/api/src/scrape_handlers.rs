// ABOUTME: HTTP request handler for live retailer scraping
// ABOUTME: Counts each request against the outbound API usage allowance

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::Serialize;
use tracing::info;

use pantry_scrape::ScrapeResults;

use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ScrapeResponse {
    pub query: String,
    pub results: ScrapeResults,
    pub total_coles: usize,
    pub total_woolworths: usize,
}

/// Scrape both supported retailers for a query
pub async fn scrape_prices(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> impl IntoResponse {
    info!("Scrape requested for '{}'", query);
    state.usage.record_call();

    let results = state.scraper.scrape_all(&query).await;
    let response = ScrapeResponse {
        query,
        total_coles: results.coles.len(),
        total_woolworths: results.woolworths.len(),
        results,
    };

    (StatusCode::OK, ResponseJson(ApiResponse::success(response))).into_response()
}
