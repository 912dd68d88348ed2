// ABOUTME: HTTP request handlers for service metadata
// ABOUTME: Banner, store directory, categories, and the API usage counter

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::Serialize;

use pantry_catalog::{StoreInfo, CATEGORIES};

use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub features: Vec<String>,
}

/// Service banner with version and feature summary
pub async fn banner(State(state): State<AppState>) -> impl IntoResponse {
    let response = BannerResponse {
        message: "PricePantry API",
        version: env!("CARGO_PKG_VERSION"),
        features: vec![
            "Price comparison across 5 stores".to_string(),
            "Web scraping for Coles/Woolworths".to_string(),
            "Email notifications via Resend".to_string(),
            "Shopping lists with store totals".to_string(),
            "Price history charts (30 days)".to_string(),
            "Push notifications support".to_string(),
            format!("{} products", state.catalog.len()),
        ],
    };
    (StatusCode::OK, ResponseJson(ApiResponse::success(response)))
}

/// The five supported stores with display metadata
pub async fn get_stores() -> impl IntoResponse {
    (
        StatusCode::OK,
        ResponseJson(ApiResponse::success(StoreInfo::all())),
    )
}

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<&'static str>,
}

/// The fixed product category set
pub async fn get_categories() -> impl IntoResponse {
    (
        StatusCode::OK,
        ResponseJson(ApiResponse::success(CategoriesResponse {
            categories: CATEGORIES.to_vec(),
        })),
    )
}

/// Outbound API usage snapshot
pub async fn get_api_usage(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        ResponseJson(ApiResponse::success(state.usage.snapshot())),
    )
}
