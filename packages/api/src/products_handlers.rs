// ABOUTME: HTTP request handlers for catalogue queries
// ABOUTME: Search, suggestions, single product, history, category, and specials

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use pantry_catalog::{search, suggestions, HistoryPoint, Product, SearchParams, Suggestion};

use crate::response::{bad_request, ApiResponse};
use crate::state::AppState;

fn default_category_limit() -> usize {
    10
}

fn default_specials_limit() -> usize {
    12
}

const MAX_LIST_LIMIT: usize = 50;

/// Search the catalogue with filters, sorting, and pagination
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    info!("Searching products (q: '{}', page: {})", params.q, params.page);

    if let Err(e) = params.validate() {
        return bad_request(e.to_string());
    }

    let page = search(&state.catalog, &params);
    (StatusCode::OK, ResponseJson(ApiResponse::success(page))).into_response()
}

#[derive(Deserialize)]
pub struct SuggestQuery {
    pub q: String,
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

/// Search-as-you-type name suggestions
pub async fn get_suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> impl IntoResponse {
    if query.q.is_empty() {
        return bad_request("q must not be empty".to_string());
    }

    let suggestions = suggestions(&state.catalog, &query.q);
    (
        StatusCode::OK,
        ResponseJson(ApiResponse::success(SuggestionsResponse { suggestions })),
    )
        .into_response()
}

/// Get a single product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.product_by_id(&product_id) {
        Some(product) => {
            (StatusCode::OK, ResponseJson(ApiResponse::success(product))).into_response()
        }
        None => not_found("Product not found"),
    }
}

#[derive(Serialize)]
pub struct HistoryResponse<'a> {
    pub product_id: &'a str,
    pub product_name: &'a str,
    pub history: &'a [HistoryPoint],
}

/// 31-day price history for a product
pub async fn get_product_history(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.product_by_id(&product_id) {
        Some(product) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success(HistoryResponse {
                product_id: &product.id,
                product_name: &product.name,
                history: &product.price_history,
            })),
        )
            .into_response(),
        None => not_found("Product not found"),
    }
}

#[derive(Deserialize)]
pub struct CategoryQuery {
    #[serde(default = "default_category_limit")]
    pub limit: usize,
}

#[derive(Serialize)]
pub struct CategoryResponse<'a> {
    pub products: Vec<&'a Product>,
    pub category: &'a str,
}

/// All products in one category, capped at `limit`
pub async fn get_products_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<CategoryQuery>,
) -> impl IntoResponse {
    if query.limit < 1 || query.limit > MAX_LIST_LIMIT {
        return bad_request(format!("limit must be between 1 and {MAX_LIST_LIMIT}"));
    }

    let products: Vec<&Product> = state
        .catalog
        .products()
        .iter()
        .filter(|p| p.category == category)
        .take(query.limit)
        .collect();

    (
        StatusCode::OK,
        ResponseJson(ApiResponse::success(CategoryResponse {
            products,
            category: &category,
        })),
    )
        .into_response()
}

#[derive(Deserialize)]
pub struct SpecialsQuery {
    #[serde(default = "default_specials_limit")]
    pub limit: usize,
}

#[derive(Serialize)]
pub struct SpecialsResponse<'a> {
    pub products: Vec<&'a Product>,
}

/// Products currently on special at any store
pub async fn get_specials(
    State(state): State<AppState>,
    Query(query): Query<SpecialsQuery>,
) -> impl IntoResponse {
    if query.limit < 1 || query.limit > MAX_LIST_LIMIT {
        return bad_request(format!("limit must be between 1 and {MAX_LIST_LIMIT}"));
    }

    let products: Vec<&Product> = state
        .catalog
        .products()
        .iter()
        .filter(|p| p.store_prices.any_on_special())
        .take(query.limit)
        .collect();

    (
        StatusCode::OK,
        ResponseJson(ApiResponse::success(SpecialsResponse { products })),
    )
        .into_response()
}

fn not_found(message: &str) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        ResponseJson(ApiResponse::<()>::error(message.to_string())),
    )
        .into_response()
}
