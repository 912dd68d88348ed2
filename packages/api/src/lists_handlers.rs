// ABOUTME: HTTP request handlers for shopping lists and their items
// ABOUTME: Totals are computed on demand from the items' price snapshots

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use pantry_lists::{compute_totals, ItemAddInput, ListTotals};

use crate::response::{bad_request, ApiError, ApiResponse};
use crate::state::AppState;

fn default_list_name() -> String {
    "My Shopping List".to_string()
}

#[derive(Deserialize)]
pub struct CreateListQuery {
    #[serde(default = "default_list_name")]
    pub name: String,
}

/// Create a shopping list
pub async fn create_list(
    State(state): State<AppState>,
    Query(query): Query<CreateListQuery>,
) -> impl IntoResponse {
    info!("Creating shopping list '{}'", query.name);

    match state.lists.create(query.name).await {
        Ok(list) => {
            (StatusCode::CREATED, ResponseJson(ApiResponse::success(list))).into_response()
        }
        Err(e) => ApiError(e).into_response(),
    }
}

/// List all shopping lists
pub async fn list_lists(State(state): State<AppState>) -> impl IntoResponse {
    match state.lists.list().await {
        Ok(lists) => (StatusCode::OK, ResponseJson(ApiResponse::success(lists))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// Get a shopping list with its items
pub async fn get_list(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
) -> impl IntoResponse {
    match state.lists.get(&list_id).await {
        Ok(list) => (StatusCode::OK, ResponseJson(ApiResponse::success(list))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// Add an item to a list, returning the updated list
pub async fn add_item(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
    Json(input): Json<ItemAddInput>,
) -> impl IntoResponse {
    info!("Adding {} to list {}", input.product_id, list_id);

    match state.lists.add_item(&list_id, input).await {
        Ok(list) => (StatusCode::OK, ResponseJson(ApiResponse::success(list))).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

#[derive(Deserialize)]
pub struct QuantityQuery {
    pub quantity: i64,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Update an item's quantity
pub async fn update_item_quantity(
    State(state): State<AppState>,
    Path((list_id, item_id)): Path<(String, String)>,
    Query(query): Query<QuantityQuery>,
) -> impl IntoResponse {
    if query.quantity < 1 {
        return bad_request("quantity must be at least 1".to_string());
    }

    match state
        .lists
        .update_quantity(&list_id, &item_id, query.quantity)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success(MessageResponse {
                message: "Quantity updated",
            })),
        )
            .into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// Remove an item from a list
pub async fn remove_item(
    State(state): State<AppState>,
    Path((list_id, item_id)): Path<(String, String)>,
) -> impl IntoResponse {
    match state.lists.remove_item(&list_id, &item_id).await {
        Ok(()) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success(MessageResponse {
                message: "Item removed",
            })),
        )
            .into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// Delete a shopping list and its items
pub async fn delete_list(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
) -> impl IntoResponse {
    info!("Deleting shopping list {}", list_id);

    match state.lists.delete(&list_id).await {
        Ok(()) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success(MessageResponse {
                message: "Shopping list deleted",
            })),
        )
            .into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

#[derive(Serialize)]
pub struct TotalsResponse {
    pub list_id: String,
    #[serde(flatten)]
    pub totals: ListTotals,
}

/// Per-store totals and the cheapest store for a list
pub async fn get_list_totals(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
) -> impl IntoResponse {
    match state.lists.get(&list_id).await {
        Ok(list) => {
            let totals = compute_totals(&list.items);
            (
                StatusCode::OK,
                ResponseJson(ApiResponse::success(TotalsResponse {
                    list_id: list.id,
                    totals,
                })),
            )
                .into_response()
        }
        Err(e) => ApiError(e).into_response(),
    }
}
