// ABOUTME: HTTP request handlers for browser push subscriptions

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use pantry_push::SubscribeInput;

use crate::response::{ApiError, ApiResponse};
use crate::state::AppState;

#[derive(Serialize)]
pub struct SubscribeResponse {
    pub message: &'static str,
    pub id: String,
}

/// Save a push subscription
pub async fn subscribe(
    State(state): State<AppState>,
    Json(input): Json<SubscribeInput>,
) -> impl IntoResponse {
    info!("Saving push subscription for {}", input.endpoint);

    match state.push.subscribe(input).await {
        Ok(subscription) => (
            StatusCode::CREATED,
            ResponseJson(ApiResponse::success(SubscribeResponse {
                message: "Subscription saved",
                id: subscription.id,
            })),
        )
            .into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

#[derive(Deserialize)]
pub struct UnsubscribeQuery {
    pub endpoint: String,
}

#[derive(Serialize)]
pub struct UnsubscribeResponse {
    pub message: &'static str,
}

/// Remove all subscriptions for an endpoint
pub async fn unsubscribe(
    State(state): State<AppState>,
    Query(query): Query<UnsubscribeQuery>,
) -> impl IntoResponse {
    match state.push.unsubscribe(&query.endpoint).await {
        Ok(()) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success(UnsubscribeResponse {
                message: "Unsubscribed",
            })),
        )
            .into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}
