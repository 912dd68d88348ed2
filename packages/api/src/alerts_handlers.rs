// ABOUTME: HTTP request handlers for price alerts
// ABOUTME: Alert creation schedules one detached sweep over untriggered alerts

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use pantry_alerts::{check_alerts_and_notify, AlertCreateInput};

use crate::response::{ApiError, ApiResponse};
use crate::state::AppState;

/// Create a price alert and schedule a sweep
pub async fn create_alert(
    State(state): State<AppState>,
    Json(input): Json<AlertCreateInput>,
) -> impl IntoResponse {
    info!("Creating price alert for product {}", input.product_id);

    match state.alerts.create(input).await {
        Ok(alert) => {
            // Fire-and-forget: the caller never observes sweep errors.
            let sweep_state = state.clone();
            tokio::spawn(async move {
                check_alerts_and_notify(
                    &sweep_state.catalog,
                    &sweep_state.alerts,
                    sweep_state.notifier.as_ref(),
                )
                .await;
            });
            (StatusCode::CREATED, ResponseJson(ApiResponse::success(alert))).into_response()
        }
        Err(e) => ApiError(e).into_response(),
    }
}

#[derive(Deserialize)]
pub struct ListAlertsQuery {
    pub product_id: Option<String>,
}

/// List alerts, optionally for a single product
pub async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<ListAlertsQuery>,
) -> impl IntoResponse {
    match state.alerts.list(query.product_id.as_deref()).await {
        Ok(alerts) => {
            (StatusCode::OK, ResponseJson(ApiResponse::success(alerts))).into_response()
        }
        Err(e) => ApiError(e).into_response(),
    }
}

#[derive(Serialize)]
pub struct DeleteAlertResponse {
    pub message: &'static str,
    pub id: String,
}

/// Delete an alert by ID
pub async fn delete_alert(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
) -> impl IntoResponse {
    info!("Deleting price alert {}", alert_id);

    match state.alerts.delete(&alert_id).await {
        Ok(()) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success(DeleteAlertResponse {
                message: "Alert deleted",
                id: alert_id,
            })),
        )
            .into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}
