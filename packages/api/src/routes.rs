// ABOUTME: Router constructors wiring handlers to the /api surface
// ABOUTME: One constructor per resource group plus the combined application router

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;
use crate::{
    alerts_handlers, lists_handlers, meta_handlers, products_handlers, push_handlers,
    scrape_handlers,
};

/// Creates the products API router
pub fn create_products_router() -> Router<AppState> {
    Router::new()
        .route("/search", get(products_handlers::search_products))
        .route("/suggestions", get(products_handlers::get_suggestions))
        .route("/category/{category}", get(products_handlers::get_products_by_category))
        .route("/{product_id}", get(products_handlers::get_product))
        .route("/{product_id}/history", get(products_handlers::get_product_history))
}

/// Creates the price alerts API router
pub fn create_alerts_router() -> Router<AppState> {
    Router::new()
        .route("/", post(alerts_handlers::create_alert))
        .route("/", get(alerts_handlers::list_alerts))
        .route("/{alert_id}", delete(alerts_handlers::delete_alert))
}

/// Creates the shopping lists API router
pub fn create_lists_router() -> Router<AppState> {
    Router::new()
        .route("/", post(lists_handlers::create_list))
        .route("/", get(lists_handlers::list_lists))
        .route("/{list_id}", get(lists_handlers::get_list))
        .route("/{list_id}", delete(lists_handlers::delete_list))
        .route("/{list_id}/items", post(lists_handlers::add_item))
        .route("/{list_id}/items/{item_id}", put(lists_handlers::update_item_quantity))
        .route("/{list_id}/items/{item_id}", delete(lists_handlers::remove_item))
        .route("/{list_id}/totals", get(lists_handlers::get_list_totals))
}

/// Creates the push subscription API router
pub fn create_push_router() -> Router<AppState> {
    Router::new()
        .route("/subscribe", post(push_handlers::subscribe))
        .route("/unsubscribe", delete(push_handlers::unsubscribe))
}

/// Creates the full application router with all routes nested under /api
pub fn create_api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/", get(meta_handlers::banner))
        .route("/api/api-usage", get(meta_handlers::get_api_usage))
        .route("/api/stores", get(meta_handlers::get_stores))
        .route("/api/categories", get(meta_handlers::get_categories))
        .route("/api/specials", get(products_handlers::get_specials))
        .route("/api/scrape/{query}", get(scrape_handlers::scrape_prices))
        .nest("/api/products", create_products_router())
        .nest("/api/alerts", create_alerts_router())
        .nest("/api/shopping-lists", create_lists_router())
        .nest("/api/push", create_push_router())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use pantry_alerts::AlertStorage;
    use pantry_catalog::Catalog;
    use pantry_lists::ShoppingListStorage;
    use pantry_notify::NoopGateway;
    use pantry_push::PushStorage;
    use pantry_scrape::ScrapeService;
    use pantry_storage::{test_pool, ApiUsage};

    async fn test_app() -> (Router, AppState) {
        let pool = test_pool().await;
        let state = AppState {
            catalog: Arc::new(Catalog::generate_seeded(7)),
            alerts: AlertStorage::new(pool.clone()),
            lists: ShoppingListStorage::new(pool.clone()),
            push: PushStorage::new(pool),
            notifier: Arc::new(NoopGateway),
            scraper: Arc::new(ScrapeService::new()),
            usage: Arc::new(ApiUsage::default()),
        };
        (create_api_router(state.clone()), state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn banner_reports_catalogue_size() {
        let (app, state) = test_app().await;
        let response = app
            .oneshot(Request::builder().uri("/api/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["message"], "PricePantry API");
        let features = json["data"]["features"].as_array().unwrap();
        assert!(features
            .last()
            .unwrap()
            .as_str()
            .unwrap()
            .starts_with(&state.catalog.len().to_string()));
    }

    #[tokio::test]
    async fn search_returns_paginated_envelope() {
        let (app, _) = test_app().await;
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/products/search?page_size=5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["products"].as_array().unwrap().len(), 5);
        assert_eq!(json["data"]["page"], 1);
        assert_eq!(json["data"]["source"], "mock");
    }

    #[tokio::test]
    async fn search_rejects_oversized_page_size() {
        let (app, _) = test_app().await;
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/products/search?page_size=500")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_product_is_404() {
        let (app, _) = test_app().await;
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/products/prod-missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn product_history_includes_name() {
        let (app, state) = test_app().await;
        let id = state.catalog.products()[0].id.clone();
        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/products/{id}/history"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["product_id"], id);
        assert_eq!(json["data"]["history"].as_array().unwrap().len(), 31);
    }

    #[tokio::test]
    async fn alert_create_list_delete_flow() {
        let (app, state) = test_app().await;
        let product = &state.catalog.products()[0];
        let payload = serde_json::json!({
            "product_id": product.id,
            "product_name": product.name,
            "target_price": 0.01,
            "current_best_price": 5.00,
        });

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/alerts")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        let alert_id = created["data"]["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/alerts?product_id={}", product.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let listed = body_json(response).await;
        assert_eq!(listed["data"].as_array().unwrap().len(), 1);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/alerts/{alert_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/alerts/{alert_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn shopping_list_flow_with_totals() {
        let (app, _) = test_app().await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/shopping-lists?name=Weekly%20Shop")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let list_id = body_json(response).await["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let item = serde_json::json!({
            "product_id": "prod-1",
            "product_name": "Milk 2L",
            "product_image": "",
            "quantity": 2,
            "store_prices": {
                "coles": {"price": 3.00, "available": true, "on_special": false}
            }
        });
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/shopping-lists/{list_id}/items"))
                    .header("content-type", "application/json")
                    .body(Body::from(item.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/shopping-lists/{list_id}/totals"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let totals = body_json(response).await;
        assert_eq!(totals["data"]["store_totals"]["coles"], 6.0);
        assert_eq!(totals["data"]["cheapest_store"], "coles");
        assert_eq!(totals["data"]["cheapest_total"], 6.0);
    }

    #[tokio::test]
    async fn push_subscribe_then_unsubscribe() {
        let (app, state) = test_app().await;
        let payload = serde_json::json!({
            "endpoint": "https://push.example/ep1",
            "keys": {"p256dh": "BPubKey", "auth": "authSecret"}
        });

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/push/subscribe")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/push/unsubscribe?endpoint=https%3A%2F%2Fpush.example%2Fep1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.push.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn stores_and_categories_are_fixed_sets() {
        let (app, _) = test_app().await;

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/stores").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let stores = body_json(response).await;
        assert_eq!(stores["data"].as_array().unwrap().len(), 5);

        let response = app
            .oneshot(Request::builder().uri("/api/categories").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let categories = body_json(response).await;
        assert_eq!(categories["data"]["categories"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn api_usage_starts_at_zero() {
        let (app, _) = test_app().await;
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/api-usage")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"]["calls_made"], 0);
        assert_eq!(json["data"]["monthly_limit"], 1000);
        assert_eq!(json["data"]["remaining"], 1000);
    }
}
