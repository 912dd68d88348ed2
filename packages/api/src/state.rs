// ABOUTME: Shared application state threaded through every handler
// ABOUTME: Catalogue is read-only; mutable collaborators are injected explicitly

use std::sync::Arc;

use pantry_alerts::AlertStorage;
use pantry_catalog::Catalog;
use pantry_lists::ShoppingListStorage;
use pantry_notify::NotificationGateway;
use pantry_push::PushStorage;
use pantry_scrape::ScrapeService;
use pantry_storage::ApiUsage;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub alerts: AlertStorage,
    pub lists: ShoppingListStorage,
    pub push: PushStorage,
    pub notifier: Arc<dyn NotificationGateway>,
    pub scraper: Arc<ScrapeService>,
    pub usage: Arc<ApiUsage>,
}
