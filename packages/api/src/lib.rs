// ABOUTME: HTTP API surface for PricePantry
// ABOUTME: Router constructors, shared app state, and the response envelope

pub mod alerts_handlers;
pub mod lists_handlers;
pub mod meta_handlers;
pub mod products_handlers;
pub mod push_handlers;
pub mod response;
pub mod routes;
pub mod scrape_handlers;
pub mod state;

pub use response::{ApiError, ApiResponse};
pub use routes::create_api_router;
pub use state::AppState;
