// ABOUTME: Live price scraping for Coles and Woolworths search pages
// ABOUTME: Concurrent bounded fetches, HTML tile parsing, and a 1-hour result cache

pub mod cache;
pub mod parse;
pub mod service;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use cache::{ScrapeCache, CACHE_TTL};
pub use service::ScrapeService;

/// One product tile lifted off a retailer search page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedProduct {
    pub name: String,
    pub price: f64,
    pub store: String,
    pub source: String,
}

impl ScrapedProduct {
    pub fn new(name: String, price: f64, store: &str) -> Self {
        ScrapedProduct {
            name,
            price,
            store: store.to_string(),
            source: "scrape".to_string(),
        }
    }
}

/// Combined results for one query, one bucket per scraped retailer.
/// A retailer that failed or timed out contributes an empty bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResults {
    pub coles: Vec<ScrapedProduct>,
    pub woolworths: Vec<ScrapedProduct>,
}

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Retailer returned HTTP {0}")]
    Status(u16),
    #[error("Request timed out")]
    Timeout,
}
