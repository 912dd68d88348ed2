// ABOUTME: Catalogue query engine: filter, sort, paginate, and suggest
// ABOUTME: Pure functions over an immutable catalogue snapshot

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::Catalog;
use crate::stores::StoreKey;
use crate::types::Product;

/// Default page size for search results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size to prevent oversized responses
pub const MAX_PAGE_SIZE: u32 = 100;

/// Maximum number of search suggestions returned
pub const MAX_SUGGESTIONS: usize = 8;

/// Sort order for search results.
///
/// Anything outside the closed set falls back to `CatalogueOrder` (no sort)
/// rather than erroring, matching the lenient query-string contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SortBy {
    #[default]
    BestPrice,
    Name,
    CatalogueOrder,
}

impl From<String> for SortBy {
    fn from(s: String) -> Self {
        match s.as_str() {
            "best_price" => SortBy::BestPrice,
            "name" => SortBy::Name,
            _ => SortBy::CatalogueOrder,
        }
    }
}

/// Query parameters for `GET /api/products/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
    pub store: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            q: String::new(),
            category: None,
            store: None,
            min_price: None,
            max_price: None,
            sort_by: SortBy::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Invalid pagination input, rejected before any filtering runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidQuery {
    #[error("page must be at least 1")]
    PageTooSmall,
    #[error("page_size must be between 1 and {MAX_PAGE_SIZE}")]
    PageSizeOutOfRange,
}

impl SearchParams {
    pub fn validate(&self) -> Result<(), InvalidQuery> {
        if self.page < 1 {
            return Err(InvalidQuery::PageTooSmall);
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Err(InvalidQuery::PageSizeOutOfRange);
        }
        Ok(())
    }
}

/// One page of search results plus the pre-pagination total.
#[derive(Debug, Serialize)]
pub struct SearchPage<'a> {
    pub products: Vec<&'a Product>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub source: &'static str,
}

fn best_price_or_inf(product: &Product) -> f64 {
    product.store_prices.best_price().unwrap_or(f64::INFINITY)
}

/// Filter, sort, and paginate the catalogue.
///
/// Callers must run `SearchParams::validate` first; this function assumes
/// in-range pagination and never fails. Filter order is fixed: text, then
/// category, then store availability, then price bounds against the best
/// price. A product with no available price never satisfies `max_price` but
/// always satisfies a `min_price`-only bound.
pub fn search<'a>(catalog: &'a Catalog, params: &SearchParams) -> SearchPage<'a> {
    let mut filtered: Vec<&Product> = catalog.products().iter().collect();

    if !params.q.is_empty() {
        let q = params.q.to_lowercase();
        filtered.retain(|p| {
            p.name.to_lowercase().contains(&q) || p.brand.to_lowercase().contains(&q)
        });
    }

    if let Some(category) = &params.category {
        filtered.retain(|p| &p.category == category);
    }

    // Unknown store keys are ignored rather than matched against nothing.
    if let Some(store) = params.store.as_deref().and_then(StoreKey::parse) {
        filtered.retain(|p| p.store_prices.get(store).available);
    }

    if let Some(min) = params.min_price {
        filtered.retain(|p| best_price_or_inf(p) >= min);
    }
    if let Some(max) = params.max_price {
        filtered.retain(|p| best_price_or_inf(p) <= max);
    }

    match params.sort_by {
        SortBy::BestPrice => {
            filtered.sort_by(|a, b| best_price_or_inf(a).total_cmp(&best_price_or_inf(b)));
        }
        SortBy::Name => {
            filtered.sort_by_key(|p| p.name.to_lowercase());
        }
        SortBy::CatalogueOrder => {}
    }

    let total = filtered.len();
    let start = ((params.page - 1) as usize).saturating_mul(params.page_size as usize);
    let products = filtered
        .into_iter()
        .skip(start)
        .take(params.page_size as usize)
        .collect();

    SearchPage {
        products,
        total,
        page: params.page,
        page_size: params.page_size,
        source: "mock",
    }
}

/// A search-as-you-type suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    pub category: String,
    pub brand: String,
}

/// Name-only substring suggestions, deduplicated by exact name text
/// (first occurrence wins), capped at [`MAX_SUGGESTIONS`], catalogue order.
pub fn suggestions(catalog: &Catalog, q: &str) -> Vec<Suggestion> {
    let q = q.to_lowercase();
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();

    for product in catalog.products() {
        if product.name.to_lowercase().contains(&q) && seen.insert(product.name.clone()) {
            out.push(Suggestion {
                id: product.id.clone(),
                name: product.name.clone(),
                category: product.category.clone(),
                brand: product.brand.clone(),
            });
            if out.len() >= MAX_SUGGESTIONS {
                break;
            }
        }
    }

    out
}
