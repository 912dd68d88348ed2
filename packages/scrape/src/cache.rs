// ABOUTME: Time-bounded memo of scrape results keyed by query string
// ABOUTME: Expired entries are recomputed in place, never proactively evicted

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::ScrapeResults;

/// How long a combined scrape result stays fresh.
pub const CACHE_TTL: Duration = Duration::from_secs(3600);

/// Explicitly owned cache, injected into the service rather than a global.
#[derive(Debug)]
pub struct ScrapeCache {
    entries: Mutex<HashMap<String, (Instant, ScrapeResults)>>,
    ttl: Duration,
}

impl ScrapeCache {
    pub fn new() -> Self {
        Self::with_ttl(CACHE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        ScrapeCache {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Fresh entry for `query`, or None when absent or expired.
    pub fn get(&self, query: &str) -> Option<ScrapeResults> {
        let entries = self.entries.lock().ok()?;
        let (stored_at, results) = entries.get(query)?;
        if stored_at.elapsed() < self.ttl {
            debug!("Scrape cache hit for '{}'", query);
            Some(results.clone())
        } else {
            None
        }
    }

    pub fn insert(&self, query: &str, results: ScrapeResults) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(query.to_string(), (Instant::now(), results));
        }
    }
}

impl Default for ScrapeCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScrapedProduct;

    fn sample_results() -> ScrapeResults {
        ScrapeResults {
            coles: vec![ScrapedProduct::new("Milk 2L".to_string(), 3.10, "coles")],
            woolworths: vec![],
        }
    }

    #[test]
    fn fresh_entry_is_returned() {
        let cache = ScrapeCache::new();
        cache.insert("milk", sample_results());
        assert_eq!(cache.get("milk"), Some(sample_results()));
    }

    #[test]
    fn missing_entry_is_none() {
        let cache = ScrapeCache::new();
        assert_eq!(cache.get("milk"), None);
    }

    #[test]
    fn expired_entry_is_none_but_retained() {
        let cache = ScrapeCache::with_ttl(Duration::ZERO);
        cache.insert("milk", sample_results());
        assert_eq!(cache.get("milk"), None);
        // Entry still present for recompute-in-place.
        assert_eq!(cache.entries.lock().unwrap().len(), 1);
    }

    #[test]
    fn later_insert_replaces_earlier() {
        let cache = ScrapeCache::new();
        cache.insert("milk", ScrapeResults::default());
        cache.insert("milk", sample_results());
        assert_eq!(cache.get("milk"), Some(sample_results()));
    }
}
