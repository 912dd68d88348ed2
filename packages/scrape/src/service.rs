// ABOUTME: ScrapeService fetches both retailer search pages concurrently
// ABOUTME: Each side is timeout-bounded; a failed side yields an empty bucket

use std::time::Duration;
use tracing::{error, info};

use crate::cache::ScrapeCache;
use crate::parse::{parse_coles, parse_woolworths};
use crate::{ScrapeError, ScrapeResults, ScrapedProduct};

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const COLES_BASE: &str = "https://www.coles.com.au";
const WOOLWORTHS_BASE: &str = "https://www.woolworths.com.au";

/// Scrapes both supported retailers for a query, memoizing combined results.
pub struct ScrapeService {
    client: reqwest::Client,
    cache: ScrapeCache,
    coles_base: String,
    woolworths_base: String,
}

impl ScrapeService {
    pub fn new() -> Self {
        Self::with_base_urls(COLES_BASE.to_string(), WOOLWORTHS_BASE.to_string())
    }

    /// Base URL overrides for tests.
    pub fn with_base_urls(coles_base: String, woolworths_base: String) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        ScrapeService {
            client,
            cache: ScrapeCache::new(),
            coles_base,
            woolworths_base,
        }
    }

    pub fn with_cache(mut self, cache: ScrapeCache) -> Self {
        self.cache = cache;
        self
    }

    /// Scrape both retailers, serving from cache when the entry is fresh.
    /// One retailer failing or timing out never fails the other.
    pub async fn scrape_all(&self, query: &str) -> ScrapeResults {
        if let Some(cached) = self.cache.get(query) {
            return cached;
        }

        info!("Scraping retailers for '{}'", query);

        let encoded = query.replace(' ', "%20");
        let coles_url = format!("{}/search?q={}", self.coles_base, encoded);
        let woolworths_url = format!(
            "{}/shop/search/products?searchTerm={}",
            self.woolworths_base, encoded
        );

        let (coles, woolworths) = tokio::join!(
            self.fetch_side("coles", &coles_url, parse_coles),
            self.fetch_side("woolworths", &woolworths_url, parse_woolworths),
        );

        let results = ScrapeResults { coles, woolworths };
        self.cache.insert(query, results.clone());
        results
    }

    async fn fetch_side(
        &self,
        store: &str,
        url: &str,
        parse: fn(&str) -> Vec<ScrapedProduct>,
    ) -> Vec<ScrapedProduct> {
        match self.fetch_page(url).await {
            Ok(html) => parse(&html),
            Err(e) => {
                error!("Error scraping {}: {}", store, e);
                Vec::new()
            }
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        let request = self
            .client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8")
            .header("Accept-Language", "en-AU,en;q=0.9")
            .send();

        let response = tokio::time::timeout(FETCH_TIMEOUT, request)
            .await
            .map_err(|_| ScrapeError::Timeout)??;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status(status.as_u16()));
        }

        let body = tokio::time::timeout(FETCH_TIMEOUT, response.text())
            .await
            .map_err(|_| ScrapeError::Timeout)??;
        Ok(body)
    }
}

impl Default for ScrapeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const COLES_HTML: &str = r#"
        <div class="product-tile">
          <span class="product-title">Bananas 1kg</span>
          <span class="price">$4.90</span>
        </div>
    "#;

    const WOOLWORTHS_HTML: &str = r#"
        <div class="shelfProductTile">
          <h3>Bananas 1kg</h3>
          <div class="price">$4.50</div>
        </div>
    "#;

    async fn mock_retailers(coles_status: u16) -> (MockServer, MockServer) {
        let coles = MockServer::start().await;
        let woolworths = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "bananas"))
            .respond_with(ResponseTemplate::new(coles_status).set_body_string(COLES_HTML))
            .mount(&coles)
            .await;

        Mock::given(method("GET"))
            .and(path("/shop/search/products"))
            .and(query_param("searchTerm", "bananas"))
            .respond_with(ResponseTemplate::new(200).set_body_string(WOOLWORTHS_HTML))
            .mount(&woolworths)
            .await;

        (coles, woolworths)
    }

    #[tokio::test]
    async fn scrapes_both_retailers() {
        let (coles, woolworths) = mock_retailers(200).await;
        let service = ScrapeService::with_base_urls(coles.uri(), woolworths.uri());

        let results = service.scrape_all("bananas").await;
        assert_eq!(results.coles.len(), 1);
        assert_eq!(results.coles[0].price, 4.90);
        assert_eq!(results.woolworths.len(), 1);
        assert_eq!(results.woolworths[0].price, 4.50);
    }

    #[tokio::test]
    async fn failed_side_yields_empty_bucket() {
        let (coles, woolworths) = mock_retailers(503).await;
        let service = ScrapeService::with_base_urls(coles.uri(), woolworths.uri());

        let results = service.scrape_all("bananas").await;
        assert!(results.coles.is_empty());
        assert_eq!(results.woolworths.len(), 1);
    }

    #[tokio::test]
    async fn second_query_is_served_from_cache() {
        let coles = MockServer::start().await;
        let woolworths = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string(COLES_HTML))
            .expect(1)
            .mount(&coles)
            .await;
        Mock::given(method("GET"))
            .and(path("/shop/search/products"))
            .respond_with(ResponseTemplate::new(200).set_body_string(WOOLWORTHS_HTML))
            .expect(1)
            .mount(&woolworths)
            .await;

        let service = ScrapeService::with_base_urls(coles.uri(), woolworths.uri());
        let first = service.scrape_all("bananas").await;
        let second = service.scrape_all("bananas").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn expired_cache_entry_is_recomputed() {
        let (coles, woolworths) = mock_retailers(200).await;
        let service = ScrapeService::with_base_urls(coles.uri(), woolworths.uri())
            .with_cache(ScrapeCache::with_ttl(Duration::ZERO));

        let first = service.scrape_all("bananas").await;
        let second = service.scrape_all("bananas").await;
        assert_eq!(first.coles.len(), 1);
        assert_eq!(second.coles.len(), 1);
    }
}
