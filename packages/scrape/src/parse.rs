// ABOUTME: HTML tile extraction for retailer search pages
// ABOUTME: Selector fallback chains per retailer, price text parsed with a regex

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

use crate::ScrapedProduct;

/// At most this many tiles are taken from one page.
pub const MAX_TILES: usize = 10;

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?(\d+\.?\d*)").expect("price pattern is valid"));

/// Markup on these sites churns, so each lookup tries a chain of selectors
/// and takes the first that matches anything.
fn select_first_nonempty<'a>(html: &'a Html, selectors: &[&str]) -> Vec<ElementRef<'a>> {
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            let matches: Vec<ElementRef<'a>> = html.select(&selector).collect();
            if !matches.is_empty() {
                return matches;
            }
        }
    }
    Vec::new()
}

fn select_one_of<'a>(tile: &ElementRef<'a>, selectors: &[&str]) -> Option<ElementRef<'a>> {
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = tile.select(&selector).next() {
                return Some(element);
            }
        }
    }
    None
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<Vec<_>>().join(" ").trim().to_string()
}

fn parse_price(text: &str) -> Option<f64> {
    let captures = PRICE_RE.captures(text)?;
    captures.get(1)?.as_str().parse().ok()
}

fn parse_tiles(
    html: &str,
    store: &str,
    tile_selectors: &[&str],
    name_selectors: &[&str],
    price_selectors: &[&str],
) -> Vec<ScrapedProduct> {
    let document = Html::parse_document(html);
    let mut products = Vec::new();

    for tile in select_first_nonempty(&document, tile_selectors)
        .into_iter()
        .take(MAX_TILES)
    {
        let Some(name_elem) = select_one_of(&tile, name_selectors) else {
            continue;
        };
        let Some(price_elem) = select_one_of(&tile, price_selectors) else {
            continue;
        };

        let name = element_text(name_elem);
        if name.is_empty() {
            continue;
        }

        match parse_price(&element_text(price_elem)) {
            Some(price) => products.push(ScrapedProduct::new(name, price, store)),
            None => debug!("Skipping {} tile with unparseable price", store),
        }
    }

    products
}

/// Extract product tiles from a Coles search results page.
pub fn parse_coles(html: &str) -> Vec<ScrapedProduct> {
    parse_tiles(
        html,
        "coles",
        &["[data-testid=\"product-tile\"]", ".product-tile", ".product"],
        &["[data-testid=\"product-title\"]", ".product-title", "h3"],
        &["[data-testid=\"product-price\"]", ".price", ".product-price"],
    )
}

/// Extract product tiles from a Woolworths search results page.
pub fn parse_woolworths(html: &str) -> Vec<ScrapedProduct> {
    parse_tiles(
        html,
        "woolworths",
        &[".product-tile-v2", ".shelfProductTile", "[data-testid=\"product-tile\"]"],
        &[".product-title", ".shelfProductTile-title", "h3"],
        &[".price", ".product-price", "[class*=\"price\"]"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const COLES_PAGE: &str = r#"
        <html><body>
          <div data-testid="product-tile">
            <span data-testid="product-title">Full Cream Milk 2L</span>
            <span data-testid="product-price">$3.10</span>
          </div>
          <div data-testid="product-tile">
            <span data-testid="product-title">Skim Milk 1L</span>
            <span data-testid="product-price">Now $1.85 was $2.20</span>
          </div>
          <div data-testid="product-tile">
            <span data-testid="product-title">No Price Product</span>
            <span data-testid="product-price">out of stock</span>
          </div>
        </body></html>
    "#;

    #[test]
    fn coles_page_parses_names_and_prices() {
        let products = parse_coles(COLES_PAGE);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Full Cream Milk 2L");
        assert_eq!(products[0].price, 3.10);
        assert_eq!(products[0].store, "coles");
        assert_eq!(products[0].source, "scrape");
        assert_eq!(products[1].price, 1.85);
    }

    #[test]
    fn woolworths_fallback_selectors_apply() {
        let html = r#"
            <div class="shelfProductTile">
              <h3>Greek Yogurt 1kg</h3>
              <div class="product-price">$6.50</div>
            </div>
        "#;
        let products = parse_woolworths(html);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Greek Yogurt 1kg");
        assert_eq!(products[0].price, 6.50);
        assert_eq!(products[0].store, "woolworths");
    }

    #[test]
    fn tile_count_is_capped() {
        let tiles: String = (0..15)
            .map(|i| {
                format!(
                    r#"<div class="product-tile"><span class="product-title">Item {i}</span><span class="price">${i}.00</span></div>"#
                )
            })
            .collect();
        let products = parse_coles(&tiles);
        assert_eq!(products.len(), MAX_TILES);
    }

    #[test]
    fn empty_page_yields_no_products() {
        assert!(parse_coles("<html><body></body></html>").is_empty());
    }

    #[test]
    fn price_regex_accepts_bare_numbers() {
        assert_eq!(parse_price("12.95"), Some(12.95));
        assert_eq!(parse_price("$4"), Some(4.0));
        assert_eq!(parse_price("no digits"), None);
    }
}
