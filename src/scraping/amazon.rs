// Scraper for a single Amazon product page
//
// Fetches the page once and pulls the product title and the listed price
// out of fixed element ids.

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use rust_decimal::Decimal;
use scraper::Html;
use serde::Serialize;
use std::str::FromStr;
use tracing::{debug, info};

use super::client::{element_text, fetch_html, selector};
use crate::error::{Result, ScratchError};

const TITLE_SELECTOR: &str = "#productTitle";

/// Price ids in the order they are tried. Deal and buy-box prices replace
/// the regular one on some listings.
const PRICE_SELECTORS: &[&str] = &[
    "#priceblock_ourprice",
    "#priceblock_dealprice",
    "#price_inside_buybox",
];

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// What the product page says about the item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListing {
    pub title: String,
    /// Price text exactly as shown, currency symbol included
    pub raw_price: String,
    /// Price without the fractional part
    pub whole_price: u64,
    pub price: Decimal,
}

/// Fetch a product page and parse it.
pub async fn fetch_product(client: &Client, url: &str) -> Result<ProductListing> {
    let html = fetch_html(client, url).await?;
    parse_product_page(&html).with_context(|| format!("Failed to parse product page {}", url))
}

/// Parse the product title and price out of a product page.
pub fn parse_product_page(html: &str) -> Result<ProductListing> {
    let document = Html::parse_document(html);

    let title_sel = selector(TITLE_SELECTOR)?;
    let title = document
        .select(&title_sel)
        .next()
        .map(|el| collapse_whitespace(&element_text(&el)))
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ScratchError::MissingElement(TITLE_SELECTOR.to_string()))?;

    let mut raw_price = None;
    for css in PRICE_SELECTORS {
        let sel = selector(css)?;
        if let Some(el) = document.select(&sel).next() {
            let text = collapse_whitespace(&element_text(&el));
            if !text.is_empty() {
                debug!("Price found under {}", css);
                raw_price = Some(text);
                break;
            }
        }
    }
    let raw_price =
        raw_price.ok_or_else(|| ScratchError::MissingElement(PRICE_SELECTORS.join(", ")))?;

    let whole_price = convert_price(&raw_price)?;
    let price = parse_price_decimal(&raw_price)?;

    info!("Parsed product '{}' at {}", title, raw_price);

    Ok(ProductListing {
        title,
        raw_price,
        whole_price,
        price,
    })
}

/// Whole currency units of a displayed price.
///
/// The first character is the currency symbol; thousands separators are
/// dropped and everything from the decimal point on is ignored
/// (`"£1,234.56"` becomes `1234`).
pub fn convert_price(raw: &str) -> Result<u64> {
    let digits = strip_currency(raw);
    let whole = digits.split('.').next().unwrap_or_default();
    whole
        .parse::<u64>()
        .map_err(|_| ScratchError::ParseError(format!("not a price: {}", raw)).into())
}

/// Full price of a displayed amount, fractional part included.
pub fn parse_price_decimal(raw: &str) -> Result<Decimal> {
    let digits = strip_currency(raw);
    Decimal::from_str(&digits)
        .map_err(|_| ScratchError::ParseError(format!("not a price: {}", raw)).into())
}

fn strip_currency(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    chars.next();
    chars.as_str().replace(',', "").trim().to_string()
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}
