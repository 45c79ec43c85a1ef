//! Shared HTTP plumbing for the page scrapers

use anyhow::Context;
use reqwest::Client;
use scraper::{ElementRef, Selector};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::ScraperSettings;
use crate::error::{Result, ScratchError};

/// Build the HTTP client used by every scraper.
pub fn build_client(settings: &ScraperSettings) -> Result<Client> {
    Client::builder()
        .user_agent(settings.user_agent.clone())
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()
        .context("Failed to build HTTP client")
}

/// Issue a single GET and return the body. Non-success statuses are errors;
/// nothing is retried.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    info!("Fetching {}", url);
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request failed for {}", url))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ScratchError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        }
        .into());
    }

    let body = resp
        .text()
        .await
        .with_context(|| format!("failed reading response for {}", url))?;
    debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScratchError::ParseError(format!("invalid selector {}: {:?}", css, e)).into())
}

/// Concatenated text content of an element.
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
