//! Dish image lookup via DuckDuckGo image search.
//!
//! Best-effort decoration for recipe cards: any failure (network, token
//! handshake, parsing, zero results) degrades to a fixed placeholder URL.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use pantryforge_core::ImageSearch;

/// Returned whenever no image could be resolved for a dish.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300?text=No+Image+Found";

const USER_AGENT: &str = "PantryForge/0.1";

// The images endpoint requires a `vqd` token issued per query by the HTML
// search page.
static VQD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"vqd=['"]?([\d-]+)['"]?"#).unwrap());

/// DuckDuckGo-backed image search scoped to dish photography.
pub struct DuckDuckGoImageSearch {
    client: Client,
    base_url: String,
}

impl DuckDuckGoImageSearch {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: "https://duckduckgo.com".to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn fetch_vqd(&self, query: &str) -> Result<String> {
        let url = format!("{}/?q={}", self.base_url, urlencoding::encode(query));
        let body = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .context("vqd token request failed")?
            .text()
            .await
            .context("Failed to read vqd token page")?;

        extract_vqd(&body).context("No vqd token in search page")
    }

    async fn first_image(&self, query: &str) -> Result<String> {
        let vqd = self.fetch_vqd(query).await?;

        #[derive(Deserialize)]
        struct ImageResults {
            results: Vec<ImageHit>,
        }

        #[derive(Deserialize)]
        struct ImageHit {
            image: String,
        }

        let url = format!(
            "{}/i.js?l=us-en&o=json&q={}&vqd={}",
            self.base_url,
            urlencoding::encode(query),
            vqd
        );

        let res: ImageResults = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .context("Image search request failed")?
            .json()
            .await
            .context("Failed to parse image search response")?;

        res.results
            .into_iter()
            .next()
            .map(|hit| hit.image)
            .context("Image search returned no results")
    }
}

impl Default for DuckDuckGoImageSearch {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_vqd(body: &str) -> Option<String> {
    VQD_RE
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[async_trait]
impl ImageSearch for DuckDuckGoImageSearch {
    async fn lookup(&self, dish_name: &str) -> String {
        let query = format!("{} recipe dish photography", dish_name);
        match self.first_image(&query).await {
            Ok(url) => url,
            Err(e) => {
                debug!(dish = %dish_name, error = %e, "Image search failed, using placeholder");
                PLACEHOLDER_IMAGE_URL.to_string()
            }
        }
    }
}

/// Image search stub that always resolves to the same URL. Test support.
pub struct FixedImageSearch {
    url: String,
}

impl FixedImageSearch {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl ImageSearch for FixedImageSearch {
    async fn lookup(&self, _dish_name: &str) -> String {
        self.url.clone()
    }
}
