//! Hitokoto quotation API client

use crate::domain::category::category_name;
use crate::domain::{CategorySet, Quote};
use crate::error::{HitokotoError, Result};
use crate::infrastructure::http::error_body;
use tracing::debug;

/// Source of random quotes
pub trait QuoteSource {
    /// Fetch one quote, restricted to `categories` when any are given
    fn fetch(&self, categories: &CategorySet) -> Result<Quote>;
}

impl<T: QuoteSource + ?Sized> QuoteSource for &T {
    fn fetch(&self, categories: &CategorySet) -> Result<Quote> {
        (**self).fetch(categories)
    }
}

/// Query parameters for one request: a `c` per category, then the encoding flags
pub fn quote_query(categories: &CategorySet) -> Vec<(&'static str, String)> {
    let mut query: Vec<(&'static str, String)> = categories
        .codes()
        .iter()
        .map(|code| ("c", code.clone()))
        .collect();
    query.push(("encode", "json".to_string()));
    query.push(("charset", "utf-8".to_string()));
    query
}

/// HTTP client for `https://v1.hitokoto.cn`
pub struct HitokotoClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HitokotoClient {
    pub fn new(client: reqwest::blocking::Client, endpoint: String) -> Self {
        HitokotoClient { client, endpoint }
    }

    fn request(&self, categories: &CategorySet) -> Result<reqwest::blocking::Request> {
        self.client
            .get(&self.endpoint)
            .query(&quote_query(categories))
            .build()
            .map_err(|e| HitokotoError::Fetch(format!("Invalid request to {}: {}", self.endpoint, e)))
    }
}

impl QuoteSource for HitokotoClient {
    fn fetch(&self, categories: &CategorySet) -> Result<Quote> {
        for code in categories.codes() {
            debug!(code = %code, name = category_name(code).unwrap_or("unknown"), "category filter");
        }

        let request = self.request(categories)?;
        debug!(url = %request.url(), "requesting quote");

        let response = self
            .client
            .execute(request)
            .map_err(|e| HitokotoError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HitokotoError::Fetch(format!(
                "{} returned {}: {}",
                self.endpoint,
                status,
                error_body(response)
            )));
        }

        response
            .json::<Quote>()
            .map_err(|e| HitokotoError::Fetch(format!("Malformed response: {}", e)))
    }
}
