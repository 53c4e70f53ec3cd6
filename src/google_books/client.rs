// HTTP client for the Google Books volumes search.
//
// Queries `books/v1/volumes?q=isbn:...` or `q=intitle:...` and returns the
// best description among the matched volumes. Failures are mapped onto
// LookupError so callers can tell rate limiting from a bad response.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use super::models::VolumesResponse;
use super::traits::{DescriptionSource, LookupError, LookupQuery};

/// Default Google APIs endpoint.
pub const DEFAULT_GOOGLE_BOOKS_API_URL: &str = "https://www.googleapis.com";

/// Client for the Google Books API.
pub struct GoogleBooksClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoogleBooksClient {
    /// Create a new client pointing at the given base URL.
    pub fn new(base_url: &str, api_key: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("bookieman/0.1 (best-seller timelines)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Run a volumes search and return the raw response.
    pub async fn search(&self, query: &LookupQuery) -> Result<VolumesResponse, LookupError> {
        let url = format!("{}/books/v1/volumes", self.base_url);
        let q = query.to_query_string();

        let response = self
            .client
            .get(&url)
            .query(&[("q", q.as_str()), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = if status.is_success() {
            response.text().await?
        } else {
            response.text().await.unwrap_or_default()
        };
        classify(status, &body)
    }
}

/// Map a volumes search reply onto a response or a typed failure.
pub fn classify(status: StatusCode, body: &str) -> Result<VolumesResponse, LookupError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(LookupError::RateLimited);
    }
    if !status.is_success() {
        return Err(LookupError::Status {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }
    serde_json::from_str(body).map_err(|e| LookupError::Malformed(e.to_string()))
}

#[async_trait]
impl DescriptionSource for GoogleBooksClient {
    async fn lookup(&self, query: &LookupQuery) -> Result<Option<String>, LookupError> {
        let resp = self.search(query).await?;
        let description = resp.best_description();
        debug!(
            query = %query,
            total_items = resp.total_items,
            found = description.is_some(),
            "Google Books lookup"
        );
        Ok(description)
    }
}
