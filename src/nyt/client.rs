// HTTP client for the NYT Books v3 API.
//
// Two endpoints are used: `lists/names.json` to discover which lists exist,
// and `lists/{date}/{list}.json` for one week's ranked snapshot. The key is
// passed as the `api-key` query parameter.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::models::{ListEntry, ListName, ListNamesResponse, ListResponse};
use super::traits::ListSource;
use crate::weeks::format_date;

/// Default NYT API endpoint.
pub const DEFAULT_NYT_API_URL: &str = "https://api.nytimes.com";

/// Thin reqwest wrapper with a generic GET helper.
pub struct NytClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NytClient {
    /// Create a new client pointing at the given base URL.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
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

    /// GET `{base}/svc/books/v3/{path}` and deserialize the JSON body.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/svc/books/v3/{}", self.base_url, path);

        debug!(path = path, "NYT GET request");

        let response = self
            .client
            .get(&url)
            .query(&[("api-key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("NYT request failed: {path}"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read NYT {path} response"))?;
        parse_reply(path, status, &body)
    }

    /// Fetch every available best-seller list.
    pub async fn list_names(&self) -> Result<Vec<ListName>> {
        let resp: ListNamesResponse = self.get("lists/names.json").await?;
        debug!(count = resp.results.len(), "Fetched list names");
        Ok(resp.results)
    }
}

#[async_trait]
impl ListSource for NytClient {
    async fn list_snapshot(&self, list_name: &str, date: NaiveDate) -> Result<Vec<ListEntry>> {
        let path = snapshot_path(list_name, date);
        let resp: ListResponse = self.get(&path).await?;
        Ok(resp.results.into_entries())
    }
}

/// Deserialize a reply body, or fail with the status and body on non-2xx.
fn parse_reply<T: DeserializeOwned>(path: &str, status: StatusCode, body: &str) -> Result<T> {
    if !status.is_success() {
        anyhow::bail!("NYT {path} returned {status}: {body}");
    }
    serde_json::from_str(body).with_context(|| format!("Failed to deserialize NYT {path} response"))
}

/// Path of one week's snapshot, relative to `svc/books/v3/`.
pub fn snapshot_path(list_name: &str, date: NaiveDate) -> String {
    format!("lists/{}/{}.json", format_date(date), list_name.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_path() {
        let date = NaiveDate::from_ymd_opt(2011, 1, 8).unwrap();
        assert_eq!(
            snapshot_path("combined-print-fiction", date),
            "lists/2011-01-08/combined-print-fiction.json"
        );
    }

    #[test]
    fn test_parse_reply_error_status() {
        let err = parse_reply::<ListResponse>(
            "lists/2011-01-08/nope.json",
            StatusCode::NOT_FOUND,
            "{\"fault\": \"not found\"}",
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_parse_reply_bad_json() {
        let err = parse_reply::<ListNamesResponse>("lists/names.json", StatusCode::OK, "oops")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to deserialize"));
    }

    #[test]
    fn test_parse_reply_empty_list() {
        let resp: ListResponse =
            parse_reply("lists/x.json", StatusCode::OK, r#"{"results": []}"#).unwrap();
        assert!(resp.results.into_entries().is_empty());
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = NytClient::new("https://api.nytimes.com/", "key").unwrap();
        assert_eq!(client.base_url, "https://api.nytimes.com");
    }
}
