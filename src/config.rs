// Configuration: API keys, endpoints, cache path and request pacing.
//
// Everything comes from environment variables, with a .env file loaded
// first by main.

use std::env;
use std::time::Duration;

use anyhow::Result;

/// Default delay between remote requests. The NYT and Google free tiers
/// both throttle bursts, so every request waits at least this long.
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 200;

/// Central configuration loaded from environment variables.
///
/// API keys come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy and is gitignored.
pub struct Config {
    /// NYT Books API key (developer.nytimes.com)
    pub nyt_api_key: String,
    /// Google Books API key, only needed for description enrichment
    pub google_books_api_key: String,
    /// NYT API base URL (defaults to https://api.nytimes.com)
    pub nyt_api_url: String,
    /// Google Books API base URL (defaults to https://www.googleapis.com)
    pub google_books_api_url: String,
    pub db_path: String,
    /// Minimum time between remote requests
    pub request_delay: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nothing is required at load time; each command checks for the
    /// keys it actually needs via the `require_*` methods.
    pub fn load() -> Result<Self> {
        let request_delay_ms = match env::var("BOOKIEMAN_REQUEST_DELAY_MS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                anyhow::anyhow!("BOOKIEMAN_REQUEST_DELAY_MS must be a whole number, got {raw:?}")
            })?,
            Err(_) => DEFAULT_REQUEST_DELAY_MS,
        };

        Ok(Self {
            nyt_api_key: env::var("NYT_API_KEY").unwrap_or_default(),
            google_books_api_key: env::var("GOOGLE_BOOKS_API_KEY").unwrap_or_default(),
            nyt_api_url: env::var("NYT_API_URL")
                .unwrap_or_else(|_| crate::nyt::client::DEFAULT_NYT_API_URL.to_string()),
            google_books_api_url: env::var("GOOGLE_BOOKS_API_URL").unwrap_or_else(|_| {
                crate::google_books::client::DEFAULT_GOOGLE_BOOKS_API_URL.to_string()
            }),
            db_path: env::var("BOOKIEMAN_DB_PATH")
                .unwrap_or_else(|_| "./bookieman.db".to_string()),
            request_delay: Duration::from_millis(request_delay_ms),
        })
    }

    /// Check that the NYT API key is configured.
    /// Call this before fetching list names or list snapshots.
    pub fn require_nyt(&self) -> Result<()> {
        if self.nyt_api_key.is_empty() {
            anyhow::bail!(
                "NYT_API_KEY not set. Add it to your .env file.\n\
                 Keys are free at https://developer.nytimes.com."
            );
        }
        Ok(())
    }

    /// Check that the Google Books API key is configured.
    /// Only needed when descriptions are enriched (i.e. without --no-enrich).
    pub fn require_google_books(&self) -> Result<()> {
        if self.google_books_api_key.is_empty() {
            anyhow::bail!(
                "GOOGLE_BOOKS_API_KEY not set. Add it to your .env file,\n\
                 or pass --no-enrich to keep the descriptions NYT provides."
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_keys(nyt: &str, google: &str) -> Config {
        Config {
            nyt_api_key: nyt.to_string(),
            google_books_api_key: google.to_string(),
            nyt_api_url: crate::nyt::client::DEFAULT_NYT_API_URL.to_string(),
            google_books_api_url: crate::google_books::client::DEFAULT_GOOGLE_BOOKS_API_URL
                .to_string(),
            db_path: "./bookieman.db".to_string(),
            request_delay: Duration::from_millis(DEFAULT_REQUEST_DELAY_MS),
        }
    }

    #[test]
    fn test_require_nyt_missing_key() {
        let config = config_with_keys("", "g");
        let err = config.require_nyt().unwrap_err();
        assert!(err.to_string().contains("NYT_API_KEY"));
    }

    #[test]
    fn test_require_google_books_missing_key() {
        let config = config_with_keys("n", "");
        let err = config.require_google_books().unwrap_err();
        assert!(err.to_string().contains("--no-enrich"));
    }

    #[test]
    fn test_require_passes_with_keys() {
        let config = config_with_keys("n", "g");
        assert!(config.require_nyt().is_ok());
        assert!(config.require_google_books().is_ok());
    }
}
