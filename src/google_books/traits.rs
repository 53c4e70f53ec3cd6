// Description source trait: swap-ready abstraction for enrichment.
//
// Lookups distinguish "nothing matched" from "the lookup failed": the
// first is `Ok(None)`, the second a typed `LookupError`. The timeline
// pipeline treats both as "try the next query", but logs them differently.

use async_trait::async_trait;
use thiserror::Error;

/// What to search the description source for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupQuery {
    /// An ISBN-13 or ISBN-10
    Isbn(String),
    /// Title search, matched as a phrase
    Title(String),
}

impl LookupQuery {
    /// Render as a Google Books `q` parameter.
    pub fn to_query_string(&self) -> String {
        match self {
            LookupQuery::Isbn(isbn) => format!("isbn:{}", isbn.trim()),
            LookupQuery::Title(title) => {
                format!("intitle:\"{}\"", title.trim().replace('"', ""))
            }
        }
    }
}

impl std::fmt::Display for LookupQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}

/// Why a description lookup failed (as opposed to finding nothing).
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("description lookup transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("description lookup rate limited")]
    RateLimited,
    #[error("description lookup returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed description lookup response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait DescriptionSource: Send + Sync {
    /// Look up a cleaned, non-empty description for the query.
    async fn lookup(&self, query: &LookupQuery) -> Result<Option<String>, LookupError>;
}
