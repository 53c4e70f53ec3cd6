// Data models: the records that live in the cache.
//
// Kept separate from the queries so the pipeline and lexicon can use them
// without depending on rusqlite directly.

use serde::{Deserialize, Serialize};

/// A cached book. Created once per identifier and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Primary identifier (ISBN-13, or ISBN-10 when the list had no 13)
    pub isbn: String,
    pub title: String,
    pub author: String,
    /// Cleaned description; empty when enrichment found nothing
    #[serde(default)]
    pub description: String,
    /// External reference (the list's product URL)
    #[serde(default)]
    pub url: String,
}

impl Book {
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// One completed timeline run, as recorded for `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineRun {
    pub list_name: String,
    pub start_date: String,
    pub end_date: String,
    pub weeks_fetched: u32,
    pub books_cached: u32,
    pub finished_at: String,
}
