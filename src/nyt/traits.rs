// List source trait: the seam between the timeline pipeline and NYT.
//
// The pipeline only needs "give me the ranked entries for this list on
// this date", so tests can drive it with canned snapshots.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use super::models::ListEntry;

#[async_trait]
pub trait ListSource: Send + Sync {
    /// Fetch the ranked entries of `list_name` as published on `date`.
    /// An empty vector means no list existed for that date.
    async fn list_snapshot(&self, list_name: &str, date: NaiveDate) -> Result<Vec<ListEntry>>;
}
