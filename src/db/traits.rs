// Book cache trait: backend-agnostic async interface.
//
// The timeline pipeline and the lexicon builder only see this trait, so
// tests can run them against an in-memory SQLite database.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{Book, TimelineRun};

#[async_trait]
pub trait BookCache: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Book records ---

    /// Load a cached book by identifier.
    async fn get_book(&self, isbn: &str) -> Result<Option<Book>>;

    /// Cache a book; ignored if the identifier is already cached.
    /// Returns whether the record was stored.
    async fn put_book(&self, book: &Book) -> Result<bool>;

    /// All cached identifiers, sorted.
    async fn book_keys(&self) -> Result<Vec<String>>;

    /// All cached books, sorted by identifier.
    async fn all_books(&self) -> Result<Vec<Book>>;

    /// Number of cached books.
    async fn book_count(&self) -> Result<i64>;

    // --- Run log ---

    async fn record_timeline_run(&self, run: &TimelineRun) -> Result<()>;

    async fn recent_timeline_runs(&self, limit: u32) -> Result<Vec<TimelineRun>>;
}
