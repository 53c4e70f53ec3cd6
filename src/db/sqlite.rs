// SqliteCache: rusqlite backend implementing the BookCache trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Sync.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::{Book, TimelineRun};
use super::traits::BookCache;

pub struct SqliteCache {
    conn: Mutex<Connection>,
}

impl SqliteCache {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl BookCache for SqliteCache {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn get_book(&self, isbn: &str) -> Result<Option<Book>> {
        let conn = self.conn.lock().await;
        super::queries::get_book(&conn, isbn)
    }

    async fn put_book(&self, book: &Book) -> Result<bool> {
        let conn = self.conn.lock().await;
        super::queries::put_book(&conn, book)
    }

    async fn book_keys(&self) -> Result<Vec<String>> {
        let conn = self.conn.lock().await;
        super::queries::book_keys(&conn)
    }

    async fn all_books(&self) -> Result<Vec<Book>> {
        let conn = self.conn.lock().await;
        super::queries::all_books(&conn)
    }

    async fn book_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::book_count(&conn)
    }

    async fn record_timeline_run(&self, run: &TimelineRun) -> Result<()> {
        let conn = self.conn.lock().await;
        super::queries::record_timeline_run(&conn, run)
    }

    async fn recent_timeline_runs(&self, limit: u32) -> Result<Vec<TimelineRun>> {
        let conn = self.conn.lock().await;
        super::queries::recent_timeline_runs(&conn, limit)
    }
}
