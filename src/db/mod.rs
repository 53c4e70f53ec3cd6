// Database layer: SQLite key-value cache for book records.
//
// We use rusqlite with the "bundled" feature so there's no system SQLite
// dependency. The database file lives wherever BOOKIEMAN_DB_PATH points
// (defaults to ./bookieman.db).

pub mod models;
pub mod queries;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use traits::BookCache;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

/// Open (or create) the cache and run migrations.
///
/// Called by `bookieman init` and by `timeline`, which may be the first
/// command run against a fresh directory.
pub fn initialize(db_path: &str) -> Result<Arc<dyn BookCache>> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for database: {}", db_path))?;
        }
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {}", db_path))?;

    conn.pragma_update(None, "journal_mode", "WAL")?;
    schema::create_tables(&conn)?;

    Ok(Arc::new(sqlite::SqliteCache::new(conn)))
}

/// Open an existing cache (fails if it doesn't exist yet).
pub fn open(db_path: &str) -> Result<Arc<dyn BookCache>> {
    if !Path::new(db_path).exists() {
        anyhow::bail!(
            "Database not found at {}. Run `bookieman init` or `bookieman timeline` first.",
            db_path
        );
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {}", db_path))?;

    conn.pragma_update(None, "journal_mode", "WAL")?;
    // Bring older cache files up to the current schema
    schema::create_tables(&conn)?;

    Ok(Arc::new(sqlite::SqliteCache::new(conn)))
}
