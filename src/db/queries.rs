// Database queries: the book cache and the run log.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{Book, TimelineRun};

// --- Book cache ---

/// Load a cached book by identifier.
pub fn get_book(conn: &Connection, isbn: &str) -> Result<Option<Book>> {
    let mut stmt = conn.prepare("SELECT record_json FROM book_cache WHERE isbn = ?1")?;
    let json: Option<String> = stmt.query_row(params![isbn], |row| row.get(0)).optional()?;

    match json {
        Some(json) => {
            let book = serde_json::from_str(&json)
                .with_context(|| format!("Corrupt cache record for {isbn}"))?;
            Ok(Some(book))
        }
        None => Ok(None),
    }
}

/// Cache a book. The first record for an identifier wins; later writes
/// are ignored. Returns whether a row was inserted.
pub fn put_book(conn: &Connection, book: &Book) -> Result<bool> {
    let json = serde_json::to_string(book)?;
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO book_cache (isbn, record_json) VALUES (?1, ?2)",
        params![book.isbn, json],
    )?;
    Ok(inserted > 0)
}

/// All cached identifiers, sorted.
pub fn book_keys(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT isbn FROM book_cache ORDER BY isbn")?;
    let rows = stmt.query_map([], |row| row.get(0))?;

    let mut keys = Vec::new();
    for row in rows {
        keys.push(row?);
    }
    Ok(keys)
}

/// All cached books, sorted by identifier.
pub fn all_books(conn: &Connection) -> Result<Vec<Book>> {
    let mut stmt = conn.prepare("SELECT isbn, record_json FROM book_cache ORDER BY isbn")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut books = Vec::new();
    for row in rows {
        let (isbn, json) = row?;
        let book: Book = serde_json::from_str(&json)
            .with_context(|| format!("Corrupt cache record for {isbn}"))?;
        books.push(book);
    }
    Ok(books)
}

/// Number of cached books.
pub fn book_count(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM book_cache", [], |row| row.get(0))?;
    Ok(count)
}

// --- Timeline runs ---

/// Record a finished timeline run.
pub fn record_timeline_run(conn: &Connection, run: &TimelineRun) -> Result<()> {
    conn.execute(
        "INSERT INTO timeline_runs
            (list_name, start_date, end_date, weeks_fetched, books_cached)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            run.list_name,
            run.start_date,
            run.end_date,
            run.weeks_fetched,
            run.books_cached,
        ],
    )?;
    Ok(())
}

/// The most recent timeline runs, newest first.
pub fn recent_timeline_runs(conn: &Connection, limit: u32) -> Result<Vec<TimelineRun>> {
    let mut stmt = conn.prepare(
        "SELECT list_name, start_date, end_date, weeks_fetched, books_cached, finished_at
         FROM timeline_runs
         ORDER BY id DESC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map(params![limit], |row| {
        Ok(TimelineRun {
            list_name: row.get(0)?,
            start_date: row.get(1)?,
            end_date: row.get(2)?,
            weeks_fetched: row.get(3)?,
            books_cached: row.get(4)?,
            finished_at: row.get(5)?,
        })
    })?;

    let mut runs = Vec::new();
    for row in rows {
        runs.push(row?);
    }
    Ok(runs)
}
