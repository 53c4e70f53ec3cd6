// Cache status display: record counts, file size, recent runs.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::db::BookCache;

/// Display cache status to the terminal.
pub async fn show(cache: &Arc<dyn BookCache>, db_path: &str) -> Result<()> {
    let file_size = std::fs::metadata(db_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", db_path, file_size);

    let books = cache.all_books().await?;
    let described = books.iter().filter(|b| b.has_description()).count();
    println!(
        "Cached books: {} total, {} with descriptions",
        books.len(),
        described
    );

    let runs = cache.recent_timeline_runs(5).await?;
    if runs.is_empty() {
        println!("Timeline runs: none yet");
        println!("  Run `bookieman timeline --list <name>` to fetch one");
    } else {
        println!("Timeline runs: {} most recent:", runs.len());
        for run in &runs {
            println!(
                "  {} {}..{} ({} weeks, {} new books) at {}",
                run.list_name,
                run.start_date,
                run.end_date,
                run.weeks_fetched,
                run.books_cached,
                run.finished_at
            );
        }
    }

    Ok(())
}

/// Whether a cache file exists at `db_path`.
pub fn is_initialized(db_path: &str) -> bool {
    Path::new(db_path).exists()
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
