// Colored terminal output for list names, timelines and lexicons.
//
// main.rs delegates all terminal formatting here.

use std::collections::HashMap;

use colored::Colorize;

use crate::db::models::Book;
use crate::lexicon::Lexicon;
use crate::nyt::models::ListName;
use crate::pipeline::timeline::{Timeline, TimelineStats};

/// Display the available best-seller lists.
pub fn display_list_names(names: &[ListName]) {
    if names.is_empty() {
        println!("No lists returned.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Available Lists ({}) ===", names.len()).bold()
    );
    println!();
    println!(
        "  {:>3}  {:<45} {:<8} {:<23}",
        "#".dimmed(),
        "List (use with --list)".dimmed(),
        "Cadence".dimmed(),
        "Published".dimmed(),
    );
    println!("  {}", "-".repeat(82).dimmed());

    for (i, name) in names.iter().enumerate() {
        let cadence = if name.updated.eq_ignore_ascii_case("weekly") {
            name.updated.green()
        } else {
            name.updated.yellow()
        };
        println!(
            "  {:>3}  {:<45} {:<8} {} .. {}",
            i,
            name.list_name_encoded,
            cadence,
            name.oldest_published_date.dimmed(),
            name.newest_published_date.dimmed(),
        );
    }
}

/// Display a finished timeline: run counters, then the longest-running books.
pub fn display_timeline(
    timeline: &Timeline,
    stats: &TimelineStats,
    books: &HashMap<String, Book>,
    top_n: usize,
) {
    println!(
        "\n{}",
        format!("=== {} ===", timeline.list_name).bold()
    );
    println!(
        "  Weeks: {} requested, {} with a list, {} empty, {} failed",
        stats.weeks_requested,
        stats.weeks_fetched.to_string().green(),
        stats.weeks_empty,
        colorize_count(stats.weeks_failed),
    );
    println!(
        "  Books: {} newly cached, {} already cached, {} without description",
        stats.books_cached.to_string().green(),
        stats.cache_hits,
        colorize_count(stats.enrichment_misses),
    );
    if stats.lookup_failures > 0 || stats.entries_skipped > 0 {
        println!(
            "  {} {} failed lookups, {} entries without ISBN",
            "Warning:".yellow(),
            stats.lookup_failures,
            stats.entries_skipped,
        );
    }

    let longest = timeline.weeks_on_list();
    if longest.is_empty() {
        return;
    }

    println!("\n  {}", "Longest running:".bold());
    for (isbn, weeks) in longest.iter().take(top_n) {
        let (title, author) = books
            .get(isbn)
            .map(|b| (b.title.as_str(), b.author.as_str()))
            .unwrap_or(("?", ""));
        println!(
            "    {:>3} wk  {:<40} {}  {}",
            weeks,
            super::truncate_chars(title, 40),
            author.dimmed(),
            isbn.dimmed(),
        );
    }
}

/// Display lexicon size and a sample of its words.
pub fn display_lexicon(lexicon: &Lexicon, books: usize, sample: usize) {
    println!(
        "\n{}",
        format!("=== Lexicon ({} words from {} books) ===", lexicon.len(), books).bold()
    );
    if lexicon.is_empty() {
        println!("  No words. Run `bookieman timeline` to cache some descriptions first.");
        return;
    }

    let preview: Vec<&str> = lexicon.iter().take(sample).map(String::as_str).collect();
    let more = lexicon.len().saturating_sub(preview.len());
    println!("  {}", preview.join(" ").dimmed());
    if more > 0 {
        println!("  {}", format!("... and {more} more").dimmed());
    }
}

fn colorize_count(n: usize) -> colored::ColoredString {
    if n == 0 {
        n.to_string().normal()
    } else {
        n.to_string().yellow()
    }
}
