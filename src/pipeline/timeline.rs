// Timeline pipeline: weekly snapshot -> cache lookup -> enrichment -> cache.
//
// For one best-seller list and a sequence of weeks, this pipeline:
// 1. Fetches the ranked snapshot for each week
// 2. Records (rank, identifier) pairs in the timeline
// 3. For identifiers not yet cached, looks up a description (ISBN, then
//    secondary ISBN, then title) and caches the new book record
//
// Every remote call goes through the shared Throttle. Requests are awaited
// one at a time; nothing here runs concurrently.

use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::db::models::Book;
use crate::db::BookCache;
use crate::google_books::clean::clean_description;
use crate::google_books::traits::{DescriptionSource, LookupQuery};
use crate::nyt::models::ListEntry;
use crate::nyt::traits::ListSource;
use crate::throttle::Throttle;
use crate::weeks::format_date;

/// One position on one week's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedBook {
    pub rank: u32,
    pub isbn: String,
}

/// Week -> ranked identifiers for a single list. Weeks with no published
/// list are absent rather than empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub list_name: String,
    pub weeks: BTreeMap<NaiveDate, Vec<RankedBook>>,
}

impl Timeline {
    pub fn new(list_name: &str) -> Self {
        Self {
            list_name: list_name.to_string(),
            weeks: BTreeMap::new(),
        }
    }

    /// How many weeks each identifier appeared, most weeks first
    /// (ties broken by identifier).
    pub fn weeks_on_list(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for ranked in self.weeks.values().flatten() {
            *counts.entry(ranked.isbn.as_str()).or_default() += 1;
        }

        let mut sorted: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(isbn, n)| (isbn.to_string(), n))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        sorted
    }
}

/// Counters for one timeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineStats {
    pub weeks_requested: usize,
    /// Weeks that returned at least one identifiable entry
    pub weeks_fetched: usize,
    /// Weeks with no list, or no entry with an ISBN
    pub weeks_empty: usize,
    pub weeks_failed: usize,
    /// New records written to the cache
    pub books_cached: usize,
    /// Entries whose identifier was already cached
    pub cache_hits: usize,
    /// New books for which no description was found
    pub enrichment_misses: usize,
    /// Individual lookups that failed (as opposed to finding nothing)
    pub lookup_failures: usize,
    /// Entries with no usable identifier
    pub entries_skipped: usize,
}

/// Build the timeline for `list_name` over `weeks`.
///
/// With `descriptions` set to `None`, new books keep the list's own blurb
/// instead of being enriched. Cache errors abort the run; remote failures
/// are logged and counted.
pub async fn run(
    lists: &dyn ListSource,
    descriptions: Option<&dyn DescriptionSource>,
    cache: &dyn BookCache,
    throttle: &Throttle,
    list_name: &str,
    weeks: &[NaiveDate],
) -> Result<(Timeline, TimelineStats)> {
    let mut timeline = Timeline::new(list_name);
    let mut stats = TimelineStats {
        weeks_requested: weeks.len(),
        ..Default::default()
    };

    let pb = ProgressBar::new(weeks.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  {msg} [{bar:30}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb.set_message(list_name.to_string());

    for &week in weeks {
        throttle.acquire().await;
        let entries = match lists.list_snapshot(list_name, week).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(list = list_name, week = %week, error = %e, "Failed to fetch list snapshot, skipping week");
                stats.weeks_failed += 1;
                pb.inc(1);
                continue;
            }
        };

        if entries.is_empty() {
            debug!(list = list_name, week = %week, "No list published for week");
            stats.weeks_empty += 1;
            pb.inc(1);
            continue;
        }

        let mut ranked = Vec::with_capacity(entries.len());
        for entry in &entries {
            let Some(isbn) = entry.identifier() else {
                warn!(
                    list = list_name,
                    week = %week,
                    rank = entry.rank,
                    title = entry.title.as_str(),
                    "List entry has no ISBN, skipping"
                );
                stats.entries_skipped += 1;
                continue;
            };

            debug!(rank = entry.rank, isbn = isbn, title = entry.title.as_str(), "List entry");

            if cache.get_book(isbn).await?.is_some() {
                stats.cache_hits += 1;
            } else {
                let description = match descriptions {
                    Some(source) => enrich(source, throttle, entry, &mut stats).await,
                    None => clean_description(&entry.description),
                };
                let book = book_from_entry(isbn, entry, description);
                if cache.put_book(&book).await? {
                    stats.books_cached += 1;
                }
            }

            ranked.push(RankedBook {
                rank: entry.rank,
                isbn: isbn.to_string(),
            });
        }

        if ranked.is_empty() {
            warn!(list = list_name, week = %week, "No entry in week had an ISBN");
            stats.weeks_empty += 1;
            pb.inc(1);
            continue;
        }

        info!(
            list = list_name,
            week = %format_date(week),
            books = ranked.len(),
            "Fetched weekly list"
        );
        timeline.weeks.insert(week, ranked);
        stats.weeks_fetched += 1;
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        list = list_name,
        weeks_fetched = stats.weeks_fetched,
        weeks_empty = stats.weeks_empty,
        weeks_failed = stats.weeks_failed,
        books_cached = stats.books_cached,
        cache_hits = stats.cache_hits,
        "Timeline complete"
    );

    Ok((timeline, stats))
}

/// The enrichment queries for an entry, in the order they're tried.
pub fn lookup_queries(entry: &ListEntry) -> Vec<LookupQuery> {
    let mut queries = Vec::with_capacity(3);
    if let Some(isbn) = entry.identifier() {
        queries.push(LookupQuery::Isbn(isbn.to_string()));
    }
    if let Some(isbn10) = entry.secondary_identifier() {
        queries.push(LookupQuery::Isbn(isbn10.to_string()));
    }
    let title = entry.title.trim();
    if !title.is_empty() {
        queries.push(LookupQuery::Title(title.to_string()));
    }
    queries
}

/// Try each lookup in turn and return the first non-empty description,
/// or an empty string if none match.
async fn enrich(
    source: &dyn DescriptionSource,
    throttle: &Throttle,
    entry: &ListEntry,
    stats: &mut TimelineStats,
) -> String {
    for query in lookup_queries(entry) {
        throttle.acquire().await;
        match source.lookup(&query).await {
            Ok(Some(description)) if !description.is_empty() => {
                debug!(query = %query, "Found description");
                return description;
            }
            Ok(_) => {
                debug!(query = %query, "No description for query");
            }
            Err(e) => {
                warn!(query = %query, error = %e, "Description lookup failed");
                stats.lookup_failures += 1;
            }
        }
    }

    stats.enrichment_misses += 1;
    String::new()
}

fn book_from_entry(isbn: &str, entry: &ListEntry, description: String) -> Book {
    Book {
        isbn: isbn.to_string(),
        title: entry.title.trim().to_string(),
        author: entry.author.trim().to_string(),
        description,
        url: entry.amazon_product_url.trim().to_string(),
    }
}
