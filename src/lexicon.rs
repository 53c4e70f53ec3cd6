// Lexicon builder: the set of words used across cached descriptions.
//
// Descriptions are split on whitespace, lowercased and stripped of
// surrounding punctuation. Stopwords come from a plain-text file, or from
// the stop-words crate's English list when no file is given.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};
use tracing::info;

use crate::db::models::Book;
use crate::db::BookCache;

/// Sorted, deduplicated description words.
pub type Lexicon = BTreeSet<String>;

/// A set of lowercased words to exclude from the lexicon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Load stopwords from a file: one word per line, blank lines and
    /// `#` comments ignored.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopword file {}", path.display()))?;
        Ok(Self::parse(&text))
    }

    /// Parse stopword file contents.
    pub fn parse(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(normalize_word)
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// The English list shipped with the stop-words crate.
    pub fn english() -> Self {
        let words = get(LANGUAGE::English)
            .iter()
            .map(|w| normalize_word(w))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The stopwords in sorted order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

/// Lowercase a token and strip punctuation from both ends, so "Novel,"
/// and "novel" are the same word. Inner apostrophes and hyphens stay.
pub fn normalize_word(token: &str) -> String {
    token
        .to_lowercase()
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_string()
}

/// Build a lexicon from description texts.
pub fn build<'a, I>(descriptions: I, stopwords: &StopWords) -> Lexicon
where
    I: IntoIterator<Item = &'a str>,
{
    descriptions
        .into_iter()
        .flat_map(str::split_whitespace)
        .map(normalize_word)
        .filter(|w| !w.is_empty() && !stopwords.contains(w))
        .collect()
}

/// Build a lexicon from cached book records.
pub fn from_books(books: &[Book], stopwords: &StopWords) -> Lexicon {
    build(books.iter().map(|b| b.description.as_str()), stopwords)
}

/// Build a lexicon from every record in the cache.
pub async fn from_cache(cache: &dyn BookCache, stopwords: &StopWords) -> Result<Lexicon> {
    let books = cache.all_books().await?;
    let lexicon = from_books(&books, stopwords);

    info!(
        books = books.len(),
        described = books.iter().filter(|b| b.has_description()).count(),
        words = lexicon.len(),
        stopwords = stopwords.len(),
        "Built lexicon"
    );

    Ok(lexicon)
}

/// Write one word per line.
pub fn write_lexicon(path: &Path, lexicon: &Lexicon) -> Result<()> {
    write_lines(path, lexicon.iter().map(String::as_str))
}

/// Write the active stopword list as plain text, sorted.
pub fn write_stopwords(path: &Path, stopwords: &StopWords) -> Result<()> {
    write_lines(path, stopwords.sorted())
}

fn write_lines<'a, I>(path: &Path, lines: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for line in lines {
        writeln!(file, "{line}").with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}
