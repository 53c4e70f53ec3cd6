// Serde types for the NYT Books v3 API.
//
// The API is loose about nulls (ISBN-10 is often null for e-books) and
// returns `"results": []` instead of an object when no list was published
// for the requested date, so most fields default rather than fail.

use serde::{Deserialize, Deserializer};

/// Response from `lists/names.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListNamesResponse {
    #[serde(default)]
    pub num_results: u32,
    #[serde(default)]
    pub results: Vec<ListName>,
}

/// One available best-seller list.
#[derive(Debug, Clone, Deserialize)]
pub struct ListName {
    pub list_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub display_name: String,
    /// The identifier used in snapshot URLs (e.g. `combined-print-and-e-book-fiction`)
    pub list_name_encoded: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub oldest_published_date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub newest_published_date: String,
    /// `WEEKLY` or `MONTHLY`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub updated: String,
}

/// Response from `lists/{date}/{list}.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub results: ListResults,
}

/// The `results` field: a snapshot object, or an empty array when the
/// list didn't exist on that date.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResults {
    Snapshot(ListSnapshot),
    Empty(Vec<serde_json::Value>),
}

impl Default for ListResults {
    fn default() -> Self {
        ListResults::Empty(Vec::new())
    }
}

impl ListResults {
    /// Take the ranked entries out of the response, sorted by rank.
    pub fn into_entries(self) -> Vec<ListEntry> {
        match self {
            ListResults::Snapshot(snapshot) => {
                let mut books = snapshot.books;
                books.sort_by_key(|b| b.rank);
                books
            }
            ListResults::Empty(_) => Vec::new(),
        }
    }
}

/// A single week's list.
#[derive(Debug, Clone, Deserialize)]
pub struct ListSnapshot {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub list_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bestsellers_date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub published_date: String,
    #[serde(default)]
    pub books: Vec<ListEntry>,
}

/// One ranked row of a weekly list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListEntry {
    pub rank: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub primary_isbn13: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub primary_isbn10: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    /// NYT's own one-line blurb, used when enrichment is off
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub amazon_product_url: String,
}

impl ListEntry {
    /// The identifier this entry is cached under: ISBN-13, falling back
    /// to ISBN-10. `None` when the row carries neither.
    pub fn identifier(&self) -> Option<&str> {
        [self.primary_isbn13.as_str(), self.primary_isbn10.as_str()]
            .into_iter()
            .map(str::trim)
            .find(|id| !id.is_empty() && *id != "None")
    }

    /// The secondary identifier, if it's distinct from the one used as key.
    pub fn secondary_identifier(&self) -> Option<&str> {
        let isbn10 = self.primary_isbn10.trim();
        if isbn10.is_empty() || isbn10 == "None" || Some(isbn10) == self.identifier() {
            None
        } else {
            Some(isbn10)
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
