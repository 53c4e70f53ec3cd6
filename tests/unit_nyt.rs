// Unit tests for the NYT Books response types.
//
// Tests serde deserialization of list names and weekly snapshots, null
// handling, and identifier selection without network access.

use bookieman::nyt::models::{ListEntry, ListNamesResponse, ListResponse, ListResults};

#[test]
fn deserialize_list_names() {
    let json = r#"{
        "status": "OK",
        "num_results": 2,
        "results": [
            {
                "list_name": "Combined Print Fiction",
                "display_name": "Combined Print Fiction",
                "list_name_encoded": "combined-print-fiction",
                "oldest_published_date": "2011-02-13",
                "newest_published_date": "2013-10-13",
                "updated": "WEEKLY"
            },
            {
                "list_name": "Paperback Business Books",
                "display_name": null,
                "list_name_encoded": "paperback-business-books",
                "oldest_published_date": "2013-11-03",
                "newest_published_date": "2015-11-15",
                "updated": "MONTHLY"
            }
        ]
    }"#;
    let resp: ListNamesResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.num_results, 2);
    assert_eq!(resp.results[0].list_name_encoded, "combined-print-fiction");
    assert_eq!(resp.results[1].display_name, "");
    assert_eq!(resp.results[1].updated, "MONTHLY");
}

#[test]
fn deserialize_snapshot_sorted_by_rank() {
    let json = r#"{
        "status": "OK",
        "results": {
            "list_name": "Hardcover Fiction",
            "bestsellers_date": "2012-06-30",
            "published_date": "2012-07-15",
            "books": [
                {
                    "rank": 2,
                    "primary_isbn13": "9780399158810",
                    "primary_isbn10": "0399158812",
                    "title": "STAND UP GUY",
                    "author": "Stuart Woods",
                    "description": "Stone Barrington is drawn into a search.",
                    "amazon_product_url": "https://www.amazon.com/dp/0399158812"
                },
                {
                    "rank": 1,
                    "primary_isbn13": "9780307588364",
                    "primary_isbn10": "0307588378",
                    "title": "GONE GIRL",
                    "author": "Gillian Flynn",
                    "description": "A woman disappears on her fifth anniversary.",
                    "amazon_product_url": "https://www.amazon.com/dp/0307588378"
                }
            ]
        }
    }"#;
    let resp: ListResponse = serde_json::from_str(json).unwrap();
    let entries = resp.results.into_entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].rank, 1);
    assert_eq!(entries[0].title, "GONE GIRL");
    assert_eq!(entries[1].identifier(), Some("9780399158810"));
}

#[test]
fn empty_results_array_means_no_list() {
    let json = r#"{"status": "OK", "num_results": 0, "results": []}"#;
    let resp: ListResponse = serde_json::from_str(json).unwrap();
    assert!(resp.results.into_entries().is_empty());
}

#[test]
fn missing_results_means_no_list() {
    let json = r#"{"status": "OK"}"#;
    let resp: ListResponse = serde_json::from_str(json).unwrap();
    assert!(matches!(resp.results, ListResults::Empty(_)));
}

#[test]
fn null_fields_become_empty() {
    let json = r#"{
        "rank": 5,
        "primary_isbn13": "9781250010513",
        "primary_isbn10": null,
        "title": "E-BOOK ONLY",
        "author": null,
        "description": null,
        "amazon_product_url": null
    }"#;
    let entry: ListEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.primary_isbn10, "");
    assert_eq!(entry.author, "");
    assert_eq!(entry.identifier(), Some("9781250010513"));
    assert_eq!(entry.secondary_identifier(), None);
}

#[test]
fn identifier_falls_back_to_isbn10() {
    let entry: ListEntry = serde_json::from_str(
        r#"{"rank": 1, "primary_isbn13": "None", "primary_isbn10": "0399158812", "title": "T"}"#,
    )
    .unwrap();
    assert_eq!(entry.identifier(), Some("0399158812"));
    assert_eq!(entry.secondary_identifier(), None);
}

#[test]
fn identifier_none_when_both_missing() {
    let entry: ListEntry =
        serde_json::from_str(r#"{"rank": 1, "primary_isbn13": "", "title": "T"}"#).unwrap();
    assert_eq!(entry.identifier(), None);
}
