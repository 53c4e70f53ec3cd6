// Google Books API: description enrichment for best-seller entries.

pub mod clean;
pub mod client;
pub mod models;
pub mod traits;
