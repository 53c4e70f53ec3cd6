// bookieman: best-seller timelines and description lexicons
//
// This is the library root. Each module corresponds to one stage of the
// pipeline: list names -> weekly snapshots -> enrichment -> cache -> lexicon.

pub mod config;
pub mod db;
pub mod google_books;
pub mod lexicon;
pub mod nyt;
pub mod output;
pub mod pipeline;
pub mod status;
pub mod throttle;
pub mod weeks;
