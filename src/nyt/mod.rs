// NYT Books API: list names and weekly best-seller snapshots.
//
// Each submodule handles one concern: the HTTP client, the response types,
// and the ListSource trait the timeline pipeline depends on.

pub mod client;
pub mod models;
pub mod traits;
