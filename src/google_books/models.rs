// Serde types for the Google Books `volumes` search endpoint.

use serde::Deserialize;

use super::clean::clean_description;

/// Response from `books/v1/volumes?q=...`. `items` is absent when
/// `totalItems` is zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumesResponse {
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub volume_info: VolumeInfo,
    pub search_info: Option<SearchInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInfo {
    pub text_snippet: Option<String>,
}

impl VolumesResponse {
    /// Pick the best description across all matched volumes.
    ///
    /// A full `volumeInfo.description` on any volume beats a search
    /// snippet; among each kind, the first volume wins. Returns the
    /// cleaned text, or `None` if nothing non-empty survives cleaning.
    pub fn best_description(&self) -> Option<String> {
        let full = self
            .items
            .iter()
            .filter_map(|v| v.volume_info.description.as_deref());
        let snippets = self
            .items
            .iter()
            .filter_map(|v| v.search_info.as_ref()?.text_snippet.as_deref());

        full.chain(snippets)
            .map(clean_description)
            .find(|d| !d.is_empty())
    }
}
