//! Shape of the generated site document.
//!
//! Field declaration order is the JSON key order, and every mapping keeps
//! first-insertion order so the output follows the order of the input rows.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// Document
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteInfo {
    pub title: String,
    pub description: String,
    /// Generation date, `YYYY-MM-DD`.
    pub last_updated: String,
}

/// Aggregate counts plus the static hints the site uses when refreshing
/// playlist data from the video platform.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogMetadata {
    pub total_batches: usize,
    pub total_categories: usize,
    pub total_texts: usize,
    pub total_playlists: usize,
    pub youtube_api_version: String,
    pub cache_duration: u64,
    pub update_frequency: String,
}

/// The non-count part of [`CatalogMetadata`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishingHints {
    pub youtube_api_version: String,
    pub cache_duration: u64,
    pub update_frequency: String,
}

impl Default for PublishingHints {
    fn default() -> Self {
        Self {
            youtube_api_version: "v3".to_string(),
            cache_duration: 3600,
            update_frequency: "daily".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub site_info: SiteInfo,
    pub batches: IndexMap<String, Batch>,
    pub metadata: CatalogMetadata,
}

// =============================================================================
// Nested nodes
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Batch {
    pub name: String,
    pub description: String,
    pub categories: IndexMap<String, Category>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub description: String,
    pub texts: IndexMap<String, Text>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Text {
    pub name: String,
    pub description: String,
    pub playlists: Vec<PlaylistEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub name: String,
    pub playlist_id: String,
    pub description: String,
    pub video_count: u64,
    /// Only set on the copy stored under the ongoing category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_video_id: Option<String>,
}

impl Batch {
    pub fn new(name: String, description: String) -> Self {
        Self {
            name,
            description,
            categories: IndexMap::new(),
        }
    }
}

impl Category {
    pub fn new(name: String, description: String) -> Self {
        Self {
            name,
            description,
            texts: IndexMap::new(),
        }
    }
}

impl Text {
    pub fn new(text_name: &str) -> Self {
        Self {
            name: text_name.to_string(),
            description: study_description(text_name),
            playlists: Vec::new(),
        }
    }
}

pub(crate) fn study_description(text_name: &str) -> String {
    format!("{} study", text_name)
}
