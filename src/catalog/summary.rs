//! Aggregate node counts of a built catalog.

use super::models::{Batch, CatalogMetadata, Document, PublishingHints};
use indexmap::IndexMap;

/// Node counts of a catalog.
///
/// Categories are counted once per batch they appear in, texts once per
/// category, and every playlist entry is counted, duplicates included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total_batches: usize,
    pub total_categories: usize,
    pub total_texts: usize,
    pub total_playlists: usize,
}

impl CatalogSummary {
    pub fn from_batches(batches: &IndexMap<String, Batch>) -> Self {
        let mut summary = CatalogSummary {
            total_batches: batches.len(),
            ..Default::default()
        };
        for batch in batches.values() {
            summary.total_categories += batch.categories.len();
            for category in batch.categories.values() {
                summary.total_texts += category.texts.len();
                summary.total_playlists += category
                    .texts
                    .values()
                    .map(|text| text.playlists.len())
                    .sum::<usize>();
            }
        }
        summary
    }

    pub fn of(document: &Document) -> Self {
        Self::from_batches(&document.batches)
    }

    pub fn to_metadata(&self, hints: &PublishingHints) -> CatalogMetadata {
        CatalogMetadata {
            total_batches: self.total_batches,
            total_categories: self.total_categories,
            total_texts: self.total_texts,
            total_playlists: self.total_playlists,
            youtube_api_version: hints.youtube_api_version.clone(),
            cache_duration: hints.cache_duration,
            update_frequency: hints.update_frequency.clone(),
        }
    }

    /// The four summary lines printed after a successful run.
    pub fn lines(&self) -> [String; 4] {
        [
            format!("Total batches: {}", self.total_batches),
            format!("Total categories: {}", self.total_categories),
            format!("Total texts: {}", self.total_texts),
            format!("Total playlists: {}", self.total_playlists),
        ]
    }
}
