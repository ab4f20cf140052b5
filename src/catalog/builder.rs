//! Folds playlist records into the nested batch → category → text tree.

use super::keys::normalize_key;
use super::lookup::{
    batch_info, category_info, ongoing_category_info, NodeInfo, ONGOING_CATEGORY_KEY,
};
use super::models::{
    study_description, Batch, Category, Document, PlaylistEntry, PublishingHints, SiteInfo, Text,
};
use super::summary::CatalogSummary;
use crate::records::Record;
use indexmap::IndexMap;
use tracing::debug;

/// Which branch of the fan-out a playlist copy is stored under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    Natural,
    Ongoing,
}

struct TargetCategory {
    key: String,
    info: NodeInfo,
    placement: Placement,
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    batches: IndexMap<String, Batch>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one record: a playlist entry under its natural category and, for
    /// ongoing records, a second entry under the ongoing category.
    ///
    /// Existing nodes are reused as they are; only the first record that
    /// creates a node decides its name and description.
    pub fn add_record(&mut self, record: &Record) {
        let batch_key = normalize_key(&record.batch);
        let batch = self.batches.entry(batch_key).or_insert_with_key(|key| {
            let info = batch_info(&record.batch);
            debug!("New batch {} ({})", key, info.name);
            Batch::new(info.name, info.description)
        });

        let text_key = normalize_key(&record.text);
        for target in target_categories(record) {
            let category = batch
                .categories
                .entry(target.key)
                .or_insert_with_key(|key| {
                    debug!("New category {} ({})", key, target.info.name);
                    Category::new(target.info.name, target.info.description)
                });

            let text = category
                .texts
                .entry(text_key.clone())
                .or_insert_with(|| Text::new(&record.text));

            text.playlists.push(playlist_entry(record, target.placement));
        }
    }

    pub fn add_records<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            self.add_record(record);
        }
    }

    pub fn batches(&self) -> &IndexMap<String, Batch> {
        &self.batches
    }

    /// Completes the document, computing the aggregate metadata.
    pub fn finish(self, site_info: SiteInfo, hints: &PublishingHints) -> Document {
        let metadata = CatalogSummary::from_batches(&self.batches).to_metadata(hints);
        Document {
            site_info,
            batches: self.batches,
            metadata,
        }
    }
}

fn target_categories(record: &Record) -> Vec<TargetCategory> {
    let mut targets = vec![TargetCategory {
        key: normalize_key(&record.category),
        info: category_info(&record.category),
        placement: Placement::Natural,
    }];
    if record.is_ongoing {
        targets.push(TargetCategory {
            key: ONGOING_CATEGORY_KEY.to_string(),
            info: ongoing_category_info(),
            placement: Placement::Ongoing,
        });
    }
    targets
}

fn playlist_entry(record: &Record, placement: Placement) -> PlaylistEntry {
    let latest_video_id = match placement {
        Placement::Ongoing => record.latest_link.clone(),
        Placement::Natural => None,
    };
    PlaylistEntry {
        name: record.text.clone(),
        playlist_id: record.playlist_id.clone(),
        description: study_description(&record.text),
        video_count: record.video_count,
        latest_video_id,
    }
}
