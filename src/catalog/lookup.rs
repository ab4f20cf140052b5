//! Curated display names and descriptions for known batches and categories.

/// Key, name and description of the synthetic category that collects
/// every ongoing playlist.
pub const ONGOING_CATEGORY_KEY: &str = "ongoing";
pub const ONGOING_CATEGORY_NAME: &str = "Ongoing";
pub const ONGOING_CATEGORY_DESCRIPTION: &str = "Current studies across different texts";

/// Display name and description attached to a batch or category node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeInfo {
    pub name: String,
    pub description: String,
}

impl NodeInfo {
    fn curated(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn fallback(raw_name: &str) -> Self {
        Self {
            name: raw_name.to_string(),
            description: String::new(),
        }
    }
}

pub fn batch_info(batch_name: &str) -> NodeInfo {
    match batch_name {
        "Dhanyosi" => NodeInfo::curated("Dhanyosi Batch", "2021-2025"),
        "Tattvamasi" => NodeInfo::curated("Tattvamasi Batch", "Coimbatore Batch"),
        "Jignasu" => NodeInfo::curated("Jignasu Batch", "2024-2028"),
        "Miscellaneous" => NodeInfo::curated(
            "Miscellaneous",
            "Special programs and general spiritual content",
        ),
        other => NodeInfo::fallback(other),
    }
}

pub fn category_info(category_name: &str) -> NodeInfo {
    match category_name {
        "Upanishad" => NodeInfo::curated(
            "Upanishads",
            "Ancient wisdom texts - the culmination of Vedic knowledge",
        ),
        "Bhagawad Gita" => NodeInfo::curated(
            "Bhagavad Gita",
            "The song of the Lord - practical spirituality",
        ),
        "Prakaranam" => NodeInfo::curated("Prakaranam", "Introductory and foundational texts"),
        "Brahmasutram" => NodeInfo::curated(
            "Brahmasutram",
            "The aphorisms of Brahman - systematic philosophy",
        ),
        "Satsang" => NodeInfo::curated("Satsang", "Question and answer sessions, discussions"),
        other => NodeInfo::fallback(other),
    }
}

pub fn ongoing_category_info() -> NodeInfo {
    NodeInfo::curated(ONGOING_CATEGORY_NAME, ONGOING_CATEGORY_DESCRIPTION)
}
