mod builder;
mod keys;
mod lookup;
mod models;
mod summary;

pub use builder::CatalogBuilder;
pub use keys::normalize_key;
pub use lookup::{
    batch_info, category_info, ongoing_category_info, NodeInfo, ONGOING_CATEGORY_KEY,
};
pub use models::{
    Batch, CatalogMetadata, Category, Document, PlaylistEntry, PublishingHints, SiteInfo, Text,
};
pub use summary::CatalogSummary;
