//! Playlist catalog generator library
//!
//! Turns the CSV export of class playlists into the nested JSON document
//! served by the static site. The modules are exposed for testing and reuse.

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod records;

// Re-export commonly used types for convenience
pub use catalog::{CatalogBuilder, CatalogSummary, Document};
pub use error::{GenerateError, GenerateResult};
pub use generator::generate;
