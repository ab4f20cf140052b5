//! End-to-end generation run: CSV in, JSON document out.

use crate::catalog::{CatalogBuilder, CatalogSummary, Document};
use crate::config::AppConfig;
use crate::error::GenerateResult;
use crate::output::write_document;
use crate::records::{load_records, Record};
use tracing::info;

/// Today's local date in the `last_updated` format.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

pub fn build_document(records: &[Record], config: &AppConfig, last_updated: String) -> Document {
    let mut builder = CatalogBuilder::new();
    builder.add_records(records);
    builder.finish(config.site_info(last_updated), &config.publishing)
}

/// Reads the configured input, builds the document and writes it out.
///
/// Nothing is written unless every row was parsed.
pub fn generate(config: &AppConfig, last_updated: String) -> GenerateResult<CatalogSummary> {
    info!("Reading records from {:?}...", config.input_path);
    let records = load_records(&config.input_path)?;
    info!("Loaded {} records", records.len());

    let document = build_document(&records, config, last_updated);
    let summary = CatalogSummary::of(&document);

    info!("Writing catalog to {:?}...", config.output_path);
    write_document(&config.output_path, &document)?;
    info!("Generated {} successfully!", config.output_path.display());

    Ok(summary)
}
