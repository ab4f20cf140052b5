//! Reading playlist rows from the CSV export.

use crate::error::{GenerateError, GenerateResult};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

pub const COLUMN_BATCH: &str = "Batch";
pub const COLUMN_CATEGORY: &str = "Category";
pub const COLUMN_TEXT: &str = "Text";
pub const COLUMN_VIDEO_COUNT: &str = "Video Count";
pub const COLUMN_PLAYLIST: &str = "Playlist";
pub const COLUMN_IS_ONGOING: &str = "Is Ongoing";
pub const COLUMN_LATEST_LINK: &str = "Latest Link";

pub const REQUIRED_COLUMNS: [&str; 7] = [
    COLUMN_BATCH,
    COLUMN_CATEGORY,
    COLUMN_TEXT,
    COLUMN_VIDEO_COUNT,
    COLUMN_PLAYLIST,
    COLUMN_IS_ONGOING,
    COLUMN_LATEST_LINK,
];

/// One input row, trimmed and typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub batch: String,
    pub category: String,
    pub text: String,
    pub video_count: u64,
    pub playlist_id: String,
    pub is_ongoing: bool,
    pub latest_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Batch")]
    batch: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Text")]
    text: String,
    #[serde(rename = "Video Count")]
    video_count: String,
    #[serde(rename = "Playlist")]
    playlist: String,
    #[serde(rename = "Is Ongoing")]
    is_ongoing: String,
    #[serde(rename = "Latest Link")]
    latest_link: String,
}

impl RawRecord {
    fn into_record(self, line: u64) -> GenerateResult<Record> {
        let latest_link = self.latest_link.trim();
        Ok(Record {
            batch: self.batch.trim().to_string(),
            category: self.category.trim().to_string(),
            text: self.text.trim().to_string(),
            video_count: parse_video_count(&self.video_count, line)?,
            playlist_id: self.playlist.trim().to_string(),
            is_ongoing: parse_ongoing(&self.is_ongoing),
            latest_link: (!latest_link.is_empty()).then(|| latest_link.to_string()),
        })
    }
}

/// Empty or whitespace-only counts are zero, anything else must be a
/// non-negative integer.
pub fn parse_video_count(value: &str, line: u64) -> GenerateResult<u64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| GenerateError::InvalidVideoCount {
            line,
            value: value.to_string(),
        })
}

pub fn parse_ongoing(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("yes")
}

fn csv_error(err: csv::Error, fallback_line: u64) -> GenerateError {
    let line = err
        .position()
        .map(|p| p.line())
        .unwrap_or(fallback_line);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => GenerateError::Io(io_err),
        _ => GenerateError::MalformedRow { line, reason },
    }
}

/// Parses every row of a CSV stream, in order.
///
/// Fails on the first bad row; nothing is returned for the rows before it.
pub fn read_records<R: Read>(reader: R) -> GenerateResult<Vec<Record>> {
    // Rows may run longer than the header (trailing commas from spreadsheet
    // exports); short rows fail below when a required field is missing.
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|e| csv_error(e, 1))?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(GenerateError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result.map_err(|e| csv_error(e, 0))?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawRecord = row
            .deserialize(Some(&headers))
            .map_err(|e| GenerateError::MalformedRow {
                line,
                reason: e.to_string(),
            })?;
        records.push(raw.into_record(line)?);
    }
    debug!("Parsed {} records", records.len());
    Ok(records)
}

pub fn load_records(path: &Path) -> GenerateResult<Vec<Record>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => GenerateError::InputNotFound(path.to_path_buf()),
        _ => GenerateError::Io(e),
    })?;
    read_records(io::BufReader::new(file))
}
