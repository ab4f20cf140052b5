//! Shared constants for end-to-end tests
//!
//! When the sample export changes, update only this file.

pub const CSV_HEADER: &str = "Batch,Category,Text,Video Count,Playlist,Is Ongoing,Latest Link";

/// A small export covering every fan-out case:
/// - ongoing rows with and without a latest link
/// - a category reused across batches
/// - an unknown batch and category
/// - an empty video count
/// - the same row twice
pub const SAMPLE_ROWS: &[&str] = &[
    "Tattvamasi,Upanishad,Katha Upanishad,12,PL123,Yes,VID99",
    "Tattvamasi,Bhagawad Gita,Gita Chapter 2,30,PLGITA2,No,",
    "Tattvamasi,Upanishad,Kena Upanishad,,PLKENA,no,",
    "Dhanyosi,Prakaranam,Tattva Bodha,25,PLTB,YES,",
    "Dhanyosi,Upanishad,Mundaka Upanishad,40,PLMUN,No,",
    "Jignasu,Satsang,Q&A Sessions,8,PLQA,No,",
    "Jignasu,Satsang,Q&A Sessions,8,PLQA,No,",
    "Vivekananda,Stotram,Śivānanda Laharī,5,PLSL,Yes,VIDSL",
];

pub const SAMPLE_BATCHES: usize = 4;
// tattvamasi: upanishad, ongoing, bhagawad_gita
// dhanyosi: prakaranam, ongoing, upanishad
// jignasu: satsang
// vivekananda: stotram, ongoing
pub const SAMPLE_CATEGORIES: usize = 9;
pub const SAMPLE_TEXTS: usize = 10;
pub const SAMPLE_PLAYLISTS: usize = 11;

pub const FIXED_DATE: &str = "2026-10-19";
