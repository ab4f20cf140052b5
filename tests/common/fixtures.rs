//! Temporary workspaces holding a `Classes.csv` export.

use super::constants::*;
use anyhow::Result;
use playlist_catalog::catalog::Document;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub struct TestWorkspace {
    pub dir: TempDir,
}

impl TestWorkspace {
    /// Creates an empty workspace directory.
    pub fn empty() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Creates a workspace whose `Classes.csv` holds the sample export.
    pub fn with_sample() -> Result<Self> {
        let workspace = Self::empty()?;
        write_classes_csv(&workspace.input_path(), SAMPLE_ROWS)?;
        Ok(workspace)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn input_path(&self) -> PathBuf {
        self.dir.path().join("Classes.csv")
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("data.json")
    }

    pub fn read_output(&self) -> Result<Document> {
        let content = std::fs::read_to_string(self.output_path())?;
        Ok(serde_json::from_str(&content)?)
    }
}

pub fn write_classes_csv(path: &Path, rows: &[&str]) -> Result<()> {
    let mut content = String::from(CSV_HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Runs the `catalog-gen` binary inside `dir` with the given arguments.
pub fn run_generator(dir: &Path, args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_catalog-gen"))
        .args(args)
        .current_dir(dir)
        .env_remove("LOG_LEVEL")
        .output()?)
}

/// Number of playlist entries holding `playlist_id`, per category key.
pub fn count_entries(document: &Document, playlist_id: &str) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for batch in document.batches.values() {
        for (category_key, category) in &batch.categories {
            let n = category
                .texts
                .values()
                .flat_map(|t| t.playlists.iter())
                .filter(|p| p.playlist_id == playlist_id)
                .count();
            if n > 0 {
                counts.push((category_key.clone(), n));
            }
        }
    }
    counts
}
