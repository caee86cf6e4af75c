//! Ids whose reminder has already fired.
//!
//! Kept beside the events file so the week view can flag them and a
//! restarted `notify` loop doesn't fire them again.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::write_atomic;
use crate::error::DaybookResult;

const NOTIFIED_FILE: &str = "notified.txt";

/// One id per line, sorted.
#[derive(Debug, Clone)]
pub struct NotifiedFile {
    path: PathBuf,
}

impl NotifiedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        NotifiedFile { path: path.into() }
    }

    /// The notified-ids file living in the same directory as `events_file`.
    pub fn beside(events_file: &Path) -> Self {
        Self::new(events_file.with_file_name(NOTIFIED_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file reads as nothing notified.
    pub fn load(&self) -> DaybookResult<HashSet<String>> {
        if !self.path.exists() {
            return Ok(HashSet::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    pub fn save(&self, ids: &HashSet<String>) -> DaybookResult<()> {
        // Sort for deterministic output
        let mut sorted: Vec<&str> = ids.iter().map(String::as_str).collect();
        sorted.sort_unstable();

        write_atomic(&self.path, &sorted.join("\n"))?;
        tracing::debug!(count = ids.len(), path = %self.path.display(), "saved notified ids");
        Ok(())
    }
}
