//! Durable high-score storage.
//!
//! A single integer in a small JSON file, read once at session start.
//! Any read failure (missing file, bad JSON) defaults to zero rather than
//! aborting the session; the engine only reports the comparison, and
//! persisting a beaten score stays the caller's decision.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// File-backed high-score store.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read the stored high score, defaulting to zero on any failure.
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str::<HighScoreFile>(&text).ok())
            .map(|file| file.high_score)
            .unwrap_or(0)
    }

    /// Persist a new high score.
    pub fn save(&self, high_score: u32) -> Result<()> {
        let text = serde_json::to_string(&HighScoreFile { high_score })?;
        fs::write(&self.path, text)
            .with_context(|| format!("writing high score to {}", self.path.display()))
    }
}
