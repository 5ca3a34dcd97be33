//! Persistent player data
//!
//! A single tiny JSON file holding the high score and the mute preference,
//! read once at startup and rewritten whenever either changes. A missing or
//! unreadable file simply means a fresh slate.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Contents of the save file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub high_score: u32,
    pub muted: bool,
}

/// Handle to the save file, caching its current contents
pub struct SaveFile {
    path: PathBuf,
    data: SaveData,
}

impl SaveFile {
    /// Open the save at `path`, falling back to defaults if the file is
    /// missing or does not parse
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self { path, data }
    }

    pub fn data(&self) -> &SaveData {
        &self.data
    }

    pub fn high_score(&self) -> u32 {
        self.data.high_score
    }

    pub fn muted(&self) -> bool {
        self.data.muted
    }

    /// Record a new score; persists and returns true only if it beats the
    /// stored high score
    pub fn record_score(&mut self, score: u32) -> Result<bool> {
        if score <= self.data.high_score {
            return Ok(false);
        }
        self.data.high_score = score;
        self.write()?;
        Ok(true)
    }

    /// Persist a new mute preference
    pub fn set_muted(&mut self, muted: bool) -> Result<()> {
        if self.data.muted != muted {
            self.data.muted = muted;
            self.write()?;
        }
        Ok(())
    }

    fn write(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.data)
            .context("Failed to serialize save data")?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write save file {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_defaults() {
        let dir = TempDir::new().unwrap();
        let save = SaveFile::load(dir.path().join("save.json"));
        assert_eq!(save.high_score(), 0);
        assert!(!save.muted());
    }

    #[test]
    fn test_corrupt_file_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, "not json").unwrap();

        let save = SaveFile::load(&path);
        assert_eq!(save.data(), &SaveData::default());
    }

    #[test]
    fn test_record_score_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");

        let mut save = SaveFile::load(&path);
        assert!(save.record_score(7).unwrap());
        assert!(!save.record_score(5).unwrap());
        assert!(save.record_score(12).unwrap());

        let reloaded = SaveFile::load(&path);
        assert_eq!(reloaded.high_score(), 12);
    }

    #[test]
    fn test_mute_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");

        let mut save = SaveFile::load(&path);
        save.set_muted(true).unwrap();

        let reloaded = SaveFile::load(&path);
        assert!(reloaded.muted());
        assert_eq!(reloaded.high_score(), 0);
    }
}
