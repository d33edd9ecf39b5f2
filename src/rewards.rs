// src/rewards.rs
//! Persisted reward points and the level derived from them.
//!
//! The counter increments by one per completed analysis run. Levels are a
//! pure function of the counter; nothing here feeds back into analysis.

use crate::error::{Result, SenseiError};
use crate::store::atomic_write;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const POINTS_FILE: &str = "points.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct PointsFile {
    total: u64,
}

pub struct PointsStore {
    path: PathBuf,
}

impl PointsStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(POINTS_FILE))
    }

    /// Current total. A missing file reads as zero.
    ///
    /// # Errors
    /// Returns error if the store file cannot be read or parsed.
    pub fn points(&self) -> Result<u64> {
        Ok(self.load()?.total)
    }

    /// Increments the total by one and returns the new value.
    ///
    /// # Errors
    /// Returns error if the store file cannot be read or written.
    pub fn add_point(&self) -> Result<u64> {
        let mut file = self.load()?;
        file.total += 1;
        self.save(&file)?;
        Ok(file.total)
    }

    /// Resets the total to zero.
    ///
    /// # Errors
    /// Returns error if the store file cannot be written.
    pub fn reset(&self) -> Result<()> {
        self.save(&PointsFile::default())
    }

    fn load(&self) -> Result<PointsFile> {
        if !self.path.exists() {
            return Ok(PointsFile::default());
        }
        let content =
            fs::read_to_string(&self.path).map_err(|e| SenseiError::io(e, &self.path))?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, file: &PointsFile) -> Result<()> {
        let content = serde_json::to_string_pretty(file)?;
        atomic_write(&self.path, &content)
    }
}

/// Named tier for a points total. Thresholds are fixed at 5, 15, and 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
    Beginner,
    Learner,
    Debugger,
    Sensei,
}

impl Level {
    #[must_use]
    pub fn for_points(points: u64) -> Self {
        match points {
            p if p >= 30 => Self::Sensei,
            p if p >= 15 => Self::Debugger,
            p if p >= 5 => Self::Learner,
            _ => Self::Beginner,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Beginner => "Beginner",
            Self::Learner => "Learner",
            Self::Debugger => "Debugger",
            Self::Sensei => "Sensei",
        })
    }
}
