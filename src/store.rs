//! File-backed prediction history with get/set-all semantics.
//!
//! The history is a single JSON array of `PredictionResult` records, one per
//! fixture. Writes replace the whole file; an upsert keyed on the fixture id
//! keeps one record per match.

use std::fs;
use std::path::{Path, PathBuf};

use tipster_models::{BetStatus, FinalScore, PredictionResult, Result, TipsterError};
use tracing::debug;

pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads the full history. A missing file is an empty history, not an
    /// error.
    pub fn load(&self) -> Result<Vec<PredictionResult>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        let history = serde_json::from_str(&data)?;
        Ok(history)
    }

    pub fn save_all(&self, history: &[PredictionResult]) -> Result<()> {
        let data = serde_json::to_string_pretty(history)?;
        fs::write(&self.path, data)?;
        debug!(path = %self.path.display(), records = history.len(), "history saved");
        Ok(())
    }

    /// Inserts the record, or replaces an existing record for the same
    /// fixture.
    pub fn upsert(&self, record: PredictionResult) -> Result<()> {
        let mut history = self.load()?;
        match history.iter_mut().find(|r| r.fixture_id == record.fixture_id) {
            Some(existing) => *existing = record,
            None => history.push(record),
        }
        self.save_all(&history)
    }

    /// Settles the record for a finished fixture with its final score and
    /// graded status.
    pub fn settle(&self, fixture_id: u64, status: BetStatus, score: FinalScore) -> Result<()> {
        let mut history = self.load()?;
        let record = history
            .iter_mut()
            .find(|r| r.fixture_id == fixture_id)
            .ok_or(TipsterError::FixtureNotFound { fixture_id })?;

        record.status = status;
        record.result = Some(score);
        self.save_all(&history)
    }
}
