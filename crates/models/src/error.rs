use thiserror::Error;

#[derive(Error, Debug)]
pub enum TipsterError {
    #[error("Fixture not found in history: {fixture_id}")]
    FixtureNotFound { fixture_id: u64 },

    #[error("History file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TipsterError>;
