use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub history: HistoryConfig,
    pub feed: FeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// JSON file holding the graded prediction history.
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// How many of the sample fixtures to analyse per run.
    pub fixture_count: usize,
    /// When set, finished matches get simulated final scores and the
    /// history is graded at the end of the run.
    pub simulate_results: bool,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default values
            .set_default("history.path", "tipster-history.json")?
            .set_default("feed.fixture_count", 4)?
            .set_default("feed.simulate_results", true)?
            // Add in settings from configuration file
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add in settings from environment variables
            .add_source(Environment::with_prefix("TIPSTER").separator("_"))
            .build()?;

        config.try_deserialize()
    }

    pub fn history_path(&self) -> &str {
        &self.history.path
    }
}
