use crate::error::ScenarioError;
use crate::scenario::TradeScenario;
use crate::ScenarioSource;
use std::path::PathBuf;

/// Loads a scenario from a JSON file on disk.
///
/// The file holds a serialized `TradeScenario`, which makes it trivial to
/// capture a generated scenario, tweak it by hand, and re-run the engines
/// against it.
#[derive(Debug, Clone)]
pub struct FileScenarioSource {
    path: PathBuf,
}

impl FileScenarioSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ScenarioSource for FileScenarioSource {
    fn scenario(&self) -> Result<TradeScenario, ScenarioError> {
        let raw = std::fs::read_to_string(&self.path)?;
        let scenario = serde_json::from_str(&raw)?;
        Ok(scenario)
    }
}
