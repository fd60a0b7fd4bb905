//! Tree Configuration
//!
//! Training options for a `DecisionTree`, with JSON load and save.
use crate::errors::TreeError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_num_threads() -> Option<usize> {
    None
}
fn default_log_splits() -> bool {
    false
}

/// Configuration used while inducing a `DecisionTree`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Threads used to evaluate attribute gains. `None` trains on the calling thread.
    #[serde(default = "default_num_threads")]
    pub num_threads: Option<usize>,
    /// Log every split and a training summary at info level.
    #[serde(default = "default_log_splits")]
    pub log_splits: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            num_threads: default_num_threads(),
            log_splits: default_log_splits(),
        }
    }
}

impl TreeConfig {
    /// Set the number of threads.
    /// * `num_threads` - Threads used to evaluate attribute gains during training.
    pub fn set_num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Set whether splits are logged.
    pub fn set_log_splits(mut self, log_splits: bool) -> Self {
        self.log_splits = log_splits;
        self
    }

    pub fn validate(&self) -> Result<(), TreeError> {
        if self.num_threads == Some(0) {
            return Err(TreeError::InvalidParameter(
                "num_threads".to_string(),
                "a positive number of threads or None".to_string(),
                "0".to_string(),
            ));
        }
        Ok(())
    }

    /// Dump the configuration as a json object.
    pub fn json_dump(&self) -> Result<String, TreeError> {
        serde_json::to_string(self).map_err(|e| TreeError::UnableToWrite(e.to_string()))
    }

    /// Load a configuration from a json string and validate it.
    pub fn from_json(json_str: &str) -> Result<Self, TreeError> {
        let cfg = serde_json::from_str::<Self>(json_str).map_err(|e| TreeError::UnableToRead(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Save the configuration as a json object to a file.
    ///
    /// * `path` - Path to save the configuration.
    pub fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), TreeError> {
        fs::write(path, self.json_dump()?).map_err(|e| TreeError::UnableToWrite(e.to_string()))
    }

    /// Load a configuration from a path to a json object.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, TreeError> {
        let json_str = fs::read_to_string(path).map_err(|e| TreeError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}
