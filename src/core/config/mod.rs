//! Settings for building a logged queue and running the demo binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::queue::DEFAULT_CAPACITY;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Slots allocated before the first growth
    pub initial_capacity: usize,

    /// Where to append the operation log as NDJSON
    pub log_path: Option<PathBuf>,

    /// Demo: threads feeding the shared queue
    pub workers: usize,

    /// Demo: items added by each worker
    pub items_per_worker: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            log_path: None,
            workers: 4,
            items_per_worker: 3,
        }
    }
}

impl QueueConfig {
    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: QueueConfig = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::debug!("Loaded queue config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(Error::Config("initial_capacity must be at least 1".to_string()));
        }
        if self.workers == 0 {
            return Err(Error::Config("workers must be at least 1".to_string()));
        }
        Ok(())
    }
}
