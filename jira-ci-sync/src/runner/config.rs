//! Runner configuration.

use crate::config::DEFAULT_OPTIONS_PATH;
use std::path::{Path, PathBuf};

/// Configuration for a runner.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the optional options file.
    options_path: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_OPTIONS_PATH))
    }
}

impl RunnerConfig {
    /// Creates a configuration reading options from `options_path`.
    pub fn new(options_path: PathBuf) -> Self {
        Self { options_path }
    }

    /// Returns the options file path.
    pub fn options_path(&self) -> &Path {
        &self.options_path
    }
}
