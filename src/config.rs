//! Runtime configuration resolved from the command line.

use std::path::PathBuf;

use crate::storage::DEFAULT_DATA_FILE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Enrollment file, relative to the working directory unless absolute
    pub data_file: PathBuf,
    pub verbose: bool,
}

impl AppConfig {
    pub fn new(data_file: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            data_file: data_file.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            verbose,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(None, false)
    }
}
