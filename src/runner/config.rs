//! Configuration options for the batch runner.
//!
//! This module provides the configuration struct that controls how a batch
//! of kata requests is executed and reported.

use serde::{Deserialize, Serialize};

/// Configuration for the batch runner.
///
/// # Example
/// ```
/// use kata_solver::runner::RunnerConfig;
///
/// let config = RunnerConfig::default().with_threads(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Number of worker threads.
    ///
    /// Set to `None` to use all available cores.
    pub num_threads: Option<usize>,

    /// Draw a progress bar while the batch runs.
    pub show_progress: bool,

    /// Pretty-print the JSON report.
    pub pretty: bool,

    /// Return the lowest-index failure as the run's error instead of
    /// recording it in the report. Every request is still evaluated.
    pub fail_fast: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            show_progress: true,
            pretty: true,
            fail_fast: false,
        }
    }
}

impl RunnerConfig {
    /// Create a new RunnerConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for tests and embedding: one thread, no progress bar.
    pub fn quiet() -> Self {
        Self {
            num_threads: Some(1),
            show_progress: false,
            ..Default::default()
        }
    }

    /// Builder method: set number of threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Builder method: set whether to draw a progress bar.
    pub fn with_progress(mut self, enable: bool) -> Self {
        self.show_progress = enable;
        self
    }

    /// Builder method: set whether the report is pretty-printed.
    pub fn with_pretty(mut self, enable: bool) -> Self {
        self.pretty = enable;
        self
    }

    /// Builder method: set whether a failure becomes the run's error.
    pub fn with_fail_fast(mut self, enable: bool) -> Self {
        self.fail_fast = enable;
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_threads == Some(0) {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(())
    }
}

/// Errors that can occur when validating runner configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A thread pool needs at least one thread.
    ZeroThreads,
    /// The worker pool could not be created.
    ThreadPool(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroThreads => write!(f, "Thread count must be at least 1"),
            ConfigError::ThreadPool(reason) => write!(f, "Could not build thread pool: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunnerConfig::default();
        assert_eq!(config.num_threads, None);
        assert!(config.show_progress);
        assert!(!config.fail_fast);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = RunnerConfig::new()
            .with_threads(4)
            .with_progress(false)
            .with_pretty(false)
            .with_fail_fast(true);
        assert_eq!(config.num_threads, Some(4));
        assert!(!config.show_progress);
        assert!(!config.pretty);
        assert!(config.fail_fast);
    }

    #[test]
    fn test_zero_threads_rejected() {
        let config = RunnerConfig::default().with_threads(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroThreads));
    }

    #[test]
    fn test_partial_json() {
        let config: RunnerConfig = serde_json::from_str(r#"{"fail_fast": true}"#).unwrap();
        assert!(config.fail_fast);
        assert!(config.show_progress);
        assert_eq!(config.num_threads, None);
    }
}
