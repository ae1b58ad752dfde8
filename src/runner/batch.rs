//! Parallel execution of kata request batches.

use std::fs::File;
use std::io::{BufReader, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::config::{ConfigError, RunnerConfig};
use super::request::KataRequest;
use crate::error::{KataError, Result};

/// Result of one request in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KataOutcome {
    /// Position of the request in the input.
    pub index: usize,
    /// The request's `kata` tag.
    pub kata: String,
    /// The answer, when the kata succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// The error message, when it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl KataOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Report for a whole batch, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub results: Vec<KataOutcome>,
    pub succeeded: usize,
    pub failed: usize,
    pub elapsed_seconds: f64,
}

impl BatchReport {
    fn new(results: Vec<KataOutcome>, elapsed_seconds: f64) -> Self {
        let succeeded = results.iter().filter(|r| r.is_ok()).count();
        Self {
            failed: results.len() - succeeded,
            succeeded,
            results,
            elapsed_seconds,
        }
    }

    /// Write the report as JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    pub fn print_summary(&self) {
        println!("\n========================================");
        println!("  Kata batch: {} requests", self.results.len());
        println!(
            "  Succeeded: {} | Failed: {} | {:.3}s",
            self.succeeded, self.failed, self.elapsed_seconds
        );
        println!("========================================\n");

        for outcome in &self.results {
            match (&outcome.value, &outcome.error) {
                (_, Some(error)) => println!("  #{:<4} {:<22} ERROR {}", outcome.index, outcome.kata, error),
                (Some(value), None) => println!("  #{:<4} {:<22} {}", outcome.index, outcome.kata, value),
                (None, None) => println!("  #{:<4} {:<22} -", outcome.index, outcome.kata),
            }
        }
    }
}

/// Run `kata`, turning a panic into [`KataError::Panicked`] so one request
/// cannot take down the worker pool.
fn evaluate_guarded<F>(kata: F) -> Result<Value>
where
    F: FnOnce() -> Result<Value>,
{
    panic::catch_unwind(AssertUnwindSafe(kata)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(KataError::Panicked(message))
    })
}

/// Read a JSON array of requests from `path`.
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<KataRequest>> {
    let file = File::open(path)?;
    let requests = serde_json::from_reader(BufReader::new(file))?;
    Ok(requests)
}

/// Runs batches of kata requests on a dedicated worker pool.
pub struct BatchRunner {
    config: RunnerConfig,
    pool: rayon::ThreadPool,
}

impl BatchRunner {
    /// Create a runner, validating `config` and building its thread pool.
    pub fn new(config: RunnerConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = config.num_threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder
            .build()
            .map_err(|e| ConfigError::ThreadPool(e.to_string()))?;

        log::debug!("batch runner ready with {} threads", pool.current_num_threads());
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Evaluate every request and collect the outcomes in input order.
    ///
    /// A failing or panicking request is recorded in its outcome. With
    /// `fail_fast` set, the lowest-index failure is returned as the error
    /// instead; all requests are evaluated either way.
    pub fn run(&self, requests: &[KataRequest]) -> Result<BatchReport> {
        let start = Instant::now();
        log::info!("running {} kata requests", requests.len());

        let progress = self.progress_bar(requests.len());
        let evaluated: Vec<(usize, Result<Value>)> = self.pool.install(|| {
            requests
                .par_iter()
                .enumerate()
                .map(|(index, request)| {
                    let result = evaluate_guarded(|| request.evaluate());
                    progress.inc(1);
                    (index, result)
                })
                .collect()
        });
        progress.finish_and_clear();

        let mut results = Vec::with_capacity(evaluated.len());
        for ((index, result), request) in evaluated.into_iter().zip(requests) {
            let outcome = match result {
                Ok(value) => KataOutcome {
                    index,
                    kata: request.name().to_string(),
                    value: Some(value),
                    error: None,
                },
                Err(e) if self.config.fail_fast => {
                    log::error!("request #{} ({}) failed: {}", index, request.name(), e);
                    return Err(e);
                }
                Err(e) => {
                    log::warn!("request #{} ({}) failed: {}", index, request.name(), e);
                    KataOutcome {
                        index,
                        kata: request.name().to_string(),
                        value: None,
                        error: Some(e.to_string()),
                    }
                }
            };
            results.push(outcome);
        }

        let report = BatchReport::new(results, start.elapsed().as_secs_f64());
        log::info!(
            "batch finished: {} succeeded, {} failed in {:.3}s",
            report.succeeded,
            report.failed,
            report.elapsed_seconds
        );
        Ok(report)
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len as u64);
        match ProgressStyle::with_template("{bar:40} {pos}/{len} katas ({elapsed})") {
            Ok(style) => bar.with_style(style),
            Err(e) => {
                log::debug!("default progress style: {}", e);
                bar
            }
        }
    }
}
