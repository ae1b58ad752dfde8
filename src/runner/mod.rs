//! Batch Runner Module.
//!
//! Evaluates many kata requests at once on a rayon thread pool and collects
//! the answers into a JSON report.
//!
//! # Usage
//!
//! 1. Describe each call as a [`KataRequest`] (usually loaded from JSON)
//! 2. Create a [`BatchRunner`] with a [`RunnerConfig`]
//! 3. Call `run()` to get a [`BatchReport`] in input order
//!
//! # Example
//!
//! ```
//! use kata_solver::runner::{BatchRunner, KataRequest, RunnerConfig};
//!
//! let runner = BatchRunner::new(RunnerConfig::quiet()).unwrap();
//! let report = runner
//!     .run(&[KataRequest::FizzBuzz { num: 15 }, KataRequest::DigitalRoot { n: 99 }])
//!     .unwrap();
//! assert_eq!(report.succeeded, 2);
//! ```

pub mod batch;
pub mod config;
pub mod request;

pub use batch::{load_requests, BatchReport, BatchRunner, KataOutcome};
pub use config::{ConfigError, RunnerConfig};
pub use request::KataRequest;
