//! # Kata Solver
//!
//! A catalogue of small programming katas with a parallel batch runner.
//!
//! ## Features
//!
//! - **Conditions and loops**: FizzBuzz, factorials, Luhn checks, geometry, "time ago" strings
//! - **Puzzles**: compass rose, brace expansion, zig-zag matrices, dominoes, ranges
//! - **Parsing**: bank OCR, word wrapping, poker hands, ASCII rectangles
//! - **Search**: snaking word search, permutations, stock profit, URL packing
//! - **Batch runner**: evaluate JSON requests in parallel and save a report
//!
//! Lazy results (brace expansion, wrapping, permutations, figure rectangles)
//! are plain [`Iterator`]s, so callers can stop early.
//!
//! ## Quick Start
//!
//! ```
//! use kata_solver::parsing::{get_poker_hand_rank, PokerRank};
//! use kata_solver::puzzles::expand_braces;
//!
//! let rank = get_poker_hand_rank(&["4♥", "5♥", "6♥", "7♥", "8♥"]).unwrap();
//! assert_eq!(rank, PokerRank::StraightFlush);
//!
//! let words: Vec<String> = expand_braces("~/{Downloads,Pictures}/*.{jpg,gif,png}").collect();
//! assert_eq!(words.len(), 6);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Batch Runner (runner)                       │
//! │  - JSON requests          - rayon thread pool                   │
//! │  - Progress bar           - JSON report                         │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ dispatches KataRequest
//!                               ▼
//!      ┌──────────────┬─────────┴────┬──────────────┐
//!      │              │              │              │
//!      ▼              ▼              ▼              ▼
//! ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐
//! │conditions│  │ puzzles  │  │ parsing  │  │  search  │
//! └──────────┘  └──────────┘  └──────────┘  └──────────┘
//! ```

/// Branch and loop katas.
pub mod conditions;

/// Error type shared across the crate.
pub mod error;

/// Text parsing katas, including poker hands.
pub mod parsing;

/// Puzzle katas.
pub mod puzzles;

/// Parallel batch evaluation of kata requests.
pub mod runner;

/// Search and combinatorics katas.
pub mod search;

// Re-export commonly used types at crate root for convenience
pub use error::{KataError, Result};
pub use runner::{BatchReport, BatchRunner, KataRequest, RunnerConfig};
