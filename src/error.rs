//! Error type shared by the parsing katas and the batch runner.
//!
//! Most katas signal bad input with a sentinel (`None` or `false`). The
//! variants here cover inputs that cannot be interpreted at all, such as a
//! card label that names no rank, plus the I/O of the batch runner.

use thiserror::Error;

use crate::runner::ConfigError;

/// Errors produced by the kata library.
#[derive(Error, Debug)]
pub enum KataError {
    #[error("invalid card label: {0:?}")]
    InvalidCard(String),

    #[error("a poker hand has 5 cards, got {0}")]
    InvalidHandSize(usize),

    #[error("unrecognised OCR glyph at digit {position}")]
    UnknownGlyph { position: usize },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("character {0:?} cannot be packed")]
    UnsupportedChar(char),

    #[error("code unit {0:#06x} was not produced by the encoder")]
    InvalidCode(u32),

    #[error("kata panicked: {0}")]
    Panicked(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, KataError>;
