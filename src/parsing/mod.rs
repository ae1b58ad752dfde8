//! Parsing katas: text in, structure out.
//!
//! - [`bank_ocr`]: seven-segment style account numbers
//! - [`wrap`]: lazy word wrapping
//! - [`poker`]: card labels and hand ranking
//! - [`figure`]: rectangles of an ASCII box drawing

pub mod bank_ocr;
pub mod figure;
pub mod poker;
pub mod wrap;

pub use bank_ocr::parse_bank_account;
pub use figure::{draw_rectangle, get_figure_rectangles, FigureRectangles};
pub use poker::{get_poker_hand_rank, Card, PokerRank, Rank, Suit};
pub use wrap::{wrap_text, WrapText};
