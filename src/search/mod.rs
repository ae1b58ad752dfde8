//! Search and combinatorics katas.
//!
//! - [`snaking`]: self-avoiding word search
//! - [`permutations`]: lazy permutations (Heap's algorithm)
//! - [`stocks`]: best trading profit over a quote series
//! - [`url_shortener`]: two characters per code unit packing

pub mod permutations;
pub mod snaking;
pub mod stocks;
pub mod url_shortener;

pub use permutations::{get_permutations, Permutations};
pub use snaking::find_string_in_snaking_puzzle;
pub use stocks::get_most_profit_from_stock_quotes;
pub use url_shortener::UrlShortener;
