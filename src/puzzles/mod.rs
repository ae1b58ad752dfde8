//! Puzzle katas.
//!
//! - [`compass`]: the 32-point compass rose
//! - [`braces`]: lazy shell-style brace expansion
//! - [`zigzag`]: JPEG zig-zag matrices
//! - [`dominoes`]: whether a set of tiles forms one row
//! - [`ranges`]: range extraction from sorted lists

pub mod braces;
pub mod compass;
pub mod dominoes;
pub mod ranges;
pub mod zigzag;

pub use braces::{expand_braces, BraceExpansion};
pub use compass::{create_compass_points, CompassPoint};
pub use dominoes::{can_dominoes_make_row, Domino};
pub use ranges::extract_ranges;
pub use zigzag::get_zig_zag_matrix;
