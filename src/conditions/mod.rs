//! Conditions and loops.
//!
//! Small single-pass katas built from branches and loops:
//!
//! - [`arithmetic`]: FizzBuzz, factorial, ranges, digits, Luhn, radix output
//! - [`geometry`]: triangle, rectangle and circle checks
//! - [`strings`]: reversal, first unique char, intervals, brackets, paths
//! - [`timespan`]: "time ago" phrasing
//! - [`matrix`]: matrix product
//! - [`tic_tac_toe`]: winner detection

pub mod arithmetic;
pub mod geometry;
pub mod matrix;
pub mod strings;
pub mod tic_tac_toe;
pub mod timespan;

pub use arithmetic::{
    get_digital_root, get_factorial, get_fizz_buzz, get_sum_between_numbers, is_credit_card_number,
    reverse_integer, to_nary_string, FizzBuzz,
};
pub use geometry::{do_rectangles_overlap, is_inside_circle, is_triangle, Circle, Point, Rect};
pub use matrix::{get_matrix_product, Matrix};
pub use strings::{
    find_first_single_char, get_common_directory_path, get_interval_string, is_brackets_balanced,
    reverse_string,
};
pub use tic_tac_toe::{evaluate_tic_tac_toe_position, Mark, Position};
pub use timespan::timespan_to_human_string;
