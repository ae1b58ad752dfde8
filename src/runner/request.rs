//! JSON request model for the batch runner.
//!
//! A request names a kata and carries its arguments:
//!
//! ```json
//! {"kata": "fizz_buzz", "num": 15}
//! {"kata": "poker_hand_rank", "hand": ["4♥", "5♥", "6♥", "7♥", "8♥"]}
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::conditions::{self, Circle, Matrix, Point, Position, Rect};
use crate::error::Result;
use crate::parsing;
use crate::puzzles::{self, Domino};
use crate::search::{self, UrlShortener};

/// One kata invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kata", rename_all = "snake_case")]
pub enum KataRequest {
    FizzBuzz { num: i64 },
    Factorial { n: u32 },
    SumBetweenNumbers { n1: i64, n2: i64 },
    IsTriangle { a: f64, b: f64, c: f64 },
    RectanglesOverlap { rect1: Rect, rect2: Rect },
    InsideCircle { circle: Circle, point: Point },
    FirstSingleChar { text: String },
    IntervalString { a: f64, b: f64, start_included: bool, end_included: bool },
    ReverseString { text: String },
    ReverseInteger { num: i32 },
    CreditCardNumber { ccn: u64 },
    DigitalRoot { n: u64 },
    BracketsBalanced { text: String },
    Timespan { start: NaiveDateTime, end: NaiveDateTime },
    NaryString { num: u64, radix: u32 },
    CommonDirectoryPath { paths: Vec<String> },
    MatrixProduct { m1: Matrix, m2: Matrix },
    TicTacToe { rows: Vec<String> },
    CompassPoints,
    ExpandBraces { text: String },
    ZigZagMatrix { n: usize },
    DominoesRow { dominoes: Vec<Domino> },
    ExtractRanges { nums: Vec<i64> },
    BankAccount { scan: String },
    WrapText { text: String, columns: usize },
    PokerHandRank { hand: Vec<String> },
    FigureRectangles { figure: String },
    SnakingPuzzle { grid: Vec<String>, word: String },
    Permutations { chars: String },
    StockProfit { quotes: Vec<i64> },
    UrlEncode { url: String },
    UrlDecode { code: String },
}

impl KataRequest {
    /// The `kata` tag of this request.
    pub fn name(&self) -> &'static str {
        match self {
            KataRequest::FizzBuzz { .. } => "fizz_buzz",
            KataRequest::Factorial { .. } => "factorial",
            KataRequest::SumBetweenNumbers { .. } => "sum_between_numbers",
            KataRequest::IsTriangle { .. } => "is_triangle",
            KataRequest::RectanglesOverlap { .. } => "rectangles_overlap",
            KataRequest::InsideCircle { .. } => "inside_circle",
            KataRequest::FirstSingleChar { .. } => "first_single_char",
            KataRequest::IntervalString { .. } => "interval_string",
            KataRequest::ReverseString { .. } => "reverse_string",
            KataRequest::ReverseInteger { .. } => "reverse_integer",
            KataRequest::CreditCardNumber { .. } => "credit_card_number",
            KataRequest::DigitalRoot { .. } => "digital_root",
            KataRequest::BracketsBalanced { .. } => "brackets_balanced",
            KataRequest::Timespan { .. } => "timespan",
            KataRequest::NaryString { .. } => "nary_string",
            KataRequest::CommonDirectoryPath { .. } => "common_directory_path",
            KataRequest::MatrixProduct { .. } => "matrix_product",
            KataRequest::TicTacToe { .. } => "tic_tac_toe",
            KataRequest::CompassPoints => "compass_points",
            KataRequest::ExpandBraces { .. } => "expand_braces",
            KataRequest::ZigZagMatrix { .. } => "zig_zag_matrix",
            KataRequest::DominoesRow { .. } => "dominoes_row",
            KataRequest::ExtractRanges { .. } => "extract_ranges",
            KataRequest::BankAccount { .. } => "bank_account",
            KataRequest::WrapText { .. } => "wrap_text",
            KataRequest::PokerHandRank { .. } => "poker_hand_rank",
            KataRequest::FigureRectangles { .. } => "figure_rectangles",
            KataRequest::SnakingPuzzle { .. } => "snaking_puzzle",
            KataRequest::Permutations { .. } => "permutations",
            KataRequest::StockProfit { .. } => "stock_profit",
            KataRequest::UrlEncode { .. } => "url_encode",
            KataRequest::UrlDecode { .. } => "url_decode",
        }
    }

    /// Run the kata and serialise its answer.
    ///
    /// Lazy sequences are collected into arrays. Sentinel answers map to JSON
    /// `null` (`None`) or `false`.
    pub fn evaluate(&self) -> Result<Value> {
        let value = match self {
            KataRequest::FizzBuzz { num } => {
                serde_json::to_value(conditions::get_fizz_buzz(*num).to_string())?
            }
            KataRequest::Factorial { n } => serde_json::to_value(conditions::get_factorial(*n))?,
            KataRequest::SumBetweenNumbers { n1, n2 } => {
                serde_json::to_value(conditions::get_sum_between_numbers(*n1, *n2))?
            }
            KataRequest::IsTriangle { a, b, c } => {
                serde_json::to_value(conditions::is_triangle(*a, *b, *c))?
            }
            KataRequest::RectanglesOverlap { rect1, rect2 } => {
                serde_json::to_value(conditions::do_rectangles_overlap(rect1, rect2))?
            }
            KataRequest::InsideCircle { circle, point } => {
                serde_json::to_value(conditions::is_inside_circle(circle, point))?
            }
            KataRequest::FirstSingleChar { text } => {
                serde_json::to_value(conditions::find_first_single_char(text))?
            }
            KataRequest::IntervalString { a, b, start_included, end_included } => serde_json::to_value(
                conditions::get_interval_string(*a, *b, *start_included, *end_included),
            )?,
            KataRequest::ReverseString { text } => {
                serde_json::to_value(conditions::reverse_string(text))?
            }
            KataRequest::ReverseInteger { num } => {
                serde_json::to_value(conditions::reverse_integer(*num))?
            }
            KataRequest::CreditCardNumber { ccn } => {
                serde_json::to_value(conditions::is_credit_card_number(*ccn))?
            }
            KataRequest::DigitalRoot { n } => serde_json::to_value(conditions::get_digital_root(*n))?,
            KataRequest::BracketsBalanced { text } => {
                serde_json::to_value(conditions::is_brackets_balanced(text))?
            }
            KataRequest::Timespan { start, end } => {
                serde_json::to_value(conditions::timespan_to_human_string(*start, *end))?
            }
            KataRequest::NaryString { num, radix } => {
                serde_json::to_value(conditions::to_nary_string(*num, *radix))?
            }
            KataRequest::CommonDirectoryPath { paths } => {
                serde_json::to_value(conditions::get_common_directory_path(paths))?
            }
            KataRequest::MatrixProduct { m1, m2 } => {
                serde_json::to_value(conditions::get_matrix_product(m1, m2))?
            }
            KataRequest::TicTacToe { rows } => {
                let position = Position::parse(rows)?;
                serde_json::to_value(conditions::evaluate_tic_tac_toe_position(&position))?
            }
            KataRequest::CompassPoints => serde_json::to_value(puzzles::create_compass_points())?,
            KataRequest::ExpandBraces { text } => {
                serde_json::to_value(puzzles::expand_braces(text).collect::<Vec<_>>())?
            }
            KataRequest::ZigZagMatrix { n } => serde_json::to_value(puzzles::get_zig_zag_matrix(*n))?,
            KataRequest::DominoesRow { dominoes } => {
                serde_json::to_value(puzzles::can_dominoes_make_row(dominoes))?
            }
            KataRequest::ExtractRanges { nums } => serde_json::to_value(puzzles::extract_ranges(nums))?,
            KataRequest::BankAccount { scan } => serde_json::to_value(parsing::parse_bank_account(scan)?)?,
            KataRequest::WrapText { text, columns } => {
                serde_json::to_value(parsing::wrap_text(text, *columns).collect::<Vec<_>>())?
            }
            KataRequest::PokerHandRank { hand } => {
                serde_json::to_value(parsing::get_poker_hand_rank(hand)?)?
            }
            KataRequest::FigureRectangles { figure } => {
                serde_json::to_value(parsing::get_figure_rectangles(figure).collect::<Vec<_>>())?
            }
            KataRequest::SnakingPuzzle { grid, word } => {
                serde_json::to_value(search::find_string_in_snaking_puzzle(grid, word))?
            }
            KataRequest::Permutations { chars } => {
                serde_json::to_value(search::get_permutations(chars).collect::<Vec<_>>())?
            }
            KataRequest::StockProfit { quotes } => {
                serde_json::to_value(search::get_most_profit_from_stock_quotes(quotes))?
            }
            KataRequest::UrlEncode { url } => serde_json::to_value(UrlShortener::new().encode(url)?)?,
            KataRequest::UrlDecode { code } => serde_json::to_value(UrlShortener::new().decode(code)?)?,
        };
        Ok(value)
    }
}
