//! Poker hand ranking kata.
//!
//! Card labels such as `"10♥"` are parsed into [`Card`] records and the
//! five-card hand is classified into a [`PokerRank`].

pub mod card;
pub mod rank;

pub use card::{Card, Rank, Suit};
pub use rank::{get_poker_hand_rank, rank_cards, PokerRank, HAND_SIZE};
