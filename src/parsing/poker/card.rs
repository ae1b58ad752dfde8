//! Card representation for hand ranking.
//!
//! This module provides the card types used by the ranking kata:
//! - `Rank`: card rank from 2 up to the ace
//! - `Suit`: one of the four suits
//! - `Card`: an immutable rank/suit record parsed from labels like `"10♥"`

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::KataError;

/// Rank labels for display, indexed by `Rank as usize`.
const RANK_LABELS: [&str; 13] = ["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"];

/// Suit symbols for display.
const SUIT_SYMBOLS: [char; 4] = ['♣', '♦', '♥', '♠'];

/// Suit letters accepted as an alternative to the symbols.
const SUIT_LETTERS: [char; 4] = ['c', 'd', 'h', 's'];

static CARD_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(10|[2-9TJQKA])([♣♦♥♠cdhs])$").expect("card label pattern is valid")
});

/// Rank of a card, ordered 2 < 3 < ... < K < A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 0,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks from two to ace.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Index 0-12 (2-A).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Label used on a card face.
    pub fn label(self) -> &'static str {
        RANK_LABELS[self.index()]
    }

    fn from_label(label: &str) -> Option<Self> {
        let label = if label == "T" { "10" } else { label };
        let index = RANK_LABELS.iter().position(|&l| l == label)?;
        Some(Self::ALL[index])
    }
}

/// Suit of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs = 0,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Index 0-3.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Suit symbol for display.
    pub fn symbol(self) -> char {
        SUIT_SYMBOLS[self.index()]
    }

    fn from_char(c: char) -> Option<Self> {
        let index = SUIT_SYMBOLS
            .iter()
            .position(|&s| s == c)
            .or_else(|| SUIT_LETTERS.iter().position(|&s| s == c))?;
        Some(Self::ALL[index])
    }
}

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card from rank and suit.
    #[inline]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Get the card's rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Get the card's suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl FromStr for Card {
    type Err = KataError;

    /// Parse a label like `"A♠"`, `"10♥"` or `"Qd"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || KataError::InvalidCard(s.to_string());
        let caps = CARD_LABEL.captures(s.trim()).ok_or_else(invalid)?;
        let rank = Rank::from_label(&caps[1]).ok_or_else(invalid)?;
        let suit = caps[2].chars().next().and_then(Suit::from_char).ok_or_else(invalid)?;
        Ok(Self::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
