//! Poker hand ranking.
//!
//! A five-card hand is classified by counting ranks and suits once and then
//! testing categories from strongest to weakest.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::error::{KataError, Result};

/// Number of cards in a ranked hand.
pub const HAND_SIZE: usize = 5;

/// Hand rank categories, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PokerRank {
    HighCard = 0,
    OnePair = 1,
    TwoPairs = 2,
    ThreeOfKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfKind = 7,
    StraightFlush = 8,
}

impl PokerRank {
    /// Get the category name.
    pub fn name(&self) -> &'static str {
        match self {
            PokerRank::HighCard => "High Card",
            PokerRank::OnePair => "One Pair",
            PokerRank::TwoPairs => "Two Pairs",
            PokerRank::ThreeOfKind => "Three of a Kind",
            PokerRank::Straight => "Straight",
            PokerRank::Flush => "Flush",
            PokerRank::FullHouse => "Full House",
            PokerRank::FourOfKind => "Four of a Kind",
            PokerRank::StraightFlush => "Straight Flush",
        }
    }
}

/// True when the five ranks are consecutive.
///
/// The ace plays high (`10-J-Q-K-A`) or low (`A-2-3-4-5`).
fn is_straight(rank_bits: u16) -> bool {
    // Wheel: A-2-3-4-5 = bits 12,0,1,2,3
    const WHEEL: u16 = 0b1_0000_0000_1111;
    if rank_bits == WHEEL {
        return true;
    }
    rank_bits.count_ones() == HAND_SIZE as u32 && rank_bits >> rank_bits.trailing_zeros() == 0b11111
}

/// Classify a parsed five-card hand.
pub fn rank_cards(cards: &[Card; HAND_SIZE]) -> PokerRank {
    let mut rank_counts = [0u8; 13];
    let mut rank_bits = 0u16;
    for card in cards {
        rank_counts[card.rank().index()] += 1;
        rank_bits |= 1 << card.rank().index();
    }

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let is_straight = is_straight(rank_bits);

    let max_of_kind = rank_counts.iter().copied().max().unwrap_or(0);
    let pairs = rank_counts.iter().filter(|&&c| c == 2).count();

    if is_flush && is_straight {
        PokerRank::StraightFlush
    } else if max_of_kind == 4 {
        PokerRank::FourOfKind
    } else if max_of_kind == 3 && pairs == 1 {
        PokerRank::FullHouse
    } else if is_flush {
        PokerRank::Flush
    } else if is_straight {
        PokerRank::Straight
    } else if max_of_kind == 3 {
        PokerRank::ThreeOfKind
    } else if pairs == 2 {
        PokerRank::TwoPairs
    } else if pairs == 1 {
        PokerRank::OnePair
    } else {
        PokerRank::HighCard
    }
}

/// Rank a hand given as card labels, e.g. `["4♥", "5♥", "6♥", "7♥", "8♥"]`.
///
/// A label that names no card, or a card given twice, is `InvalidCard`.
pub fn get_poker_hand_rank<S: AsRef<str>>(hand: &[S]) -> Result<PokerRank> {
    if hand.len() != HAND_SIZE {
        return Err(KataError::InvalidHandSize(hand.len()));
    }
    let mut cards = [Card::new(Rank::Two, Suit::Clubs); HAND_SIZE];
    for (i, label) in hand.iter().enumerate() {
        let card: Card = label.as_ref().parse()?;
        // A single deck holds each card once.
        if cards[..i].contains(&card) {
            return Err(KataError::InvalidCard(label.as_ref().to_string()));
        }
        cards[i] = card;
    }
    Ok(rank_cards(&cards))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(hand: [&str; 5]) -> PokerRank {
        get_poker_hand_rank(&hand).unwrap()
    }

    #[test]
    fn test_documented_hands() {
        assert_eq!(rank(["4♥", "5♥", "6♥", "7♥", "8♥"]), PokerRank::StraightFlush);
        assert_eq!(rank(["A♠", "4♠", "3♠", "5♠", "2♠"]), PokerRank::StraightFlush);
        assert_eq!(rank(["4♣", "4♦", "4♥", "4♠", "10♥"]), PokerRank::FourOfKind);
        assert_eq!(rank(["4♣", "4♦", "5♦", "5♠", "5♥"]), PokerRank::FullHouse);
        assert_eq!(rank(["4♣", "5♣", "6♣", "7♣", "Q♣"]), PokerRank::Flush);
        assert_eq!(rank(["2♠", "3♥", "4♥", "5♥", "6♥"]), PokerRank::Straight);
        assert_eq!(rank(["2♥", "4♦", "5♥", "A♦", "3♠"]), PokerRank::Straight);
        assert_eq!(rank(["2♥", "2♠", "2♦", "7♥", "A♥"]), PokerRank::ThreeOfKind);
        assert_eq!(rank(["2♥", "4♦", "4♥", "A♦", "A♠"]), PokerRank::TwoPairs);
        assert_eq!(rank(["3♥", "4♥", "10♥", "3♦", "A♠"]), PokerRank::OnePair);
        assert_eq!(rank(["A♥", "K♥", "Q♥", "2♦", "3♠"]), PokerRank::HighCard);
    }

    #[test]
    fn test_ace_high_straights() {
        assert_eq!(rank(["10♥", "J♦", "Q♠", "K♣", "A♥"]), PokerRank::Straight);
        assert_eq!(rank(["10♠", "J♠", "Q♠", "K♠", "A♠"]), PokerRank::StraightFlush);
        // No wrap-around through the ace.
        assert_eq!(rank(["Q♥", "K♦", "A♠", "2♣", "3♥"]), PokerRank::HighCard);
    }

    #[test]
    fn test_letter_suits() {
        assert_eq!(rank(["9h", "Th", "Jh", "Qh", "Kh"]), PokerRank::StraightFlush);
    }

    #[test]
    fn test_rank_order() {
        assert!(PokerRank::StraightFlush > PokerRank::FourOfKind);
        assert!(PokerRank::OnePair > PokerRank::HighCard);
        assert_eq!(PokerRank::FullHouse as u8, 6);
        assert_eq!(PokerRank::TwoPairs.name(), "Two Pairs");
    }

    #[test]
    fn test_invalid_hands() {
        assert!(matches!(
            get_poker_hand_rank(&["4♥", "5♥"]),
            Err(KataError::InvalidHandSize(2))
        ));
        assert!(matches!(
            get_poker_hand_rank(&["4♥", "5♥", "6♥", "7♥", "Z♥"]),
            Err(KataError::InvalidCard(_))
        ));
    }

    #[test]
    fn test_repeated_cards_rejected() {
        assert!(matches!(
            get_poker_hand_rank(&["A♠", "A♠", "A♠", "A♠", "A♠"]),
            Err(KataError::InvalidCard(label)) if label == "A♠"
        ));
        assert!(matches!(
            get_poker_hand_rank(&["A♠", "A♥", "A♦", "A♣", "A♠"]),
            Err(KataError::InvalidCard(_))
        ));
        // Same card written with a suit letter.
        assert!(matches!(
            get_poker_hand_rank(&["Qs", "Q♠", "2♦", "3♣", "4♥"]),
            Err(KataError::InvalidCard(label)) if label == "Q♠"
        ));
    }

    #[test]
    fn test_owned_labels() {
        let hand: Vec<String> = ["K♠", "K♥", "K♦", "9♣", "9♠"].iter().map(|s| s.to_string()).collect();
        assert_eq!(get_poker_hand_rank(&hand).unwrap(), PokerRank::FullHouse);
    }
}
