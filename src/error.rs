//! Error types for card parsing and hand scoring.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when constructing or parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is outside 1..=13.
    #[error("invalid rank {0}, expected 1-13")]
    InvalidRank(u8),
    /// Suit index is outside 0..=3.
    #[error("invalid suit {0}, expected 0-3")]
    InvalidSuit(u8),
    /// Ordering key is outside 0..52.
    #[error("invalid card value {0}, expected 0-51")]
    InvalidValue(u8),
    /// Unknown rank character in a short code.
    #[error("invalid rank character {0:?}")]
    InvalidRankChar(char),
    /// Unknown suit character in a short code.
    #[error("invalid suit character {0:?}")]
    InvalidSuitChar(char),
    /// Short code has the wrong number of characters.
    #[error("card code must be two characters, like \"AS\" or \"TD\"")]
    InvalidLength,
}

/// Errors that can occur when building or scoring a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Wrong number of hand or cut cards.
    #[error("expected 4 hand cards and 1 cut card, got {hand} and {cut}")]
    InvalidHandShape {
        /// Number of hand cards supplied.
        hand: usize,
        /// Number of cut cards supplied.
        cut: usize,
    },
    /// Too many cards for the slice counters.
    #[error("cannot score {len} cards, at most {max} are supported")]
    TooManyCards {
        /// Number of cards supplied.
        len: usize,
        /// Largest supported number of cards.
        max: usize,
    },
    /// The same card appears twice among the hand and cut.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    /// A card code could not be parsed.
    #[error(transparent)]
    Card(#[from] CardError),
}
