//! Hand scoring: fifteens, pairs, runs, flush and his nob.
//!
//! Every category is a pure function of the cards. The fifteens, pairs and
//! runs counters take any slice of cards; flush and jack need to tell the
//! hand apart from the cut.

use core::fmt;

use tracing::trace;

use crate::card::{Card, RANK_COUNT};
use crate::error::HandError;

/// Largest number of cards the slice counters accept.
pub const MAX_SCORED_CARDS: usize = 16;

/// Points for each fifteen.
const FIFTEEN_POINTS: u32 = 2;
/// Points for each pair.
const PAIR_POINTS: u32 = 2;
/// Minimum length of a scoring run.
const MIN_RUN: u32 = 3;

/// Points scored by a hand, broken down by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HandScore {
    /// Two points for each combination of cards adding up to 15.
    pub fifteens: u8,
    /// Two points for each pair of cards of the same rank.
    pub pairs: u8,
    /// Points for runs of three or more consecutive ranks.
    pub runs: u8,
    /// Four or five points for a flush.
    pub flush: u8,
    /// One point for the jack of the cut suit held in hand.
    pub jack: u8,
}

impl HandScore {
    /// Returns the total points.
    #[must_use]
    pub fn total(&self) -> u16 {
        self.categories()
            .iter()
            .map(|&(_, points)| u16::from(points))
            .sum()
    }

    /// Returns each category with its name, in display order.
    #[must_use]
    pub const fn categories(&self) -> [(&'static str, u8); 5] {
        [
            ("fifteens", self.fifteens),
            ("pairs", self.pairs),
            ("runs", self.runs),
            ("flush", self.flush),
            ("jack", self.jack),
        ]
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, points) in self.categories() {
            write!(f, "{name} {points}, ")?;
        }
        write!(f, "total {}", self.total())
    }
}

/// Number of cards of each rank, indexed by `rank - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankCounts([u32; RANK_COUNT]);

impl RankCounts {
    /// Counts the ranks of `cards`.
    #[must_use]
    pub fn new(cards: &[Card]) -> Self {
        let mut counts = [0u32; RANK_COUNT];
        for card in cards {
            counts[(card.rank() - 1) as usize] += 1;
        }
        Self(counts)
    }

    /// Returns the number of cards with the given rank, or 0 outside 1..=13.
    #[must_use]
    pub fn get(&self, rank: u8) -> u32 {
        rank.checked_sub(1)
            .and_then(|index| self.0.get(index as usize))
            .copied()
            .unwrap_or(0)
    }

    /// Returns the counts in rank order.
    #[must_use]
    pub const fn as_array(&self) -> &[u32; RANK_COUNT] {
        &self.0
    }
}

fn check_len(cards: &[Card]) -> Result<(), HandError> {
    if cards.len() > MAX_SCORED_CARDS {
        return Err(HandError::TooManyCards {
            len: cards.len(),
            max: MAX_SCORED_CARDS,
        });
    }
    Ok(())
}

/// Scores fifteens: two points for every combination of two or more cards
/// whose [`Card::fifteens_rank`] values sum to exactly 15.
///
/// ```
/// use cribbage::{Card, score::score_fifteens};
///
/// let cards: Vec<Card> = ["5H", "TS", "KD"].iter().map(|c| c.parse().unwrap()).collect();
/// assert_eq!(score_fifteens(&cards)?, 4);
/// # Ok::<(), cribbage::HandError>(())
/// ```
///
/// # Errors
///
/// Returns [`HandError::TooManyCards`] for more than [`MAX_SCORED_CARDS`] cards.
pub fn score_fifteens(cards: &[Card]) -> Result<u32, HandError> {
    check_len(cards)?;
    Ok(count_fifteens(cards))
}

fn count_fifteens(cards: &[Card]) -> u32 {
    let mut count = 0;

    // Each bit of `mask` selects one card.
    for mask in 1u32..(1 << cards.len()) {
        if mask.count_ones() < 2 {
            continue;
        }
        let sum: u32 = cards
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, card)| u32::from(card.fifteens_rank()))
            .sum();
        if sum == 15 {
            count += 1;
        }
    }

    count * FIFTEEN_POINTS
}

/// Scores pairs: two points for every two cards sharing a rank.
///
/// Three of a kind holds three pairs and four of a kind holds six.
///
/// # Errors
///
/// Returns [`HandError::TooManyCards`] for more than [`MAX_SCORED_CARDS`] cards.
pub fn score_pairs(cards: &[Card]) -> Result<u32, HandError> {
    check_len(cards)?;
    Ok(count_pairs(cards))
}

fn count_pairs(cards: &[Card]) -> u32 {
    let pairs: u32 = RankCounts::new(cards)
        .as_array()
        .iter()
        .filter(|&&n| n >= 2)
        .map(|&n| n * (n - 1) / 2)
        .sum();
    pairs * PAIR_POINTS
}

/// Run scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    /// The previous rank was empty.
    Idle,
    /// Inside a streak of consecutive occupied ranks.
    Streak {
        /// Number of ranks in the streak.
        len: u32,
        /// Product of the counts of every rank in the streak.
        multiplier: u32,
    },
}

impl RunState {
    const fn push(self, count: u32) -> Self {
        match (self, count) {
            (_, 0) => Self::Idle,
            (Self::Idle, _) => Self::Streak {
                len: 1,
                multiplier: count,
            },
            (Self::Streak { len, multiplier }, _) => Self::Streak {
                len: len + 1,
                multiplier: multiplier * count,
            },
        }
    }

    /// Points for the streak if it ends here.
    const fn points(self) -> u32 {
        match self {
            Self::Streak { len, multiplier } if len >= MIN_RUN => len * multiplier,
            _ => 0,
        }
    }
}

/// Scores runs of three or more consecutive ranks.
///
/// A run with repeated ranks scores once for every way of picking one card
/// per rank: 3-4-5-5-6 is two runs of four, worth 8.
///
/// # Errors
///
/// Returns [`HandError::TooManyCards`] for more than [`MAX_SCORED_CARDS`] cards.
pub fn score_runs(cards: &[Card]) -> Result<u32, HandError> {
    check_len(cards)?;
    Ok(count_runs(cards))
}

fn count_runs(cards: &[Card]) -> u32 {
    let mut score = 0;
    let mut state = RunState::Idle;

    for &count in RankCounts::new(cards).as_array() {
        let next = state.push(count);
        if next == RunState::Idle {
            score += state.points();
        }
        state = next;
    }

    score + state.points()
}

/// Scores a flush.
///
/// Four hand cards of one suit score 4, or 5 if the cut matches too. When
/// `crib` is set only the five-card flush counts.
#[must_use]
pub fn score_flush(hand: &[Card; 4], cut: Card, crib: bool) -> u8 {
    let suit = hand[0].suit();
    if hand.iter().any(|card| card.suit() != suit) {
        return 0;
    }

    match (cut.suit() == suit, crib) {
        (true, _) => 5,
        (false, false) => 4,
        (false, true) => 0,
    }
}

/// Scores his nob: one point for a jack in hand of the same suit as the cut.
#[must_use]
pub fn score_jack(hand: &[Card; 4], cut: Card) -> u8 {
    u8::from(
        hand.iter()
            .any(|card| card.is_jack() && card.suit() == cut.suit()),
    )
}

/// Scores a hand of four cards with its cut card.
///
/// ```
/// use cribbage::{Card, score::score_hand};
///
/// let hand = ["5C", "5D", "5H", "JS"].map(|c| c.parse::<Card>().unwrap());
/// let cut: Card = "5S".parse().unwrap();
/// assert_eq!(score_hand(&hand, cut).total(), 29);
/// ```
#[must_use]
pub fn score_hand(hand: &[Card; 4], cut: Card) -> HandScore {
    score_cards(hand, cut, false)
}

/// Scores a crib of four cards with its cut card.
#[must_use]
pub fn score_crib(hand: &[Card; 4], cut: Card) -> HandScore {
    score_cards(hand, cut, true)
}

pub(crate) fn score_cards(hand: &[Card; 4], cut: Card, crib: bool) -> HandScore {
    let all = [hand[0], hand[1], hand[2], hand[3], cut];

    // Five cards score at most 16 in any category.
    let score = HandScore {
        fifteens: count_fifteens(&all) as u8,
        pairs: count_pairs(&all) as u8,
        runs: count_runs(&all) as u8,
        flush: score_flush(hand, cut, crib),
        jack: score_jack(hand, cut),
    };

    trace!(
        fifteens = score.fifteens,
        pairs = score.pairs,
        runs = score.runs,
        flush = score.flush,
        jack = score.jack,
        crib,
        "scored categories"
    );

    score
}
