//! A four-card hand together with its cut card.

use tracing::debug;

use crate::card::Card;
use crate::error::HandError;
use crate::options::ScoreOptions;
use crate::score::{HandScore, score_cards};

/// Number of cards held in hand.
pub const HAND_SIZE: usize = 4;

/// A hand of four cards and the cut card.
///
/// ```
/// use cribbage::Hand;
///
/// let hand = Hand::parse("3C 4D 5H 5S", "6C")?;
/// let score = hand.score();
/// assert_eq!(score.runs, 8);
/// assert_eq!(score.total(), 14);
/// # Ok::<(), cribbage::HandError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    /// Cards in the hand.
    cards: [Card; HAND_SIZE],
    /// The cut card.
    cut: Card,
}

impl Hand {
    /// Creates a new hand.
    #[must_use]
    pub const fn new(cards: [Card; HAND_SIZE], cut: Card) -> Self {
        Self { cards, cut }
    }

    /// Creates a hand from slices of hand and cut cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidHandShape`] unless `cards` holds exactly
    /// four cards and `cut` exactly one.
    pub fn from_slices(cards: &[Card], cut: &[Card]) -> Result<Self, HandError> {
        let shape = HandError::InvalidHandShape {
            hand: cards.len(),
            cut: cut.len(),
        };
        let (Ok(cards), [cut]) = (<[Card; HAND_SIZE]>::try_from(cards), cut) else {
            return Err(shape);
        };
        Ok(Self::new(cards, *cut))
    }

    /// Parses whitespace-separated hand codes and a cut code, e.g.
    /// `Hand::parse("5C 5D 5H JS", "5S")`.
    ///
    /// Each code must be exactly what [`Card`]'s `FromStr` accepts: two
    /// upper-case characters.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Card`] if any code fails to parse and
    /// [`HandError::InvalidHandShape`] if the card counts are wrong.
    pub fn parse(cards: &str, cut: &str) -> Result<Self, HandError> {
        let mut parsed = [None; HAND_SIZE];
        let mut hand_count = 0;
        for code in cards.split_whitespace() {
            let card = code.parse::<Card>()?;
            if let Some(slot) = parsed.get_mut(hand_count) {
                *slot = Some(card);
            }
            hand_count += 1;
        }

        let mut cut_cards = cut.split_whitespace();
        let cut_card = cut_cards.next().map(str::parse::<Card>).transpose()?;
        let cut_count = usize::from(cut_card.is_some()) + cut_cards.count();

        match (parsed, cut_card) {
            ([Some(a), Some(b), Some(c), Some(d)], Some(cut))
                if hand_count == HAND_SIZE && cut_count == 1 =>
            {
                Ok(Self::new([a, b, c, d], cut))
            }
            _ => Err(HandError::InvalidHandShape {
                hand: hand_count,
                cut: cut_count,
            }),
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns the cut card.
    #[must_use]
    pub const fn cut(&self) -> Card {
        self.cut
    }

    /// Returns the hand cards followed by the cut, sorted by [`Card::value`].
    #[must_use]
    pub fn all_cards(&self) -> [Card; HAND_SIZE + 1] {
        let mut all = [
            self.cards[0],
            self.cards[1],
            self.cards[2],
            self.cards[3],
            self.cut,
        ];
        all.sort_unstable();
        all
    }

    /// Returns the first card that appears twice among the hand and cut.
    #[must_use]
    pub fn find_duplicate(&self) -> Option<Card> {
        self.all_cards()
            .windows(2)
            .find(|pair| pair[0] == pair[1])
            .map(|pair| pair[0])
    }

    /// Scores the hand with default options.
    #[must_use]
    pub fn score(&self) -> HandScore {
        score_cards(&self.cards, self.cut, false)
    }

    /// Scores the hand with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::DuplicateCard`] when
    /// [`ScoreOptions::reject_duplicates`] is set and a card repeats.
    pub fn score_with(&self, options: &ScoreOptions) -> Result<HandScore, HandError> {
        if options.reject_duplicates {
            if let Some(card) = self.find_duplicate() {
                debug!(card = %card.code(), "rejected hand with duplicate card");
                return Err(HandError::DuplicateCard(card));
            }
        }

        let score = score_cards(&self.cards, self.cut, options.crib);
        debug!(total = score.total(), crib = options.crib, "scored hand");
        Ok(score)
    }
}
