//! Card types, text encodings and lookup tables.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of distinct ranks.
pub const RANK_COUNT: usize = 13;

/// Rank of a jack.
pub const JACK: u8 = 11;

/// Long rank names, indexed by `rank - 1`.
pub const RANK_NAMES: [&str; RANK_COUNT] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
    "Queen", "King",
];

/// Rank characters used by the two-character short code, indexed by `rank - 1`.
const RANK_CHARS: [char; RANK_COUNT] = [
    'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
];

/// Card suit.
///
/// Suits are ordered clubs, diamonds, hearts, spades; the order takes part in
/// [`Card::value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit with the given index (0 = clubs ... 3 = spades).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if `index` is greater than 3.
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        match index {
            0 => Ok(Self::Clubs),
            1 => Ok(Self::Diamonds),
            2 => Ok(Self::Hearts),
            3 => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit(index)),
        }
    }

    /// Parses a suit letter: `C`, `D`, `H` or `S`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuitChar`] for any other character.
    pub const fn from_char(c: char) -> Result<Self, CardError> {
        match c {
            'C' => Ok(Self::Clubs),
            'D' => Ok(Self::Diamonds),
            'H' => Ok(Self::Hearts),
            'S' => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuitChar(c)),
        }
    }

    /// Returns the suit index (0..=3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the plural suit name, e.g. `"Hearts"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }

    /// Returns the letter used in short codes.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }

    /// Returns whether the suit is printed in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Diamonds | Self::Hearts)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards are ordered by [`Card::value`], so sorting a hand gives the same
/// order regardless of how it was dealt.
///
/// ```
/// use cribbage::{Card, Suit};
///
/// let card: Card = "JH".parse()?;
/// assert_eq!(card.rank(), 11);
/// assert_eq!(card.fifteens_rank(), 10);
/// assert_eq!(card.suit(), Suit::Hearts);
/// assert_eq!(card.to_string(), "Jack of Hearts");
/// # Ok::<(), cribbage::CardError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside 1..=13.
    pub const fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        if !matches!(rank, 1..=13) {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { rank, suit })
    }

    /// Creates a card from a numeric rank (1..=13) and suit index (0..=3).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] or [`CardError::InvalidSuit`] when
    /// either value is out of range. The rank is checked first.
    pub const fn from_parts(rank: u8, suit: u8) -> Result<Self, CardError> {
        if !matches!(rank, 1..=13) {
            return Err(CardError::InvalidRank(rank));
        }
        match Suit::from_index(suit) {
            Ok(suit) => Ok(Self { rank, suit }),
            Err(err) => Err(err),
        }
    }

    /// Creates a card from its canonical ordering key (see [`Card::value`]).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidValue`] if `value` is 52 or more.
    pub const fn from_value(value: u8) -> Result<Self, CardError> {
        if value as usize >= DECK_SIZE {
            return Err(CardError::InvalidValue(value));
        }
        Self::from_parts(value / 4 + 1, value % 4)
    }

    /// Returns the nominal rank (1 = Ace ... 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the rank used when adding up fifteens: face cards count 10.
    #[must_use]
    pub const fn fifteens_rank(&self) -> u8 {
        if self.rank > 10 { 10 } else { self.rank }
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether this card is a jack.
    #[must_use]
    pub const fn is_jack(&self) -> bool {
        self.rank == JACK
    }

    /// Returns the canonical ordering key `(rank - 1) * 4 + suit`, in `0..52`.
    #[must_use]
    pub const fn value(&self) -> u8 {
        (self.rank - 1) * 4 + self.suit.index()
    }

    /// Returns the long rank name, e.g. `"Queen"`.
    #[must_use]
    pub const fn rank_name(&self) -> &'static str {
        RANK_NAMES[(self.rank - 1) as usize]
    }

    /// Returns a display adapter for the short symbol form, e.g. `A♠` or `10♦`.
    #[must_use]
    pub const fn short(&self) -> Short {
        Short(*self)
    }

    /// Returns a display adapter for the two-character code, e.g. `AS` or `TD`.
    ///
    /// The output parses back into the same card.
    #[must_use]
    pub const fn code(&self) -> Code {
        Code(*self)
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_name(), self.suit.name())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a two-character short code such as `AS` or `TD`.
    ///
    /// The rank is one of `A23456789TJQK` and the suit one of `CDHS`, both
    /// upper case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::InvalidLength);
        };

        Ok(Self {
            rank: rank_from_char(rank)?,
            suit: Suit::from_char(suit)?,
        })
    }
}

fn rank_from_char(c: char) -> Result<u8, CardError> {
    RANK_CHARS
        .iter()
        .position(|&r| r == c)
        .map(|index| index as u8 + 1)
        .ok_or(CardError::InvalidRankChar(c))
}

/// Short symbol rendering of a card. See [`Card::short`].
#[derive(Debug, Clone, Copy)]
pub struct Short(Card);

impl fmt::Display for Short {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.0;
        match card.rank {
            2..=10 => write!(f, "{}{}", card.rank, card.suit.symbol()),
            _ => write!(
                f,
                "{}{}",
                RANK_CHARS[(card.rank - 1) as usize],
                card.suit.symbol()
            ),
        }
    }
}

/// Two-character code rendering of a card. See [`Card::code`].
#[derive(Debug, Clone, Copy)]
pub struct Code(Card);

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.0;
        write!(
            f,
            "{}{}",
            RANK_CHARS[(card.rank - 1) as usize],
            card.suit.letter()
        )
    }
}
