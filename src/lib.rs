//! A cribbage hand scoring engine with optional `no_std` support.
//!
//! The crate scores a four-card hand plus the cut card under the standard
//! show rules: fifteens, pairs, runs, flush and his nob. Scoring is a pure
//! function; there is no game state.
//!
//! # Example
//!
//! ```
//! use cribbage::{Hand, ScoreOptions};
//!
//! let hand = Hand::parse("JS 3D 6H 9C", "2S")?;
//! assert_eq!(hand.score().jack, 1);
//!
//! let crib = hand.score_with(&ScoreOptions::default().with_crib(true))?;
//! assert_eq!(crib.flush, 0);
//! # Ok::<(), cribbage::HandError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod score;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANK_NAMES, Suit};
pub use error::{CardError, HandError};
pub use hand::{HAND_SIZE, Hand};
pub use options::ScoreOptions;
pub use score::{HandScore, MAX_SCORED_CARDS, score_crib, score_hand};
