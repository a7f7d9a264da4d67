//! Scoring configuration options.

/// Configuration options for scoring a hand.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribbage::ScoreOptions;
///
/// let options = ScoreOptions::default()
///     .with_crib(true)
///     .with_reject_duplicates(true);
/// assert!(options.crib);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreOptions {
    /// Whether the hand is the dealer's crib.
    ///
    /// A crib only scores a flush when the cut card matches as well.
    pub crib: bool,
    /// Whether to reject hands in which the same card appears twice.
    pub reject_duplicates: bool,
}

impl ScoreOptions {
    /// Sets whether the hand is scored as a crib.
    ///
    /// # Example
    ///
    /// ```
    /// use cribbage::ScoreOptions;
    ///
    /// let options = ScoreOptions::default().with_crib(true);
    /// assert!(options.crib);
    /// ```
    #[must_use]
    pub const fn with_crib(mut self, crib: bool) -> Self {
        self.crib = crib;
        self
    }

    /// Sets whether duplicate cards are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use cribbage::ScoreOptions;
    ///
    /// let options = ScoreOptions::default().with_reject_duplicates(true);
    /// assert!(options.reject_duplicates);
    /// ```
    #[must_use]
    pub const fn with_reject_duplicates(mut self, reject_duplicates: bool) -> Self {
        self.reject_duplicates = reject_duplicates;
        self
    }
}
