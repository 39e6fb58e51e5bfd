//! Game configuration options.

/// What happens to the deck when a round is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DeckPolicy {
    /// Build and shuffle a full deck for every round.
    #[default]
    FreshEachRound,
    /// Keep dealing from the cards left over, reshuffled in place.
    ///
    /// When too few cards remain for an opening deal, a full deck is built
    /// and shuffled instead. A round can still run out of cards part way
    /// through; the next reset then starts from a full deck.
    Continue,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack::{DeckPolicy, GameOptions};
///
/// let options = GameOptions::default()
///     .with_dealer_stands_on(18)
///     .with_deck_policy(DeckPolicy::Continue);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// The dealer draws while its total is below this value.
    pub dealer_stands_on: u8,
    /// Deck handling between rounds.
    pub deck_policy: DeckPolicy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            deck_policy: DeckPolicy::FreshEachRound,
        }
    }
}

impl GameOptions {
    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the deck policy.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{DeckPolicy, GameOptions};
    ///
    /// let options = GameOptions::default().with_deck_policy(DeckPolicy::Continue);
    /// assert_eq!(options.deck_policy, DeckPolicy::Continue);
    /// ```
    #[must_use]
    pub const fn with_deck_policy(mut self, policy: DeckPolicy) -> Self {
        self.deck_policy = policy;
        self
    }
}
