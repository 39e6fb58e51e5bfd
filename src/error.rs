//! Error types for game operations.

use thiserror::Error;

/// A card was requested from a deck with no cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck for the opening deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// The deck ran out mid-deal.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during dealer play and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that end a console session.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The opening deal failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error("player action failed: {0}")]
    Action(#[from] ActionError),
    /// Dealer play or showdown failed.
    #[error("showdown failed: {0}")]
    Showdown(#[from] ShowdownError),
}

#[cfg(feature = "std")]
impl ConsoleError {
    /// Returns whether the error ends only the current round.
    ///
    /// Engine errors abort the round; I/O errors end the session.
    #[must_use]
    pub const fn is_round_fatal(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
