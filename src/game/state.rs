//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Hands are empty; waiting for the opening deal.
    Dealing,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and can be settled.
    RoundOver,
}
