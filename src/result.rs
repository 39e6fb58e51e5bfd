//! Round result types for showdown.

use crate::hand::HandStatus;

/// Who takes the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The player.
    Player,
    /// The dealer. Ties go to the dealer.
    Dealer,
}

/// How the round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Someone reached exactly 21.
    TwentyOne,
    /// Someone went over 21.
    Bust,
    /// Neither side settled; totals were compared.
    HigherScore,
}

/// Result of a round after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The winner.
    pub winner: Winner,
    /// How the winner was decided.
    pub decision: Decision,
    /// The player's final total.
    pub player_value: u8,
    /// The dealer's final total.
    pub dealer_value: u8,
    /// The player's final status.
    pub player_status: HandStatus,
    /// The dealer's final status.
    pub dealer_status: HandStatus,
}

impl RoundResult {
    /// Settles a round from both final totals.
    ///
    /// A player bust loses even if the dealer also busts; a player 21 wins
    /// even if the dealer also reaches 21.
    #[must_use]
    pub const fn settle(player_value: u8, dealer_value: u8) -> Self {
        let player_status = HandStatus::of(player_value);
        let dealer_status = HandStatus::of(dealer_value);

        let (winner, decision) = match (player_status, dealer_status) {
            (HandStatus::Bust, _) => (Winner::Dealer, Decision::Bust),
            (HandStatus::TwentyOne, _) => (Winner::Player, Decision::TwentyOne),
            (_, HandStatus::Bust) => (Winner::Player, Decision::Bust),
            (_, HandStatus::TwentyOne) => (Winner::Dealer, Decision::TwentyOne),
            (HandStatus::Live, HandStatus::Live) => {
                if player_value > dealer_value {
                    (Winner::Player, Decision::HigherScore)
                } else {
                    (Winner::Dealer, Decision::HigherScore)
                }
            }
        };

        Self {
            winner,
            decision,
            player_value,
            dealer_value,
            player_status,
            dealer_status,
        }
    }
}
