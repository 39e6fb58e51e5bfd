use crate::error::DealError;
use crate::hand::Hand;

use super::{Game, GameState, OPENING_CARDS};

impl Game {
    /// Deals two cards each, alternating player and dealer.
    ///
    /// If either hand is already settled (21 or bust) the round skips
    /// straight to `RoundOver`; otherwise it is the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealing state or there are not
    /// enough cards in the deck.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.cards_remaining() < OPENING_CARDS {
            log::warn!("{} cards left, cannot deal", self.cards_remaining());
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);
            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        log::debug!(
            "dealt: player {}, dealer {}",
            self.player.value(),
            self.dealer.value()
        );

        if self.player.status().is_settled() || self.dealer.status().is_settled() {
            self.set_state(GameState::RoundOver);
        } else {
            self.set_state(GameState::PlayerTurn);
        }

        Ok(())
    }
}
