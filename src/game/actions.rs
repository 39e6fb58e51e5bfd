use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// The turn ends on its own once the player reaches 21 or busts.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck
    /// is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player.add_card(card);

        if self.player.status().is_settled() {
            self.set_state(GameState::DealerTurn);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.set_state(GameState::DealerTurn);
        Ok(())
    }
}
