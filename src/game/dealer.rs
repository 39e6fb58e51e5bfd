use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::Hand;
use crate::result::RoundResult;

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws while below [`GameOptions::dealer_stands_on`] and
    /// never chooses otherwise. Draws nothing if already at or above it.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// [`GameOptions::dealer_stands_on`]: crate::GameOptions::dealer_stands_on
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        while self.dealer.value() < self.options.dealer_stands_on {
            let card = self.draw()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        self.set_state(GameState::RoundOver);

        Ok(drawn_cards)
    }

    /// Compares both hands and names the winner.
    ///
    /// Calling it again before `clear_round` returns the same result.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let result = RoundResult::settle(self.player.value(), self.dealer.value());
        log::info!(
            "round over: {:?} wins by {:?} ({} vs {})",
            result.winner,
            result.decision,
            result.player_value,
            result.dealer_value
        );

        Ok(result)
    }
}
