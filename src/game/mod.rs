//! Game engine and round state management.

use alloc::string::String;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::EmptyDeckError;
use crate::options::{DeckPolicy, GameOptions};
use crate::participant::{Dealer, Player};

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::GameState;

/// Cards needed for the opening deal.
const OPENING_CARDS: usize = 4;

/// A blackjack round controller for one player against the dealer.
///
/// The game owns the deck, both seats and the random number generator. A
/// round runs `deal` → `hit`/`stand` → `dealer_play` → `showdown`, and
/// `clear_round` prepares the next one.
pub struct Game {
    /// Cards left to deal. Replace it to stack the table.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    state: GameState,
    player: Player,
    dealer: Dealer,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new("Ann", GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Dealing);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(player_name: impl Into<String>, options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new_shuffled(&mut rng);

        Self {
            deck,
            options,
            state: GameState::Dealing,
            player: Player::new(player_name),
            dealer: Dealer::new(),
            rng,
        }
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        let card = self.deck.draw();
        match card {
            Ok(card) => log::debug!("drew {card}, {} left", self.deck.len()),
            Err(_) => log::warn!("deck is empty"),
        }
        card
    }

    fn set_state(&mut self, state: GameState) {
        log::debug!("{:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Clears both hands and prepares the deck for the next round.
    ///
    /// Valid from any state, so an aborted round can be discarded. Returns the
    /// game to the `Dealing` state.
    pub fn clear_round(&mut self) {
        self.player.clear();
        self.dealer.clear();

        match self.options.deck_policy {
            DeckPolicy::FreshEachRound => {
                self.deck = Deck::new_shuffled(&mut self.rng);
                log::info!("new deck shuffled");
            }
            DeckPolicy::Continue if self.deck.len() < OPENING_CARDS => {
                self.deck = Deck::new_shuffled(&mut self.rng);
                log::info!("deck exhausted, new deck shuffled");
            }
            DeckPolicy::Continue => {
                self.deck.reshuffle(&mut self.rng);
                log::info!("deck reshuffled with {} cards left", self.deck.len());
            }
        }

        self.set_state(GameState::Dealing);
    }
}
