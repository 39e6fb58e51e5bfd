//! The two seats at the table.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;

/// The dealer's fixed name.
pub const DEALER_NAME: &str = "Dealer";

/// The human player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    cards: Vec<Card>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl Hand for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// The dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dealer {
    cards: Vec<Card>,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl Hand for Dealer {
    fn name(&self) -> &str {
        DEALER_NAME
    }

    fn cards(&self) -> &[Card] {
        &self.cards
    }
}
