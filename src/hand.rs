//! Hand valuation shared by the player and the dealer.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::card::{ACE, Card};

/// The best total a hand can reach without busting.
pub const TWENTY_ONE: u8 = 21;

const fn card_value(rank: u8) -> u8 {
    match rank {
        ACE => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card_value(card.rank));
    }

    while value > TWENTY_ONE && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= TWENTY_ONE;
    (value, is_soft)
}

/// Calculates the total of a set of cards.
///
/// Aces are counted as 11 if possible without busting, otherwise as 1.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the cards hold an Ace still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Under 21; the hand can still take cards.
    Live,
    /// Exactly 21.
    TwentyOne,
    /// Over 21.
    Bust,
}

impl HandStatus {
    /// Classifies a hand total.
    #[must_use]
    pub const fn of(value: u8) -> Self {
        if value > TWENTY_ONE {
            Self::Bust
        } else if value == TWENTY_ONE {
            Self::TwentyOne
        } else {
            Self::Live
        }
    }

    /// Returns whether the hand is finished, either at 21 or bust.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        !matches!(self, Self::Live)
    }
}

/// Anything holding cards at the table.
///
/// Totals are derived from [`Hand::cards`] on every call and never stored.
pub trait Hand {
    /// The name shown in messages.
    fn name(&self) -> &str;

    /// The cards currently held, in the order received.
    fn cards(&self) -> &[Card];

    /// Calculates the value of the hand.
    fn value(&self) -> u8 {
        hand_value(self.cards())
    }

    /// Returns whether the hand is over 21.
    fn is_bust(&self) -> bool {
        self.value() > TWENTY_ONE
    }

    /// Returns whether the hand is exactly 21.
    fn is_twenty_one(&self) -> bool {
        self.value() == TWENTY_ONE
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    fn is_soft(&self) -> bool {
        is_soft(self.cards())
    }

    /// Classifies the hand.
    fn status(&self) -> HandStatus {
        HandStatus::of(self.value())
    }

    /// Message announcing a bust.
    fn busted_message(&self) -> String {
        format!("Sorry {}, you busted!", self.name())
    }

    /// Message announcing a win on exactly 21.
    fn win_message(&self) -> String {
        format!("Congratulations {}, you win!", self.name())
    }

    /// Message announcing a win on the higher total.
    fn higher_score_message(&self) -> String {
        format!(
            "Congratulations {}, your score is higher so you win!",
            self.name()
        )
    }

    /// Message announcing that the hand stays on its total.
    fn stay_message(&self) -> String {
        format!("{} has to stay on {}", self.name(), self.value())
    }
}
