//! The deck cards are dealt from.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, KING, Suit};
use crate::error::EmptyDeckError;

/// An ordered pile of cards. The top of the deck is the end of the pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck: every suit in [`Suit::ALL`] order,
    /// each from 2 through Ace.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 2..=KING {
                cards.push(Card::new(suit, rank));
            }
            cards.push(Card::new(suit, 1));
        }

        Self { cards }
    }

    /// Creates a full deck and shuffles it.
    #[must_use]
    pub fn new_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.reshuffle(rng);
        deck
    }

    /// Creates a stacked deck that yields `draws` in the given order.
    ///
    /// No check is made for duplicates.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Shuffles the remaining cards in place.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the card is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Iterates over the remaining cards, bottom first.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn has_every_card_once(deck: &Deck) -> bool {
        deck.len() == DECK_SIZE
            && Suit::ALL.iter().all(|&suit| {
                (1..=KING).all(|rank| {
                    deck.iter()
                        .filter(|card| **card == Card::new(suit, rank))
                        .count()
                        == 1
                })
            })
    }

    #[test]
    fn ordered_deck_covers_every_suit_and_rank() {
        assert!(has_every_card_once(&Deck::ordered()));
    }

    #[test]
    fn shuffled_deck_is_a_permutation() {
        for seed in 0..8 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let deck = Deck::new_shuffled(&mut rng);
            assert!(has_every_card_once(&deck));
        }
    }

    #[test]
    fn shuffling_depends_on_the_seed() {
        let a = Deck::new_shuffled(&mut ChaCha8Rng::seed_from_u64(1));
        let b = Deck::new_shuffled(&mut ChaCha8Rng::seed_from_u64(1));
        let c = Deck::new_shuffled(&mut ChaCha8Rng::seed_from_u64(2));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn draw_removes_the_top_card() {
        let mut deck = Deck::new_shuffled(&mut ChaCha8Rng::seed_from_u64(3));

        for remaining in (0..DECK_SIZE).rev() {
            let card = deck.draw().unwrap();
            assert_eq!(deck.len(), remaining);
            assert!(!deck.contains(&card));
        }

        assert!(deck.is_empty());
        assert_eq!(deck.draw().unwrap_err(), EmptyDeckError);
    }

    #[test]
    fn stacked_deck_draws_in_order() {
        let first = Card::new(Suit::Hearts, 9);
        let second = Card::new(Suit::Clubs, 1);
        let mut deck = Deck::from_draws(&[first, second]);

        assert_eq!(deck.draw(), Ok(first));
        assert_eq!(deck.draw(), Ok(second));
        assert_eq!(deck.draw(), Err(EmptyDeckError));
    }

    #[test]
    fn reshuffle_keeps_remaining_cards() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut deck = Deck::new_shuffled(&mut rng);
        let drawn = [deck.draw().unwrap(), deck.draw().unwrap()];

        deck.reshuffle(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE - 2);
        assert!(drawn.iter().all(|card| !deck.contains(card)));
    }
}
