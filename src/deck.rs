//! Deck construction, shuffling and dealing.

use alloc::vec::Vec;

use rand::RngCore;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Builds all 52 rank and suit combinations and shuffles them.
///
/// The shuffle walks from the last index down to 1, swapping each position
/// with a uniformly chosen index at or below it (Fisher–Yates), so every
/// permutation is equally likely for a uniform `rng`.
pub fn new_deck<R: RngCore + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }

    cards.shuffle(rng);
    cards
}

/// A continuously reshuffled single deck.
///
/// Cards are dealt from the end of the remaining sequence. When the deck runs
/// out it is replaced by a freshly shuffled one, so dealing never fails.
#[derive(Debug, Clone)]
pub struct Deck<R> {
    cards: Vec<Card>,
    rng: R,
}

impl<R: RngCore> Deck<R> {
    /// Creates a shuffled deck driven by `rng`.
    pub fn new(mut rng: R) -> Self {
        let cards = new_deck(&mut rng);
        Self { cards, rng }
    }

    /// Replaces the remaining cards with a freshly shuffled deck.
    pub fn reshuffle(&mut self) {
        self.cards = new_deck(&mut self.rng);
        debug!(cards = self.cards.len(), "deck reshuffled");
    }

    /// Removes and returns the next card, reshuffling first if empty.
    pub fn deal(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            self.reshuffle();
        }
    }

    /// Replaces the remaining cards so that `draws` are dealt in order.
    ///
    /// Once the stacked cards run out the deck reshuffles as usual.
    pub fn stack(&mut self, draws: &[Card]) {
        self.cards = draws.iter().rev().copied().collect();
    }

    /// Returns the number of cards left before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
