//! Hand evaluation.

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: usize = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += usize::from(card.rank.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// Computes the best total of a hand.
///
/// Aces count 11 until the total would exceed 21, then drop to 1 one at a
/// time. An empty hand is worth 0.
#[must_use]
pub fn hand_total(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the hand holds an ace still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether the hand is over 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    hand_total(cards) > 21
}

/// Returns whether the hand is a two-card 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_total(cards) == 21
}
