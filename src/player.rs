//! Player and dealer seats.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::hand::{hand_total, is_blackjack};

/// Settled result of a player's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Player beat the dealer or the dealer busted.
    Win,
    /// Player busted or the dealer finished higher.
    Lose,
    /// Equal totals; the stake is returned.
    Push,
}

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// 1-based seat id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Cards held this round.
    pub hand: Vec<Card>,
    /// Best total of `hand`.
    pub total: u8,
    /// Chips not currently staked.
    pub balance: u64,
    /// Chips staked this round.
    pub bet: u64,
    /// Whether the player may still double down.
    pub can_double_down: bool,
    /// Whether it is this player's turn.
    pub is_active: bool,
    /// Whether the player is done acting this round.
    pub is_finished: bool,
    /// Outcome once the round is settled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Outcome>,
}

impl Player {
    pub(crate) fn new(id: u32, name: String, balance: u64) -> Self {
        Self {
            id,
            name,
            hand: Vec::new(),
            total: 0,
            balance,
            bet: 0,
            can_double_down: false,
            is_active: false,
            is_finished: false,
            winner: None,
        }
    }

    /// Adds a card and recomputes the total.
    pub(crate) fn take(&mut self, card: Card) {
        self.hand.push(card);
        self.total = hand_total(&self.hand);
    }

    /// Clears everything but the balance.
    pub(crate) fn reset(&mut self) {
        self.hand.clear();
        self.total = 0;
        self.bet = 0;
        self.can_double_down = false;
        self.is_active = false;
        self.is_finished = false;
        self.winner = None;
    }

    /// Marks the player done for the round.
    pub(crate) const fn finish(&mut self) {
        self.is_active = false;
        self.is_finished = true;
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > 21
    }

    /// Returns whether the first two cards total 21.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        is_blackjack(&self.hand)
    }

    /// Returns whether the balance can absorb a win on the current bet.
    pub(crate) fn can_cover_win(&self) -> bool {
        self.bet
            .checked_mul(2)
            .and_then(|payout| self.balance.checked_add(payout))
            .is_some()
    }

    /// Returns whether the player has no chips left at all.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.balance == 0 && self.bet == 0
    }

    /// Returns whether the player was dealt into the current round.
    #[must_use]
    pub fn in_round(&self) -> bool {
        !self.hand.is_empty()
    }
}

/// The dealer's seat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dealer {
    /// Cards held this round.
    pub hand: Vec<Card>,
    /// Best total of `hand`.
    pub total: u8,
}

impl Dealer {
    /// Creates an empty dealer seat.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Vec::new(),
            total: 0,
        }
    }

    pub(crate) fn take(&mut self, card: Card) {
        self.hand.push(card);
        self.total = hand_total(&self.hand);
    }

    pub(crate) fn clear(&mut self) {
        self.hand.clear();
        self.total = 0;
    }

    /// Returns the face-up card (first card dealt).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.first()
    }

    /// Returns whether the dealer is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > 21
    }

    /// Returns whether the dealer holds a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.hand)
    }
}
