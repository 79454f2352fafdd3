//! Round settlement records and the response envelope.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::game::GameState;
use crate::player::Outcome;

/// How a single player's hand was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    /// The player's seat id.
    pub player_id: u32,
    /// The outcome of the hand.
    pub outcome: Outcome,
    /// The stake at settlement time (doubled if the player doubled down).
    pub bet: u64,
    /// Chips credited back to the balance (stake plus winnings).
    pub payout: u64,
    /// The player's final total.
    pub player_total: u8,
}

impl Settlement {
    /// Net chip change for the round (positive = profit).
    #[must_use]
    pub fn net(&self) -> i128 {
        i128::from(self.payout) - i128::from(self.bet)
    }
}

/// Result of the entire round after the dealer has played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// One entry per player dealt into the round, in seat order.
    pub settlements: Vec<Settlement>,
}

/// The reply to every intent.
///
/// On failure `game_state` is the unchanged prior state (absent if no game
/// was ever started) and `message` explains the rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    /// Whether the intent was applied.
    pub success: bool,
    /// The state after the intent.
    pub game_state: Option<GameState>,
    /// Rejection reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
