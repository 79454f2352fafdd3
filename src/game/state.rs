//! Game state types.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::player::{Dealer, Player};

/// Stage of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Players place bets one at a time.
    Betting,
    /// Players act on their hands one at a time.
    Playing,
    /// Dealer plays out their hand.
    Dealer,
    /// Round is settled and waiting for the next round.
    Results,
    /// Every player is out of chips.
    Finished,
}

/// Snapshot of a table, as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Seats in turn order.
    pub players: Vec<Player>,
    /// The dealer.
    pub dealer: Dealer,
    /// Current stage of the round.
    pub phase: Phase,
    /// Index of the active player while betting or playing.
    pub current_player_index: usize,
    /// Status line for the players.
    pub message: String,
    /// Whether every player is out of chips.
    pub all_players_finished: bool,
}

impl GameState {
    /// Returns the player whose turn it is, if any.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_active)
    }

    /// Looks up a player by seat id.
    #[must_use]
    pub fn player(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Sum of every balance and outstanding bet.
    #[must_use]
    pub fn chips_in_play(&self) -> u128 {
        self.players
            .iter()
            .map(|p| u128::from(p.balance) + u128::from(p.bet))
            .sum()
    }

    pub(crate) fn player_index(&self, player_id: u32) -> Option<usize> {
        self.players.iter().position(|p| p.id == player_id)
    }

    /// Makes `index` the only active player.
    pub(crate) fn activate(&mut self, index: usize) {
        self.current_player_index = index;
        for (i, player) in self.players.iter_mut().enumerate() {
            player.is_active = i == index;
        }
    }

    pub(crate) fn deactivate_all(&mut self) {
        for player in &mut self.players {
            player.is_active = false;
        }
    }
}
