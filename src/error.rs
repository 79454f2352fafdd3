//! Error types for game operations.

use thiserror::Error;

/// Reasons an intent is rejected.
///
/// The display text of each variant is the message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// An intent arrived before any game was started.
    #[error("No game in progress.")]
    NoGameInProgress,
    /// Bet amount out of range, wrong phase, not this player's turn, or a
    /// bet was already placed this round.
    #[error("Invalid bet.")]
    InvalidBet,
    /// The player is not the active player, is already finished, or the
    /// round is not in a phase that accepts the action.
    #[error("Invalid action.")]
    InvalidAction,
    /// Double down without eligibility or with too small a balance.
    #[error("Cannot double down.")]
    CannotDoubleDown,
    /// Every player is out of chips.
    #[error("Game over.")]
    GameOver,
}
