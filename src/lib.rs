//! A turn-based blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] session that runs betting, player turns,
//! dealer play and payouts for one or more local players. A presentation
//! layer issues intents (bet, hit, stand, double down, next round) and
//! renders the returned [`GameState`].
//!
//! # Example
//!
//! ```
//! use bjtable::{Game, GameOptions, Phase};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start_game(["Player 1"], 100);
//! game.place_bet(1, 10).unwrap();
//! game.stand(1).unwrap();
//!
//! let state = game.state().unwrap();
//! assert_eq!(state.phase, Phase::Results);
//! assert!(state.players[0].winner.is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, new_deck};
pub use error::GameError;
pub use game::{Game, GameState, Phase};
pub use hand::{hand_total, is_blackjack, is_bust, is_soft};
pub use options::GameOptions;
pub use player::{Dealer, Outcome, Player};
pub use result::{GameResponse, RoundResult, Settlement};
