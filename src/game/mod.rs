//! Game engine and state management.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument, warn};

use crate::deck::Deck;
use crate::error::GameError;
use crate::options::GameOptions;
use crate::player::{Dealer, Player};
use crate::result::{GameResponse, RoundResult};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{GameState, Phase};

const PLACE_BETS: &str = "Place your bets!";
const OUT_OF_CHIPS: &str = "Game over! All players are out of money.";

/// A blackjack table session for one or more local players.
///
/// The session owns the deck and the authoritative [`GameState`]. Every
/// intent either applies completely or is rejected with a [`GameError`]
/// leaving the state untouched. Sessions share nothing, so any number can
/// run side by side.
///
/// # Example
///
/// ```
/// use bjtable::{Game, GameOptions, Phase};
///
/// let mut game = Game::new(GameOptions::default(), 7);
/// game.start_game(["Ada", "Grace"], 100);
/// game.place_bet(1, 10).unwrap();
/// game.place_bet(2, 10).unwrap();
/// assert_eq!(game.state().unwrap().phase, Phase::Playing);
/// ```
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    /// The deck cards are dealt from.
    pub deck: Deck<R>,
    /// Table rules.
    pub options: GameOptions,
    state: Option<GameState>,
    last_result: Option<RoundResult>,
}

impl Game<ChaCha8Rng> {
    /// Creates a session whose shuffles are seeded with `seed`.
    ///
    /// Two sessions with the same seed and the same intents play out
    /// identically.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Game<R> {
    /// Creates a session that shuffles with the given random source.
    pub fn with_rng(options: GameOptions, rng: R) -> Self {
        Self {
            deck: Deck::new(rng),
            options,
            state: None,
            last_result: None,
        }
    }

    /// Starts a fresh game, discarding any game in progress.
    ///
    /// Players are seated in the order given and numbered from 1. With no
    /// names a single player is seated under the default player name.
    #[instrument(skip(self, names))]
    pub fn start_game<I, S>(&mut self, names: I, starting_balance: u64) -> &GameState
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            names.push(format!("{} 1", self.options.default_player_name));
        }

        let players = (1..)
            .zip(names)
            .map(|(id, name)| Player::new(id, name, starting_balance))
            .collect::<Vec<_>>();

        info!(players = players.len(), starting_balance, "game started");

        self.deck.reshuffle();
        self.last_result = None;

        let state = self.state.insert(GameState {
            players,
            dealer: Dealer::new(),
            phase: Phase::Betting,
            current_player_index: 0,
            message: String::new(),
            all_players_finished: false,
        });
        open_betting(state);
        state
    }

    /// Starts a fresh game with the configured starting balance.
    pub fn start_default<I, S>(&mut self, names: I) -> &GameState
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let balance = self.options.starting_balance;
        self.start_game(names, balance)
    }

    /// Clears the table for another round; balances carry over.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] once every player is out of chips,
    /// [`GameError::InvalidAction`] while a round is still being played, and
    /// [`GameError::NoGameInProgress`] before a game is started.
    #[instrument(skip(self))]
    pub fn next_round(&mut self) -> Result<(), GameError> {
        self.try_next_round()
            .inspect_err(|err| warn!(%err, "next round rejected"))
    }

    fn try_next_round(&mut self) -> Result<(), GameError> {
        let state = self.state.as_mut().ok_or(GameError::NoGameInProgress)?;
        if state.all_players_finished {
            return Err(GameError::GameOver);
        }
        if state.phase != Phase::Results {
            return Err(GameError::InvalidAction);
        }

        if self.options.fresh_deck_each_round {
            self.deck.reshuffle();
        }
        self.last_result = None;
        open_betting(state);
        info!("next round");
        Ok(())
    }

    /// Returns the current state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoGameInProgress`] before a game is started.
    pub fn state(&self) -> Result<&GameState, GameError> {
        self.state.as_ref().ok_or(GameError::NoGameInProgress)
    }

    /// Returns how the last round was settled, until the next round starts.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Wraps the outcome of an intent in the response sent to clients.
    ///
    /// ```
    /// use bjtable::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 1);
    /// let response = game.respond(game.state());
    /// assert!(!response.success);
    /// assert_eq!(response.message.as_deref(), Some("No game in progress."));
    /// ```
    pub fn respond<T>(&self, result: Result<T, GameError>) -> GameResponse {
        GameResponse {
            success: result.is_ok(),
            game_state: self.state.clone(),
            message: result.err().map(|err| err.to_string()),
        }
    }
}

/// Resets every seat for betting and hands the first turn out.
///
/// Players without chips sit the round out. If nobody has chips the game
/// is over.
fn open_betting(state: &mut GameState) {
    for player in &mut state.players {
        player.reset();
        if player.balance == 0 {
            player.is_finished = true;
        }
    }
    state.dealer.clear();

    match state.players.iter().position(|p| !p.is_finished) {
        Some(index) => {
            state.phase = Phase::Betting;
            state.all_players_finished = false;
            state.activate(index);
            state.message = PLACE_BETS.to_string();
        }
        None => end_game(state),
    }
}

fn end_game(state: &mut GameState) {
    state.phase = Phase::Finished;
    state.all_players_finished = true;
    state.deactivate_all();
    state.message = OUT_OF_CHIPS.to_string();
    info!("all players are out of chips");
}

fn turn_message(player: &Player) -> String {
    if player.has_blackjack() {
        format!("Blackjack! {}'s turn!", player.name)
    } else {
        format!("{}'s turn!", player.name)
    }
}
