use alloc::format;

use rand::RngCore;
use tracing::{debug, instrument, warn};

use crate::error::GameError;

use super::{Game, Phase};

impl<R: RngCore> Game<R> {
    /// Places a bet for the active player.
    ///
    /// Bets are taken in seat order. Once every player with chips has bet,
    /// two cards go to each of them and two to the dealer, and play starts
    /// with the first player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBet`] if the table is not betting, the
    /// player is unknown or not the active player, already bet this round,
    /// or the amount is not in `1..=balance`. A bet whose winnings would not
    /// fit in a `u64` balance is also rejected.
    #[instrument(skip(self))]
    pub fn place_bet(&mut self, player_id: u32, amount: i64) -> Result<(), GameError> {
        self.try_place_bet(player_id, amount)
            .inspect_err(|err| warn!(%err, "bet rejected"))
    }

    fn try_place_bet(&mut self, player_id: u32, amount: i64) -> Result<(), GameError> {
        let state = self.state.as_mut().ok_or(GameError::NoGameInProgress)?;
        if state.phase != Phase::Betting {
            return Err(GameError::InvalidBet);
        }

        let index = state
            .player_index(player_id)
            .ok_or(GameError::InvalidBet)?;
        let amount = u64::try_from(amount).map_err(|_| GameError::InvalidBet)?;

        let player = &mut state.players[index];
        if !player.is_active || player.bet != 0 || amount == 0 || amount > player.balance {
            return Err(GameError::InvalidBet);
        }

        player.balance -= amount;
        player.bet = amount;
        if !player.can_cover_win() {
            player.balance += amount;
            player.bet = 0;
            return Err(GameError::InvalidBet);
        }
        debug!(player = %player.name, amount, balance = player.balance, "bet placed");

        // Seats that sat out are already finished.
        let waiting = state
            .players
            .iter()
            .position(|p| p.bet == 0 && !p.is_finished);

        if let Some(next) = waiting {
            state.activate(next);
            state.message = format!("{}'s turn to bet!", state.players[next].name);
        } else {
            self.deal_round();
        }

        Ok(())
    }

    /// Deals the opening hands and hands the first turn out.
    fn deal_round(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        state.dealer.clear();
        for player in state.players.iter_mut().filter(|p| p.bet > 0) {
            player.take(self.deck.deal());
            player.take(self.deck.deal());
            player.is_active = false;
            player.is_finished = false;
            player.can_double_down = player.balance >= player.bet;
            debug!(player = %player.name, total = player.total, "hand dealt");
        }
        state.dealer.take(self.deck.deal());
        state.dealer.take(self.deck.deal());

        state.phase = Phase::Playing;
        self.next_player_or_dealer();
    }
}
