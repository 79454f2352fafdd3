use alloc::format;

use rand::RngCore;
use tracing::{debug, instrument, warn};

use crate::card::Card;
use crate::error::GameError;

use super::{Game, GameState, Phase, turn_message};

/// Finds the seat of `player_id` if that player may act right now.
fn acting_seat(state: &GameState, player_id: u32) -> Result<usize, GameError> {
    if state.phase != Phase::Playing {
        return Err(GameError::InvalidAction);
    }

    let index = state
        .player_index(player_id)
        .ok_or(GameError::InvalidAction)?;
    let player = &state.players[index];
    if !player.is_active || player.is_finished {
        return Err(GameError::InvalidAction);
    }

    Ok(index)
}

impl<R: RngCore> Game<R> {
    /// Player action: Hit (draw a card).
    ///
    /// Returns the card drawn. A bust ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidAction`] if the player is not the active,
    /// unfinished player of a round in play.
    #[instrument(skip(self))]
    pub fn hit(&mut self, player_id: u32) -> Result<Card, GameError> {
        self.try_hit(player_id)
            .inspect_err(|err| warn!(%err, "hit rejected"))
    }

    fn try_hit(&mut self, player_id: u32) -> Result<Card, GameError> {
        let state = self.state.as_mut().ok_or(GameError::NoGameInProgress)?;
        let index = acting_seat(state, player_id)?;

        let card = self.deck.deal();
        let player = &mut state.players[index];
        player.take(card);
        player.can_double_down = false;
        debug!(player = %player.name, %card, total = player.total, "hit");

        if player.is_bust() {
            debug!(player = %player.name, "bust");
            player.finish();
            self.next_player_or_dealer();
        } else {
            state.message = format!("{} drew {card}.", player.name);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidAction`] if the player is not the active,
    /// unfinished player of a round in play.
    #[instrument(skip(self))]
    pub fn stand(&mut self, player_id: u32) -> Result<(), GameError> {
        self.try_stand(player_id)
            .inspect_err(|err| warn!(%err, "stand rejected"))
    }

    fn try_stand(&mut self, player_id: u32) -> Result<(), GameError> {
        let state = self.state.as_mut().ok_or(GameError::NoGameInProgress)?;
        let index = acting_seat(state, player_id)?;

        let player = &mut state.players[index];
        player.finish();
        debug!(player = %player.name, total = player.total, "stand");

        self.next_player_or_dealer();
        Ok(())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// Only allowed on the first two cards. Returns the card drawn.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidAction`] if the player may not act, and
    /// [`GameError::CannotDoubleDown`] if the hand is past its first two
    /// cards or the balance does not cover the bet again.
    #[instrument(skip(self))]
    pub fn double_down(&mut self, player_id: u32) -> Result<Card, GameError> {
        self.try_double_down(player_id)
            .inspect_err(|err| warn!(%err, "double down rejected"))
    }

    fn try_double_down(&mut self, player_id: u32) -> Result<Card, GameError> {
        let state = self.state.as_mut().ok_or(GameError::NoGameInProgress)?;
        let index = acting_seat(state, player_id)?;

        let player = &mut state.players[index];
        if !player.can_double_down || player.hand.len() != 2 || player.balance < player.bet {
            return Err(GameError::CannotDoubleDown);
        }

        player.balance -= player.bet;
        player.bet *= 2;
        if !player.can_cover_win() {
            player.bet /= 2;
            player.balance += player.bet;
            return Err(GameError::CannotDoubleDown);
        }

        let card = self.deck.deal();
        player.take(card);
        player.can_double_down = false;
        player.finish();
        debug!(player = %player.name, %card, total = player.total, bet = player.bet, "double down");

        self.next_player_or_dealer();
        Ok(card)
    }

    /// Hands the turn to the first unfinished player, or to the dealer once
    /// everyone is done.
    pub(super) fn next_player_or_dealer(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        if let Some(index) = state.players.iter().position(|p| !p.is_finished) {
            state.activate(index);
            state.message = turn_message(&state.players[index]);
            debug!(player = %state.players[index].name, "turn");
        } else {
            state.phase = Phase::Dealer;
            state.deactivate_all();
            self.dealer_play();
        }
    }
}
