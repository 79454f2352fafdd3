use alloc::string::ToString;
use alloc::vec::Vec;

use rand::RngCore;
use tracing::{debug, info};

use crate::options::MAX_STAND_TOTAL;
use crate::player::{Outcome, Player};
use crate::result::{RoundResult, Settlement};

use super::{Game, Phase, end_game};

const ROUND_COMPLETE: &str = "Round complete!";

/// Decides a hand against the dealer and returns the chips credited back.
///
/// A bust loses before the dealer's hand is considered. Wins pay even money
/// whether or not the hand was a natural.
const fn resolve(player: &Player, dealer_total: u8, dealer_bust: bool) -> (Outcome, u64) {
    if player.is_bust() {
        (Outcome::Lose, 0)
    } else if dealer_bust || player.total > dealer_total {
        (Outcome::Win, player.bet.saturating_mul(2))
    } else if player.total == dealer_total {
        (Outcome::Push, player.bet)
    } else {
        (Outcome::Lose, 0)
    }
}

impl<R: RngCore> Game<R> {
    /// Dealer draws until reaching the stand total, then the round settles.
    ///
    /// Soft and hard totals are treated alike.
    pub(super) fn dealer_play(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        let stands_on = self.options.dealer_stands_on.min(MAX_STAND_TOTAL);
        while state.dealer.total < stands_on {
            let card = self.deck.deal();
            state.dealer.take(card);
            debug!(%card, total = state.dealer.total, "dealer draws");
        }

        self.settle();
    }

    /// Pays out every hand dealt this round and clears the bets.
    fn settle(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        let dealer_total = state.dealer.total;
        let dealer_bust = state.dealer.is_bust();
        let mut settlements = Vec::new();

        for player in state.players.iter_mut().filter(|p| p.in_round()) {
            let (outcome, payout) = resolve(player, dealer_total, dealer_bust);
            settlements.push(Settlement {
                player_id: player.id,
                outcome,
                bet: player.bet,
                payout,
                player_total: player.total,
            });

            player.balance = player.balance.saturating_add(payout);
            player.bet = 0;
            player.winner = Some(outcome);
            debug!(player = %player.name, ?outcome, payout, balance = player.balance, "settled");
        }

        info!(dealer_total, dealer_bust, hands = settlements.len(), "round settled");

        state.phase = Phase::Results;
        if state.players.iter().all(|p| p.balance == 0) {
            end_game(state);
        } else {
            state.message = ROUND_COMPLETE.to_string();
        }

        self.last_result = Some(RoundResult {
            dealer_total,
            dealer_bust,
            settlements,
        });
    }
}
