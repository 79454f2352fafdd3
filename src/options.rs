//! Game configuration options.

/// Highest stand total the dealer will play to.
pub const MAX_STAND_TOTAL: u8 = 21;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_balance(250)
///     .with_fresh_deck_each_round(true);
/// assert_eq!(options.starting_balance, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Chips each player starts with when no balance is given.
    pub starting_balance: u64,
    /// The dealer draws while below this total, soft or hard alike.
    pub dealer_stands_on: u8,
    /// Whether every round starts from a freshly shuffled deck.
    ///
    /// When `false` the deck is continuous and only reshuffles once empty.
    pub fresh_deck_each_round: bool,
    /// Name prefix used when a game is started without player names.
    pub default_player_name: &'static str,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: 100,
            dealer_stands_on: 17,
            fresh_deck_each_round: false,
            default_player_name: "Player",
        }
    }
}

impl GameOptions {
    /// Sets the default starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(500);
    /// assert_eq!(options.starting_balance, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: u64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the total the dealer stands on, capped at 21.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(250);
    /// assert_eq!(options.dealer_stands_on, 21);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = if total > MAX_STAND_TOTAL {
            MAX_STAND_TOTAL
        } else {
            total
        };
        self
    }

    /// Sets whether each round starts from a freshly shuffled deck.
    #[must_use]
    pub const fn with_fresh_deck_each_round(mut self, fresh: bool) -> Self {
        self.fresh_deck_each_round = fresh;
        self
    }

    /// Sets the name used for unnamed players.
    #[must_use]
    pub const fn with_default_player_name(mut self, name: &'static str) -> Self {
        self.default_player_name = name;
        self
    }
}
