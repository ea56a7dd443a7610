pub mod card;
pub mod deck;
pub mod hand;
pub mod session;
pub mod table;

use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use thiserror::Error;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use hand::{Hand, HandOwner};
pub use session::Session;
pub use table::{Decisions, EventHandler, RoundPhase, Table};

/// Table parameters that the casino, not the player, decides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rule {
    /// Multiplier applied to the bet when the player is dealt a natural.
    /// Winnings are truncated to a whole amount.
    pub payout_blackjack: f64,
    /// The dealer keeps hitting while her hand value is below this.
    pub dealer_stand_min: u8,
}

impl Default for Rule {
    fn default() -> Self {
        Rule {
            payout_blackjack: 1.5,
            dealer_stand_min: 17,
        }
    }
}

/// A player decision during their turn. This variant of the game offers
/// no split, double down or surrender.
#[derive(Debug, Clone, Copy, PartialEq, Serialize_enum_str, Deserialize_enum_str)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Hit,
    Stand,
}

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize_enum_str, Deserialize_enum_str)]
pub enum Outcome {
    BlackjackWin,
    PlayerWin,
    PlayerBust,
    DealerWin,
    Tie,
}

/// What a settled round reports back to the session loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundSummary {
    pub outcome: Outcome,
    pub bet: u32,
    /// Net change to the bankroll. Negative when the player loses the bet.
    pub delta: i64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("tried to deal {requested} cards with only {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("bet {bet} is outside [1, {max}]")]
    InvalidBet { bet: u32, max: u32 },
    #[error("operation is allowed at the {expected:?} phase, but the round is at {actual:?}")]
    WrongPhase {
        expected: RoundPhase,
        actual: RoundPhase,
    },
}
