//! Engine errors.
//!
//! Three families, per the error design:
//! - precondition violations (`EmptyPlayerName`, `InvalidMove`,
//!   `NegativeAmount`, `WrongPhase`) are rejected at the boundary where
//!   the value is supplied;
//! - `InvalidState` marks malformed game state (dangling tile references,
//!   missing board) - fatal for the current call, never patched over;
//! - domain-expected outcomes (insufficient funds, landing on one's own
//!   property, skip-turn consumption) are *not* errors; they are state
//!   transitions announced as events.

use thiserror::Error;

use super::core::GamePhase;
use crate::board::{BoardError, TileId};
use crate::core::PlayerId;

/// Errors surfaced by the driver API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("player name must not be empty")]
    EmptyPlayerName,

    #[error("operation requires phase {expected}, but the game is {found}")]
    WrongPhase {
        expected: GamePhase,
        found: GamePhase,
    },

    #[error("cannot move a negative number of steps ({0})")]
    InvalidMove(i64),

    #[error("{0} has not been placed on the board")]
    NotPlaced(PlayerId),

    #[error("transfer amount {0} is negative")]
    NegativeAmount(i64),

    #[error("{0} does not carry a purchasable property")]
    NotAProperty(TileId),

    #[error("the property on {0} is already owned")]
    PropertyOwned(TileId),

    #[error("{player} cannot afford the price of {price}")]
    CannotAfford { player: PlayerId, price: i64 },

    #[error("invalid game state: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

impl GameError {
    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}
