//! Player identity and per-game player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players. Ids are synthetic
//! and assigned by the game when a player joins; two players with the same
//! display name remain distinguishable.
//!
//! ## Player
//!
//! The mutable per-player record: current tile, turn flags, and the money
//! ledger used by the economy variant. The ladder variant simply leaves the
//! money fields untouched.

use serde::{Deserialize, Serialize};

use crate::board::TileId;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player added is `PlayerId(0)`,
/// which is also that player's position in the game's turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant in a game.
///
/// Created via `add_player` before the game starts, placed on the board's
/// start tile by `start_game`, and mutated every turn thereafter. Players
/// are never removed mid-game; a bankrupt player stays in the roster and is
/// skipped by turn advancement.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    /// Synthetic id, doubling as the index into the turn order.
    pub id: PlayerId,
    /// Display name. Non-empty, but not required to be unique.
    pub name: String,
    /// The tile the player stands on. `None` until the game starts.
    pub current_tile: Option<TileId>,
    /// Pending skip flag; consumed by the next `play_turn` for this player.
    pub skip_next_turn: bool,
    /// Money balance (economy variant). Never negative.
    pub money: i64,
    /// Set when a payment drains the balance to zero (economy variant).
    pub bankrupt: bool,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            current_tile: None,
            skip_next_turn: false,
            money: 0,
            bankrupt: false,
        }
    }

    /// Whether the player can take a normal turn (placed and solvent).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current_tile.is_some() && !self.bankrupt
    }
}
