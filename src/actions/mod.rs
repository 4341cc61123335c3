//! Tile actions.
//!
//! An action is a behavior bound to a tile and triggered when a player
//! lands on it. The set is closed: the game core resolves actions with a
//! single exhaustive `match`, so adding a variant forces every call site
//! to be revisited.
//!
//! Actions are immutable values carrying only the data they need. The one
//! exception is `Property`, whose `owner` field is recorded on the tile
//! when a player buys it.
//!
//! Money-moving variants (`StartBonus`, `Tax`, `Property` rent) never touch
//! a player's balance directly; resolution delegates every transfer to the
//! owning game's ledger so bankruptcy detection and event emission stay in
//! one place.

use serde::{Deserialize, Serialize};

use crate::board::TileId;
use crate::core::PlayerId;

/// Denominator applied to a property's price to obtain its rent.
pub const RENT_DIVISOR: i64 = 5;

/// A behavior triggered when a player lands on a tile.
///
/// At most one action is bound to any tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileAction {
    /// Relocate the landing player forward to `dest`.
    Ladder { dest: TileId },
    /// Relocate the landing player backward to `dest`.
    Snake { dest: TileId },
    /// Flag the landing player to sit out their next turn.
    SkipTurn,
    /// Credit `amount` to the landing player (the "Go" tile itself).
    StartBonus { amount: i64 },
    /// Debit `amount` from the landing player.
    Tax { amount: i64 },
    /// A purchasable tile. Unowned: a purchase opportunity for the driver,
    /// never auto-performed. Owned by someone else: landing pays rent of
    /// `price / 5` to the owner. Owned by the lander: a no-op.
    Property {
        price: i64,
        owner: Option<PlayerId>,
    },
}

impl TileAction {
    /// Create an unowned property.
    #[must_use]
    pub const fn property(price: i64) -> Self {
        Self::Property { price, owner: None }
    }

    /// The rent charged when landing on an owned property.
    #[must_use]
    pub const fn rent_for(price: i64) -> i64 {
        price / RENT_DIVISOR
    }

    /// Whether resolving this action can relocate the player.
    #[must_use]
    pub const fn is_relocation(&self) -> bool {
        matches!(self, Self::Ladder { .. } | Self::Snake { .. })
    }

    /// The configured amount or price, if the action carries one.
    ///
    /// Used by board validation to reject negative configuration.
    #[must_use]
    pub(crate) const fn configured_amount(&self) -> Option<i64> {
        match self {
            Self::StartBonus { amount } | Self::Tax { amount } => Some(*amount),
            Self::Property { price, .. } => Some(*price),
            Self::Ladder { .. } | Self::Snake { .. } | Self::SkipTurn => None,
        }
    }

    /// The destination tile, if the action relocates the player.
    #[must_use]
    pub(crate) const fn destination(&self) -> Option<TileId> {
        match self {
            Self::Ladder { dest } | Self::Snake { dest } => Some(*dest),
            _ => None,
        }
    }
}
