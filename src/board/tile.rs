//! Tiles: the nodes of a board's movement path.

use serde::{Deserialize, Serialize};

use crate::actions::TileAction;

/// Unique identifier for a tile within a board.
///
/// All cross-references between tiles (the forward link, an action's
/// destination) are `TileId` lookups into the board's arena, never direct
/// ownership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// 2-D placement metadata for layout-dependent renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub row: u16,
    pub column: u16,
}

/// A node in the board's movement path.
///
/// Tiles are constructed through `BoardBuilder` and frozen once the board
/// is built; the only field that changes during play is the owner recorded
/// inside a `Property` action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    /// Forward link in movement order. `None` only at the end of a linear
    /// path; looped boards link every tile.
    pub next: Option<TileId>,
    /// At most one action per tile.
    pub action: Option<TileAction>,
    /// Optional grid position for renderers.
    pub placement: Option<Placement>,
    /// Optional label ("Go", "Boardwalk", ...).
    pub name: Option<String>,
}

impl Tile {
    /// Create a bare tile with no link, action, placement, or name.
    #[must_use]
    pub fn new(id: TileId) -> Self {
        Self {
            id,
            next: None,
            action: None,
            placement: None,
            name: None,
        }
    }
}
