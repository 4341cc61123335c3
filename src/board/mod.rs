//! Board topology: tiles, the id-keyed tile arena, and preset boards.
//!
//! A `Board` owns every `Tile` in an arena keyed by `TileId`; all
//! cross-references (forward links, action destinations) are id lookups,
//! never shared ownership. Boards are immutable once built - resetting a
//! game's topology means supplying a fresh board.

pub mod board;
pub mod error;
pub mod presets;
pub mod tile;

pub use board::{Board, BoardBuilder};
pub use error::BoardError;
pub use tile::{Placement, Tile, TileId};
