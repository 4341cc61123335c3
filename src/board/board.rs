//! Board: an arena of tiles plus topology metadata.
//!
//! A board is assembled by `BoardBuilder` and frozen by `build()`, which
//! validates the movement chain before handing the board out. During play
//! the board is read-only; the single exception is the owner recorded on a
//! `Property` action when a player buys the tile.
//!
//! ## Topology
//!
//! Following `next` from the start tile forms either:
//! - a **linear path** ending at the end tile (ladder variant), or
//! - a **closed loop** back to the start tile (economy variant, enabling
//!   "pass go").
//!
//! `build()` rejects anything else: chains that stop short of the end
//! tile, chains that revisit a tile without closing the loop, and loops
//! that never pass the end tile.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::tile::{Placement, Tile, TileId};
use crate::actions::TileAction;
use crate::core::PlayerId;

/// An immutable, fully-linked collection of tiles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    tiles: FxHashMap<TileId, Tile>,
    start: TileId,
    end: TileId,
    rows: u16,
    columns: u16,
    name: String,
    description: String,
}

impl Board {
    /// Look up a tile by id.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// The tile every player is placed on at game start.
    #[must_use]
    pub fn start(&self) -> TileId {
        self.start
    }

    /// The final tile (ladder variant) or the loop's last tile before it
    /// wraps back to start (economy variant).
    #[must_use]
    pub fn end(&self) -> TileId {
        self.end
    }

    /// Grid height, if the board declares dimensions.
    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Grid width, if the board declares dimensions.
    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Iterate over all tiles in unspecified order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Follow `next` from `from` up to `steps` times.
    ///
    /// Stops early at the natural end of a finite path; that is the last
    /// reachable tile, not an error. Errors only when a tile id resolves
    /// to nothing, which indicates a construction bug.
    pub fn destination_from(&self, from: TileId, steps: u32) -> Result<TileId, BoardError> {
        let mut current = self.tile(from).ok_or(BoardError::UnknownTile(from))?;
        for _ in 0..steps {
            match current.next {
                Some(next) => {
                    current = self.tile(next).ok_or(BoardError::UnknownTile(next))?;
                }
                None => break,
            }
        }
        Ok(current.id)
    }

    /// Record the buyer on a property tile.
    ///
    /// Returns `false` if the tile does not exist or carries no property;
    /// callers validate before mutating.
    pub(crate) fn set_property_owner(&mut self, id: TileId, buyer: PlayerId) -> bool {
        match self.tiles.get_mut(&id) {
            Some(Tile {
                action: Some(TileAction::Property { owner, .. }),
                ..
            }) => {
                *owner = Some(buyer);
                true
            }
            _ => false,
        }
    }
}

/// Builder for `Board`.
///
/// Records tiles, links, actions, and metadata; all validation is deferred
/// to `build()` so definitions read declaratively.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    tiles: FxHashMap<TileId, Tile>,
    start: Option<TileId>,
    end: Option<TileId>,
    rows: u16,
    columns: u16,
    name: String,
    description: String,
    /// First structural error hit while recording, surfaced by `build()`.
    error: Option<BoardError>,
}

impl BoardBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn dimensions(mut self, rows: u16, columns: u16) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// Add a bare tile.
    #[must_use]
    pub fn tile(mut self, id: u32) -> Self {
        let id = TileId(id);
        if self.tiles.insert(id, Tile::new(id)).is_some() && self.error.is_none() {
            self.error = Some(BoardError::DuplicateTile(id));
        }
        self
    }

    /// Add `count` tiles with ids `0..count`, linked in a forward chain,
    /// with start 0 and end `count - 1`.
    #[must_use]
    pub fn linear_path(mut self, count: u32) -> Self {
        for id in 0..count {
            self = self.tile(id);
            if id + 1 < count {
                self = self.link(id, id + 1);
            }
        }
        self.start(0).end(count.saturating_sub(1))
    }

    /// Add `count` tiles with ids `0..count`, linked in a closed loop back
    /// to tile 0, with start 0 and end `count - 1`.
    #[must_use]
    pub fn looped_path(self, count: u32) -> Self {
        self.linear_path(count).link(count.saturating_sub(1), 0)
    }

    /// Set the forward link of `from` to `to`.
    #[must_use]
    pub fn link(mut self, from: u32, to: u32) -> Self {
        match self.tiles.get_mut(&TileId(from)) {
            Some(tile) => tile.next = Some(TileId(to)),
            None if self.error.is_none() => {
                self.error = Some(BoardError::UnknownTile(TileId(from)));
            }
            None => {}
        }
        self
    }

    /// Bind an action to a tile, replacing any previous one.
    #[must_use]
    pub fn action(mut self, id: u32, action: TileAction) -> Self {
        match self.tiles.get_mut(&TileId(id)) {
            Some(tile) => tile.action = Some(action),
            None if self.error.is_none() => {
                self.error = Some(BoardError::UnknownTile(TileId(id)));
            }
            None => {}
        }
        self
    }

    /// Record a tile's grid position.
    #[must_use]
    pub fn placement(mut self, id: u32, row: u16, column: u16) -> Self {
        if let Some(tile) = self.tiles.get_mut(&TileId(id)) {
            tile.placement = Some(Placement { row, column });
        }
        self
    }

    /// Label a tile.
    #[must_use]
    pub fn tile_name(mut self, id: u32, name: impl Into<String>) -> Self {
        if let Some(tile) = self.tiles.get_mut(&TileId(id)) {
            tile.name = Some(name.into());
        }
        self
    }

    #[must_use]
    pub fn start(mut self, id: u32) -> Self {
        self.start = Some(TileId(id));
        self
    }

    #[must_use]
    pub fn end(mut self, id: u32) -> Self {
        self.end = Some(TileId(id));
        self
    }

    /// Validate and freeze the board.
    pub fn build(self) -> Result<Board, BoardError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let start = self.start.ok_or(BoardError::MissingStart)?;
        let end = self.end.ok_or(BoardError::MissingEnd)?;

        for tile in self.tiles.values() {
            if let Some(next) = tile.next {
                if !self.tiles.contains_key(&next) {
                    return Err(BoardError::UnknownTile(next));
                }
            }
            if let Some(action) = &tile.action {
                if let Some(dest) = action.destination() {
                    if !self.tiles.contains_key(&dest) {
                        return Err(BoardError::UnknownTile(dest));
                    }
                }
                if let Some(amount) = action.configured_amount() {
                    if amount < 0 {
                        return Err(BoardError::NegativeAmount {
                            tile: tile.id,
                            amount,
                        });
                    }
                }
            }
        }

        Self::validate_chain(&self.tiles, start, end)?;

        Ok(Board {
            tiles: self.tiles,
            start,
            end,
            rows: self.rows,
            columns: self.columns,
            name: self.name,
            description: self.description,
        })
    }

    /// Walk the chain from `start`: accept a linear path that stops at
    /// `end`, or a closed loop back to `start` that passes `end`.
    fn validate_chain(
        tiles: &FxHashMap<TileId, Tile>,
        start: TileId,
        end: TileId,
    ) -> Result<(), BoardError> {
        let mut seen = FxHashSet::default();
        let mut current = start;

        loop {
            if !seen.insert(current) {
                if current == start {
                    return if seen.contains(&end) {
                        Ok(())
                    } else {
                        Err(BoardError::LoopSkipsEnd)
                    };
                }
                return Err(BoardError::CyclicChain(current));
            }

            let tile = tiles.get(&current).ok_or(BoardError::UnknownTile(current))?;
            match tile.next {
                Some(next) => current = next,
                None if current == end => return Ok(()),
                None => return Err(BoardError::BrokenChain(current)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_board_builds() {
        let board = BoardBuilder::new("line").linear_path(10).build().unwrap();
        assert_eq!(board.start(), TileId(0));
        assert_eq!(board.end(), TileId(9));
        assert_eq!(board.tile_count(), 10);
        assert_eq!(board.tile(TileId(9)).unwrap().next, None);
    }

    #[test]
    fn test_looped_board_builds() {
        let board = BoardBuilder::new("ring").looped_path(8).build().unwrap();
        assert_eq!(board.tile(TileId(7)).unwrap().next, Some(TileId(0)));
    }

    #[test]
    fn test_path_connectivity() {
        // Following next from start exactly end-id times reaches the end.
        let board = BoardBuilder::new("line").linear_path(20).build().unwrap();
        assert_eq!(
            board.destination_from(board.start(), 19).unwrap(),
            board.end()
        );
    }

    #[test]
    fn test_destination_stops_at_path_end() {
        let board = BoardBuilder::new("line").linear_path(5).build().unwrap();
        assert_eq!(board.destination_from(TileId(3), 10).unwrap(), TileId(4));
    }

    #[test]
    fn test_destination_wraps_on_loop() {
        let board = BoardBuilder::new("ring").looped_path(6).build().unwrap();
        assert_eq!(board.destination_from(TileId(4), 3).unwrap(), TileId(1));
    }

    #[test]
    fn test_destination_zero_steps() {
        let board = BoardBuilder::new("line").linear_path(5).build().unwrap();
        assert_eq!(board.destination_from(TileId(2), 0).unwrap(), TileId(2));
    }

    #[test]
    fn test_destination_unknown_tile() {
        let board = BoardBuilder::new("line").linear_path(5).build().unwrap();
        assert_eq!(
            board.destination_from(TileId(99), 1),
            Err(BoardError::UnknownTile(TileId(99)))
        );
    }

    #[test]
    fn test_duplicate_tile_rejected() {
        let err = BoardBuilder::new("dup")
            .tile(0)
            .tile(0)
            .start(0)
            .end(0)
            .build()
            .unwrap_err();
        assert_eq!(err, BoardError::DuplicateTile(TileId(0)));
    }

    #[test]
    fn test_missing_start_rejected() {
        let err = BoardBuilder::new("bad").tile(0).end(0).build().unwrap_err();
        assert_eq!(err, BoardError::MissingStart);
    }

    #[test]
    fn test_broken_chain_rejected() {
        // Chain 0 -> 1 stops, but the declared end is 2.
        let err = BoardBuilder::new("bad")
            .tile(0)
            .tile(1)
            .tile(2)
            .link(0, 1)
            .start(0)
            .end(2)
            .build()
            .unwrap_err();
        assert_eq!(err, BoardError::BrokenChain(TileId(1)));
    }

    #[test]
    fn test_inner_cycle_rejected() {
        // 0 -> 1 -> 2 -> 1 cycles without returning to start.
        let err = BoardBuilder::new("bad")
            .tile(0)
            .tile(1)
            .tile(2)
            .link(0, 1)
            .link(1, 2)
            .link(2, 1)
            .start(0)
            .end(2)
            .build()
            .unwrap_err();
        assert_eq!(err, BoardError::CyclicChain(TileId(1)));
    }

    #[test]
    fn test_loop_must_pass_end() {
        // 0 -> 1 -> 0 loops but never visits the declared end tile 2.
        let err = BoardBuilder::new("bad")
            .tile(0)
            .tile(1)
            .tile(2)
            .link(0, 1)
            .link(1, 0)
            .link(2, 0)
            .start(0)
            .end(2)
            .build()
            .unwrap_err();
        assert_eq!(err, BoardError::LoopSkipsEnd);
    }

    #[test]
    fn test_dangling_action_destination_rejected() {
        let err = BoardBuilder::new("bad")
            .linear_path(5)
            .action(2, TileAction::Ladder { dest: TileId(50) })
            .build()
            .unwrap_err();
        assert_eq!(err, BoardError::UnknownTile(TileId(50)));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = BoardBuilder::new("bad")
            .linear_path(5)
            .action(2, TileAction::Tax { amount: -10 })
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BoardError::NegativeAmount {
                tile: TileId(2),
                amount: -10
            }
        );
    }

    #[test]
    fn test_metadata() {
        let board = BoardBuilder::new("classic")
            .description("a test board")
            .dimensions(2, 5)
            .linear_path(10)
            .tile_name(0, "Start")
            .placement(0, 1, 0)
            .build()
            .unwrap();
        assert_eq!(board.name(), "classic");
        assert_eq!(board.description(), "a test board");
        assert_eq!((board.rows(), board.columns()), (2, 5));
        assert_eq!(board.tile(TileId(0)).unwrap().name.as_deref(), Some("Start"));
        assert_eq!(
            board.tile(TileId(0)).unwrap().placement,
            Some(Placement { row: 1, column: 0 })
        );
    }

    #[test]
    fn test_set_property_owner() {
        let mut board = BoardBuilder::new("ring")
            .looped_path(4)
            .action(2, TileAction::property(100))
            .build()
            .unwrap();

        assert!(board.set_property_owner(TileId(2), PlayerId(1)));
        assert_eq!(
            board.tile(TileId(2)).unwrap().action,
            Some(TileAction::Property {
                price: 100,
                owner: Some(PlayerId(1))
            })
        );

        // Not a property, no tile: both refused.
        assert!(!board.set_property_owner(TileId(1), PlayerId(0)));
        assert!(!board.set_property_owner(TileId(40), PlayerId(0)));
    }

    #[test]
    fn test_serde_round_trip() {
        let board = BoardBuilder::new("ring")
            .looped_path(4)
            .action(1, TileAction::property(60))
            .build()
            .unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tile_count(), 4);
        assert_eq!(back.start(), board.start());
        assert_eq!(back.tile(TileId(1)), board.tile(TileId(1)));
    }
}
