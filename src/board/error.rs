//! Board construction errors.

use thiserror::Error;

use super::tile::TileId;

/// Errors detected while assembling or validating a board.
///
/// These all indicate a construction bug in the board definition, not a
/// recoverable player error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("duplicate tile id {0}")]
    DuplicateTile(TileId),

    #[error("{0} is referenced but not part of the board")]
    UnknownTile(TileId),

    #[error("no start tile declared")]
    MissingStart,

    #[error("no end tile declared")]
    MissingEnd,

    #[error("movement chain stops at {0} without reaching the end tile")]
    BrokenChain(TileId),

    #[error("movement chain revisits {0} without closing the loop at the start tile")]
    CyclicChain(TileId),

    #[error("loop closes at the start tile without passing the end tile")]
    LoopSkipsEnd,

    #[error("{tile} configures a negative amount ({amount})")]
    NegativeAmount { tile: TileId, amount: i64 },
}
