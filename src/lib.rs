//! # rust-boardgame
//!
//! A turn-based board game engine supporting two rule variants - a
//! ladder/chute race game and a property/economy game - on one topology
//! and turn-progression model.
//!
//! ## Design Principles
//!
//! 1. **Single-Site Dispatch**: tile actions are a closed sum type
//!    resolved by one exhaustive `match`; adding a variant forces every
//!    call site to be revisited.
//!
//! 2. **Arena Topology**: a board owns its tiles in an id-keyed arena;
//!    all cross-references (forward links, action destinations) are id
//!    lookups, never ownership cycles.
//!
//! 3. **Events Over Inspection**: every state mutation is announced on a
//!    synchronous observer bus; presentation layers subscribe instead of
//!    polling engine internals. State is fully updated before the first
//!    event for a mutation is emitted.
//!
//! 4. **Explicit Wiring**: money-moving actions delegate to the owning
//!    game's ledger - no process-wide registries, so a game is trivially
//!    testable in isolation.
//!
//! ## Architecture
//!
//! The engine is single-threaded and fully synchronous: `play_turn` runs
//! to completion (movement, nested action resolution, event delivery)
//! before returning. Dice are the only source of nondeterminism, and they
//! are seeded or scripted for reproducibility.
//!
//! ## Modules
//!
//! - `core`: player identity and deterministic dice
//! - `board`: tiles, the id-keyed arena, builder, preset boards
//! - `actions`: the closed set of tile-triggered behaviors
//! - `events`: event taxonomy and the observer bus
//! - `game`: the shared turn state machine and the two rule variants

pub mod actions;
pub mod board;
pub mod core;
pub mod events;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Dice, Die, Player, PlayerId};

pub use crate::board::{Board, BoardBuilder, BoardError, Placement, Tile, TileId};

pub use crate::actions::{TileAction, RENT_DIVISOR};

pub use crate::events::{
    EventLog, GameEvent, GameObserver, MoveKind, Observers, ObserverId, TransferReason,
};

pub use crate::game::{
    BoardGame, GameCore, GameError, GamePhase, LadderGame, MonopolyGame,
    DEFAULT_PASS_GO_BONUS, DEFAULT_STARTING_MONEY, MAX_CHAIN_HOPS,
};
