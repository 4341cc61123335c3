//! Game events and the observer bus.
//!
//! Every state mutation the engine performs is announced as a `GameEvent`.
//! Delivery is synchronous and in subscriber-registration order, and the
//! game state is fully updated before the first event for that mutation is
//! emitted, so an observer always sees a consistent engine.
//!
//! The subscriber list is owned exclusively by the game. Subscriptions are
//! handle-based (`ObserverId`) and can only change between turns - there is
//! no way to mutate the list while a dispatch is in flight.
//!
//! `EventLog` is a ready-made recording observer for tests, replays, and
//! debugging.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::board::TileId;
use crate::core::PlayerId;

/// How a `PlayerMoved` event came about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// A plain dice-driven move.
    Roll,
    /// Relocation up a ladder.
    LadderClimb,
    /// Relocation down a snake.
    SnakeSlide,
    /// Reflection backward after overshooting the final tile.
    BounceBack,
}

/// Why money changed hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferReason {
    Rent,
    Tax,
    StartBonus,
    PassGo,
    Purchase,
}

/// Everything the engine announces to its observers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    GameReset,
    PlayerAdded {
        player: PlayerId,
    },
    DiceRolled {
        player: PlayerId,
        value: u32,
    },
    PlayerMoved {
        player: PlayerId,
        from: TileId,
        to: TileId,
        steps: u32,
        kind: MoveKind,
    },
    TurnChanged {
        player: PlayerId,
    },
    PropertyPurchased {
        player: PlayerId,
        tile: TileId,
        price: i64,
    },
    /// `from`/`to` of `None` is the bank.
    MoneyTransfer {
        from: Option<PlayerId>,
        to: Option<PlayerId>,
        amount: i64,
        reason: TransferReason,
    },
    PlayerBankrupt {
        player: PlayerId,
    },
    PlayerWon {
        winner: PlayerId,
    },
    GameEnded {
        winner: Option<PlayerId>,
    },
}

/// A subscriber to the game's event stream.
///
/// Handlers run synchronously inside `play_turn` and must not block. The
/// engine treats delivery as fire-and-forget: game state is already
/// updated when a handler runs, and nothing is rolled back on its behalf.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Handle returned by `add_observer`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// The game-owned subscriber list.
#[derive(Default)]
pub struct Observers {
    entries: Vec<(ObserverId, Box<dyn GameObserver>)>,
    next_id: u64,
}

impl Observers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber; later events reach it after all earlier
    /// registrations.
    pub fn add(&mut self, observer: Box<dyn GameObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Unsubscribe. Returns `false` if the handle was already removed.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Fan an event out to every subscriber in registration order.
    pub fn notify(&mut self, event: &GameEvent) {
        for (_, observer) in &mut self.entries {
            observer.on_event(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

/// A recording observer.
///
/// Clones share the same buffer, so a test can register one clone with the
/// game and inspect the other afterwards. The engine is single-threaded,
/// making `Rc<RefCell<_>>` the right sharing primitive.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Whether any recorded event satisfies `predicate`.
    pub fn any(&self, predicate: impl FnMut(&GameEvent) -> bool) -> bool {
        self.events.borrow().iter().any(predicate)
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
