//! The turn state machine and its two rule variants.
//!
//! `GameCore` holds everything the variants share; `BoardGame` is the
//! driver-facing API. A driver adds players, starts the game, and calls
//! `play_turn` until `is_finished`, consuming the event stream through
//! registered observers along the way.

pub mod core;
pub mod error;
pub mod ladder;
pub mod monopoly;

pub use self::core::{GameCore, GamePhase, MAX_CHAIN_HOPS};
pub use error::GameError;
pub use ladder::LadderGame;
pub use monopoly::{MonopolyGame, DEFAULT_PASS_GO_BONUS, DEFAULT_STARTING_MONEY};

use crate::core::{Player, PlayerId};
use crate::events::{GameObserver, ObserverId};

/// Driver API common to every rule variant.
///
/// `start_game` and `play_turn` are the variant hooks; everything else is
/// provided by delegation to the shared [`GameCore`]. Each `play_turn`
/// call runs to completion - movement, action resolution, and event
/// delivery - before returning.
pub trait BoardGame {
    /// The shared state machine.
    fn core(&self) -> &GameCore;

    /// Mutable access to the shared state machine.
    fn core_mut(&mut self) -> &mut GameCore;

    /// Place the roster on the board and enter `InProgress`.
    fn start_game(&mut self) -> Result<(), GameError>;

    /// Resolve one complete turn for the current player.
    fn play_turn(&mut self) -> Result<(), GameError>;

    /// Add a player to the roster. Only valid before the game starts.
    fn add_player(&mut self, name: &str) -> Result<PlayerId, GameError> {
        self.core_mut().add_player(name)
    }

    /// Return to `NotStarted`, dropping the roster and board.
    fn reset_game(&mut self) {
        self.core_mut().reset();
    }

    fn is_finished(&self) -> bool {
        self.core().is_finished()
    }

    fn winner(&self) -> Option<PlayerId> {
        self.core().winner()
    }

    fn current_player(&self) -> Option<&Player> {
        self.core().current_player()
    }

    /// Players in turn order.
    fn players(&self) -> &[Player] {
        self.core().players()
    }

    fn add_observer(&mut self, observer: Box<dyn GameObserver>) -> ObserverId {
        self.core_mut().add_observer(observer)
    }

    fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.core_mut().remove_observer(id)
    }
}
