//! Shared turn state machine.
//!
//! `GameCore` owns everything both rule variants have in common: the board,
//! the ordered player roster, the turn cursor, the dice, the phase, and the
//! observer list. Variants (`LadderGame`, `MonopolyGame`) compose a core
//! and drive it through the `pub(crate)` mechanics here.
//!
//! ## Phases
//!
//! `NotStarted -> InProgress -> Finished`, with `reset` returning to
//! `NotStarted`. Players can only join while `NotStarted`; `reset` clears
//! the roster and drops the board, so fresh ones must be supplied before
//! the next start.
//!
//! ## Money
//!
//! Every transfer goes through [`GameCore::transfer`], which clamps the
//! payment to the payer's balance, marks the payer bankrupt when the
//! balance hits zero, and emits the `MoneyTransfer` / `PlayerBankrupt`
//! events. Actions never touch a balance directly.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::actions::TileAction;
use crate::board::{Board, TileId};
use crate::core::{Dice, Player, PlayerId};
use crate::events::{GameEvent, GameObserver, MoveKind, Observers, ObserverId, TransferReason};

/// How many further tile actions a relocation resolves.
///
/// A roll's landing action always resolves; if it relocates the player
/// (ladder, snake, or a bounce), the destination's action resolves too,
/// and the chain stops there. A ladder dropping onto a snake's head slides
/// down once; whatever waits at the snake's tail stays dormant.
pub const MAX_CHAIN_HOPS: u8 = 1;

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Finished,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GamePhase::NotStarted => "not started",
            GamePhase::InProgress => "in progress",
            GamePhase::Finished => "finished",
        };
        f.write_str(label)
    }
}

/// State shared by every rule variant.
pub struct GameCore {
    board: Option<Board>,
    players: Vec<Player>,
    current: usize,
    dice: Dice,
    phase: GamePhase,
    winner: Option<PlayerId>,
    observers: Observers,
}

impl GameCore {
    #[must_use]
    pub fn new(board: Board, dice: Dice) -> Self {
        Self {
            board: Some(board),
            players: Vec::new(),
            current: 0,
            dice,
            phase: GamePhase::NotStarted,
            winner: None,
            observers: Observers::new(),
        }
    }

    // === Read access ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// The attached board, shared read-only with renderers and layouts.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player whose turn is current.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    /// The dice, for querying the last roll.
    #[must_use]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    /// Look up a player by id.
    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players
            .get(id.index())
            .ok_or_else(|| GameError::invalid_state(format!("{id} is not in the roster")))
    }

    // === Roster and lifecycle ===

    /// Add a player to the roster. Only valid before the game starts.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, GameError> {
        self.expect_phase(GamePhase::NotStarted)?;
        if name.trim().is_empty() {
            return Err(GameError::EmptyPlayerName);
        }
        if self.players.len() >= usize::from(u8::MAX) {
            return Err(GameError::invalid_state("roster is full"));
        }
        let id = PlayerId::new(self.players.len() as u8);
        self.players.push(Player::new(id, name));
        self.emit(GameEvent::PlayerAdded { player: id });
        Ok(id)
    }

    /// Attach a fresh board after a reset. Only valid before the start.
    pub fn set_board(&mut self, board: Board) -> Result<(), GameError> {
        self.expect_phase(GamePhase::NotStarted)?;
        self.board = Some(board);
        Ok(())
    }

    /// Transition to `InProgress`: seat every player on the start tile.
    ///
    /// Seating does not trigger the start tile's action; landing effects
    /// only fire on moves made during play.
    pub(crate) fn start(&mut self) -> Result<(), GameError> {
        self.expect_phase(GamePhase::NotStarted)?;
        if self.players.is_empty() {
            return Err(GameError::invalid_state("cannot start a game with no players"));
        }
        let board = self.board_ref()?;
        let start = board.start();
        let end = board.end();
        if board.tile(start).is_none() {
            return Err(GameError::invalid_state(format!("start {start} is missing from the board")));
        }
        if board.tile(end).is_none() {
            return Err(GameError::invalid_state(format!("end {end} is missing from the board")));
        }
        for player in &mut self.players {
            player.current_tile = Some(start);
            player.skip_next_turn = false;
        }
        self.current = 0;
        self.winner = None;
        self.phase = GamePhase::InProgress;
        self.emit(GameEvent::GameStarted);
        Ok(())
    }

    /// Return to `NotStarted`, clearing the roster, board, and cursor.
    ///
    /// Observers stay registered across resets so presentation layers keep
    /// listening through a rematch.
    pub fn reset(&mut self) {
        self.players.clear();
        self.board = None;
        self.current = 0;
        self.winner = None;
        self.phase = GamePhase::NotStarted;
        self.emit(GameEvent::GameReset);
    }

    pub(crate) fn expect_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                found: self.phase,
            })
        }
    }

    // === Observers ===

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) -> ObserverId {
        self.observers.add(observer)
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.observers.notify(&event);
    }

    // === Turn mechanics ===

    pub(crate) fn board_ref(&self) -> Result<&Board, GameError> {
        self.board
            .as_ref()
            .ok_or_else(|| GameError::invalid_state("no board attached"))
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        self.players
            .get_mut(id.index())
            .ok_or_else(|| GameError::invalid_state(format!("{id} is not in the roster")))
    }

    pub(crate) fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub(crate) fn current_player_id(&self) -> Result<PlayerId, GameError> {
        self.players
            .get(self.current)
            .map(|p| p.id)
            .ok_or_else(|| GameError::invalid_state("turn cursor points at no player"))
    }

    /// Roll the dice for `player` and announce the result.
    pub(crate) fn roll_for(&mut self, player: PlayerId) -> u32 {
        let value = self.dice.roll();
        self.emit(GameEvent::DiceRolled { player, value });
        value
    }

    /// If the current player carries a pending skip flag, consume it and
    /// pass the turn without rolling. Returns whether the turn was skipped.
    pub(crate) fn consume_pending_skip(&mut self) -> Result<bool, GameError> {
        let id = self.current_player_id()?;
        let player = self.player_mut(id)?;
        if !player.skip_next_turn {
            return Ok(false);
        }
        player.skip_next_turn = false;
        self.advance_turn()?;
        Ok(true)
    }

    /// Move a player `steps` tiles forward and resolve the landing action.
    ///
    /// `steps < 0` is an [`GameError::InvalidMove`]; `steps == 0` is a
    /// no-op; an unplaced player is [`GameError::NotPlaced`]. Stepping off
    /// the end of a finite path stops at the last reachable tile.
    pub fn move_player(&mut self, player: PlayerId, steps: i64) -> Result<(), GameError> {
        if steps < 0 {
            return Err(GameError::InvalidMove(steps));
        }
        if steps == 0 {
            return Ok(());
        }
        let from = self
            .player(player)?
            .current_tile
            .ok_or(GameError::NotPlaced(player))?;
        let steps = steps as u32;
        let dest = self.board_ref()?.destination_from(from, steps)?;
        self.relocate(player, dest, steps, MoveKind::Roll)?;
        self.resolve_landing(player, dest, MAX_CHAIN_HOPS)
    }

    /// Put a player on `to`, emitting the corresponding `PlayerMoved`.
    ///
    /// The tile being left has no leave-effects today; the move event is
    /// the only observable trace of departure.
    pub(crate) fn relocate(
        &mut self,
        player: PlayerId,
        to: TileId,
        steps: u32,
        kind: MoveKind,
    ) -> Result<(), GameError> {
        if self.board_ref()?.tile(to).is_none() {
            return Err(GameError::invalid_state(format!("{to} is not on the board")));
        }
        let record = self.player_mut(player)?;
        let from = record.current_tile.ok_or(GameError::NotPlaced(player))?;
        record.current_tile = Some(to);
        self.emit(GameEvent::PlayerMoved {
            player,
            from,
            to,
            steps,
            kind,
        });
        Ok(())
    }

    /// Resolve the action on `tile` for the player standing on it.
    ///
    /// The single dispatch site for [`TileAction`]: the match is exhaustive
    /// so a new variant cannot land without being handled here. `hops`
    /// bounds how many further relocation-triggered actions resolve; see
    /// [`MAX_CHAIN_HOPS`].
    pub(crate) fn resolve_landing(
        &mut self,
        player: PlayerId,
        tile: TileId,
        hops: u8,
    ) -> Result<(), GameError> {
        let action = self
            .board_ref()?
            .tile(tile)
            .ok_or_else(|| GameError::invalid_state(format!("{tile} is not on the board")))?
            .action
            .clone();
        let Some(action) = action else {
            return Ok(());
        };

        match action {
            TileAction::Ladder { dest } => {
                self.relocate(player, dest, 0, MoveKind::LadderClimb)?;
                self.chain(player, dest, hops)
            }
            TileAction::Snake { dest } => {
                self.relocate(player, dest, 0, MoveKind::SnakeSlide)?;
                self.chain(player, dest, hops)
            }
            TileAction::SkipTurn => {
                // Idempotent if the flag is already set.
                self.player_mut(player)?.skip_next_turn = true;
                Ok(())
            }
            TileAction::StartBonus { amount } => {
                self.transfer(None, Some(player), amount, TransferReason::StartBonus)?;
                Ok(())
            }
            TileAction::Tax { amount } => {
                self.transfer(Some(player), None, amount, TransferReason::Tax)?;
                Ok(())
            }
            // Unowned: a purchase opportunity for the driver, never
            // auto-performed. Own property: nothing happens.
            TileAction::Property { owner: None, .. } => Ok(()),
            TileAction::Property {
                owner: Some(owner), ..
            } if owner == player => Ok(()),
            TileAction::Property {
                price,
                owner: Some(owner),
            } => {
                let rent = TileAction::rent_for(price);
                self.transfer(Some(player), Some(owner), rent, TransferReason::Rent)?;
                Ok(())
            }
        }
    }

    fn chain(&mut self, player: PlayerId, tile: TileId, hops: u8) -> Result<(), GameError> {
        if hops > 0 {
            self.resolve_landing(player, tile, hops - 1)
        } else {
            Ok(())
        }
    }

    /// Move money, clamped to what the payer actually has.
    ///
    /// `None` on either side is the bank. Returns the amount that actually
    /// moved. A payer drained to zero is marked bankrupt and announced.
    pub(crate) fn transfer(
        &mut self,
        from: Option<PlayerId>,
        to: Option<PlayerId>,
        amount: i64,
        reason: TransferReason,
    ) -> Result<i64, GameError> {
        if amount < 0 {
            return Err(GameError::NegativeAmount(amount));
        }
        let actual = match from {
            Some(payer) => amount.min(self.player(payer)?.money),
            None => amount,
        };
        if let Some(payer) = from {
            self.player_mut(payer)?.money -= actual;
        }
        if let Some(payee) = to {
            self.player_mut(payee)?.money += actual;
        }
        self.emit(GameEvent::MoneyTransfer {
            from,
            to,
            amount: actual,
            reason,
        });
        if let Some(payer) = from {
            let record = self.player_mut(payer)?;
            if amount > 0 && record.money == 0 && !record.bankrupt {
                record.bankrupt = true;
                self.emit(GameEvent::PlayerBankrupt { player: payer });
            }
        }
        Ok(actual)
    }

    /// Record the buyer on a property tile.
    pub(crate) fn record_property_owner(
        &mut self,
        tile: TileId,
        buyer: PlayerId,
    ) -> Result<(), GameError> {
        let board = self
            .board
            .as_mut()
            .ok_or_else(|| GameError::invalid_state("no board attached"))?;
        if board.set_property_owner(tile, buyer) {
            Ok(())
        } else {
            Err(GameError::NotAProperty(tile))
        }
    }

    /// Advance the cursor to the next active player.
    ///
    /// Force-finishes with no winner when nobody is left to take a turn.
    pub(crate) fn advance_turn(&mut self) -> Result<(), GameError> {
        let count = self.players.len();
        if count == 0 {
            return Err(GameError::invalid_state("no players in the game"));
        }
        for offset in 1..=count {
            let index = (self.current + offset) % count;
            if self.players[index].is_active() {
                self.current = index;
                let player = self.players[index].id;
                self.emit(GameEvent::TurnChanged { player });
                return Ok(());
            }
        }
        self.finish(None);
        Ok(())
    }

    /// Terminate the game, announcing the winner if there is one.
    pub(crate) fn finish(&mut self, winner: Option<PlayerId>) {
        self.phase = GamePhase::Finished;
        self.winner = winner;
        if let Some(winner) = winner {
            self.emit(GameEvent::PlayerWon { winner });
        }
        self.emit(GameEvent::GameEnded { winner });
    }
}

impl std::fmt::Debug for GameCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameCore")
            .field("phase", &self.phase)
            .field("players", &self.players.len())
            .field("current", &self.current)
            .field("winner", &self.winner)
            .finish()
    }
}
