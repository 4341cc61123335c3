//! Property/economy variant.
//!
//! Players circle a looped board, collect a bonus for passing the start
//! tile, buy unowned properties, pay rent on owned ones, and drop out when
//! a payment drains them to zero. The last solvent player wins.

use super::core::{GameCore, GamePhase, MAX_CHAIN_HOPS};
use super::error::GameError;
use super::BoardGame;
use crate::actions::TileAction;
use crate::board::Board;
use crate::core::{Dice, PlayerId};
use crate::events::{GameEvent, MoveKind, TransferReason};

/// Balance every player starts with unless configured otherwise.
pub const DEFAULT_STARTING_MONEY: i64 = 1500;

/// Bonus credited for wrapping past the start tile.
pub const DEFAULT_PASS_GO_BONUS: i64 = 200;

/// The economy variant: looped board, money ledger, last-solvent-wins.
#[derive(Debug)]
pub struct MonopolyGame {
    core: GameCore,
    starting_money: i64,
    pass_go_bonus: i64,
}

impl MonopolyGame {
    #[must_use]
    pub fn new(board: Board, dice: Dice) -> Self {
        Self {
            core: GameCore::new(board, dice),
            starting_money: DEFAULT_STARTING_MONEY,
            pass_go_bonus: DEFAULT_PASS_GO_BONUS,
        }
    }

    /// Configure the starting balance. Must be non-negative.
    #[must_use]
    pub fn with_starting_money(mut self, amount: i64) -> Self {
        assert!(amount >= 0, "Starting money must be non-negative");
        self.starting_money = amount;
        self
    }

    /// Configure the pass-go bonus. Must be non-negative.
    #[must_use]
    pub fn with_pass_go_bonus(mut self, amount: i64) -> Self {
        assert!(amount >= 0, "Pass-go bonus must be non-negative");
        self.pass_go_bonus = amount;
        self
    }

    /// Buy the unowned property `player` is standing on.
    ///
    /// Landing on an unowned property is a purchase opportunity, not an
    /// automatic purchase; the driver decides and calls this. Requires
    /// sufficient funds; on success the price goes to the bank, ownership
    /// is recorded on the tile, and `PropertyPurchased` is emitted.
    pub fn buy_property(&mut self, player: PlayerId) -> Result<(), GameError> {
        self.core.expect_phase(GamePhase::InProgress)?;
        let tile = self
            .core
            .player(player)?
            .current_tile
            .ok_or(GameError::NotPlaced(player))?;

        let action = self
            .core
            .board_ref()?
            .tile(tile)
            .ok_or_else(|| GameError::invalid_state(format!("{tile} is not on the board")))?
            .action
            .clone();
        let Some(TileAction::Property { price, owner }) = action else {
            return Err(GameError::NotAProperty(tile));
        };
        if owner.is_some() {
            return Err(GameError::PropertyOwned(tile));
        }
        if self.core.player(player)?.money < price {
            return Err(GameError::CannotAfford { player, price });
        }

        self.core
            .transfer(Some(player), None, price, TransferReason::Purchase)?;
        self.core.record_property_owner(tile, player)?;
        self.core.emit(GameEvent::PropertyPurchased {
            player,
            tile,
            price,
        });
        Ok(())
    }

    /// Finish if at most one solvent player remains; otherwise pass the
    /// turn along.
    fn settle_or_advance(&mut self) -> Result<(), GameError> {
        let solvent: Vec<PlayerId> = self
            .core
            .players()
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.id)
            .collect();
        match solvent.as_slice() {
            [] => {
                self.core.finish(None);
                Ok(())
            }
            [last] if self.core.players().len() > 1 => {
                self.core.finish(Some(*last));
                Ok(())
            }
            _ => self.core.advance_turn(),
        }
    }
}

impl BoardGame for MonopolyGame {
    fn core(&self) -> &GameCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut GameCore {
        &mut self.core
    }

    fn start_game(&mut self) -> Result<(), GameError> {
        self.core.expect_phase(GamePhase::NotStarted)?;
        let starting_money = self.starting_money;
        for player in self.core.players_mut() {
            player.money = starting_money;
            player.bankrupt = false;
        }
        self.core.start()
    }

    fn play_turn(&mut self) -> Result<(), GameError> {
        if self.core.is_finished() {
            return Ok(());
        }
        self.core.expect_phase(GamePhase::InProgress)?;

        let player = self.core.current_player_id()?;
        if self.core.player(player)?.bankrupt {
            // Cursor parked on an ineligible player; just move along.
            return self.core.advance_turn();
        }
        if self.core.consume_pending_skip()? {
            return Ok(());
        }

        let from = self
            .core
            .player(player)?
            .current_tile
            .ok_or(GameError::NotPlaced(player))?;
        let steps = self.core.roll_for(player);
        let board = self.core.board_ref()?;
        let go = board.start();
        let dest = board.destination_from(from, steps)?;

        // Wrapping past the loop origin pays out before the move lands,
        // unless the destination is the start tile itself (its own action
        // pays the bonus there).
        if dest.raw() < from.raw() && dest != go {
            self.core
                .transfer(None, Some(player), self.pass_go_bonus, TransferReason::PassGo)?;
        }

        self.core.relocate(player, dest, steps, MoveKind::Roll)?;
        self.core.resolve_landing(player, dest, MAX_CHAIN_HOPS)?;

        self.settle_or_advance()
    }
}
