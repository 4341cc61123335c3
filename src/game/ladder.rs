//! Ladder/chute race variant.
//!
//! Players race along a linear chain; the first to rest exactly on the end
//! tile wins. Overshooting the end reflects the player backward by the
//! excess steps (the bounce-back rule); a reflection that would carry past
//! the start tile stops on it.

use super::core::{GameCore, GamePhase, MAX_CHAIN_HOPS};
use super::error::GameError;
use super::BoardGame;
use crate::board::{Board, TileId};
use crate::core::Dice;
use crate::events::MoveKind;

/// The race variant: linear board, bounce-back, first-to-the-end wins.
#[derive(Debug)]
pub struct LadderGame {
    core: GameCore,
}

impl LadderGame {
    #[must_use]
    pub fn new(board: Board, dice: Dice) -> Self {
        Self {
            core: GameCore::new(board, dice),
        }
    }
}

impl BoardGame for LadderGame {
    fn core(&self) -> &GameCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut GameCore {
        &mut self.core
    }

    fn start_game(&mut self) -> Result<(), GameError> {
        self.core.start()
    }

    fn play_turn(&mut self) -> Result<(), GameError> {
        if self.core.is_finished() {
            return Ok(());
        }
        self.core.expect_phase(GamePhase::InProgress)?;
        if self.core.consume_pending_skip()? {
            return Ok(());
        }

        let player = self.core.current_player_id()?;
        let from = self
            .core
            .player(player)?
            .current_tile
            .ok_or(GameError::NotPlaced(player))?;
        let steps = self.core.roll_for(player);
        let end = self.core.board_ref()?.end();

        let target = u64::from(from.raw()) + u64::from(steps);
        if target > u64::from(end.raw()) {
            // Walk to the end, then reflect backward by the overshoot. A
            // reflection that would pass the start tile stops on it.
            let overshoot = (target - u64::from(end.raw())) as u32;
            self.core.relocate(player, end, steps - overshoot, MoveKind::Roll)?;
            let bounce = TileId(end.raw().saturating_sub(overshoot));
            self.core
                .relocate(player, bounce, end.raw() - bounce.raw(), MoveKind::BounceBack)?;
            self.core.resolve_landing(player, bounce, MAX_CHAIN_HOPS)?;
        } else {
            let dest = self.core.board_ref()?.destination_from(from, steps)?;
            self.core.relocate(player, dest, steps, MoveKind::Roll)?;
            self.core.resolve_landing(player, dest, MAX_CHAIN_HOPS)?;
        }

        // Winning means resting exactly on the end tile; a bounce always
        // rests short of it, so only direct hits (or a ladder finishing
        // there) count.
        if self.core.player(player)?.current_tile == Some(end) {
            self.core.finish(Some(player));
            return Ok(());
        }

        self.core.advance_turn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::TileAction;
    use crate::board::BoardBuilder;
    use crate::core::PlayerId;

    fn line(len: u32) -> Board {
        BoardBuilder::new("line").linear_path(len).build().unwrap()
    }

    #[test]
    fn test_exact_landing_wins() {
        // End tile is 10; a roll of 4 from tile 6 lands exactly.
        let mut game = LadderGame::new(line(11), Dice::scripted(vec![6, 4]));
        game.add_player("Ada").unwrap();
        game.start_game().unwrap();

        game.play_turn().unwrap(); // 0 -> 6
        game.play_turn().unwrap(); // 6 -> 10, wins

        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(PlayerId(0)));
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = LadderGame::new(line(50), Dice::scripted(vec![2]));
        game.add_player("Ada").unwrap();
        game.add_player("Grace").unwrap();
        game.start_game().unwrap();

        assert_eq!(game.current_player().unwrap().id, PlayerId(0));
        game.play_turn().unwrap();
        assert_eq!(game.current_player().unwrap().id, PlayerId(1));
        game.play_turn().unwrap();
        assert_eq!(game.current_player().unwrap().id, PlayerId(0));
    }

    #[test]
    fn test_skip_tile_costs_next_turn() {
        let board = BoardBuilder::new("skip")
            .linear_path(20)
            .action(2, TileAction::SkipTurn)
            .build()
            .unwrap();
        let mut game = LadderGame::new(board, Dice::scripted(vec![2]));
        game.add_player("Ada").unwrap();
        game.add_player("Grace").unwrap();
        game.start_game().unwrap();

        game.play_turn().unwrap(); // Ada lands on the skip tile
        assert!(game.players()[0].skip_next_turn);
        game.play_turn().unwrap(); // Grace's normal turn
        game.play_turn().unwrap(); // Ada's turn is consumed by the flag

        assert!(!game.players()[0].skip_next_turn);
        assert_eq!(game.players()[0].current_tile, Some(TileId(2))); // no roll happened
        assert_eq!(game.current_player().unwrap().id, PlayerId(1));
    }

    #[test]
    fn test_deep_overshoot_stops_at_start() {
        // End tile is 2; a roll of 6 from tile 0 reflects 4 tiles backward,
        // which would pass tile 0. The bounce stops there instead.
        let mut game = LadderGame::new(line(3), Dice::scripted(vec![6]));
        game.add_player("Ada").unwrap();
        game.start_game().unwrap();

        game.play_turn().unwrap();

        assert_eq!(game.players()[0].current_tile, Some(TileId(0)));
        assert!(!game.is_finished());
    }

    #[test]
    fn test_play_turn_after_finish_is_noop() {
        let mut game = LadderGame::new(line(3), Dice::scripted(vec![2]));
        game.add_player("Ada").unwrap();
        game.start_game().unwrap();

        game.play_turn().unwrap();
        assert!(game.is_finished());
        let tile = game.players()[0].current_tile;
        game.play_turn().unwrap();
        assert_eq!(game.players()[0].current_tile, tile);
    }

    #[test]
    fn test_play_turn_before_start_fails() {
        let mut game = LadderGame::new(line(10), Dice::scripted(vec![1]));
        game.add_player("Ada").unwrap();
        assert!(matches!(
            game.play_turn(),
            Err(GameError::WrongPhase { .. })
        ));
    }
}
