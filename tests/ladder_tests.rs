//! End-to-end scenarios for the ladder/chute race variant.

use rust_boardgame::{
    BoardBuilder, BoardGame, Dice, EventLog, GameEvent, LadderGame, MoveKind, PlayerId,
    TileAction, TileId,
};

/// Overshoot bounce: end tile 10, player at 9, roll of 3.
///
/// Target 12 overshoots by 2: the player first moves to the end tile,
/// then bounces back to 10 - 2 = 8, and the game is not finished.
#[test]
fn test_overshoot_bounces_back() {
    let board = BoardBuilder::new("line").linear_path(11).build().unwrap();
    // 6 + 3 puts the player on tile 9; the next 3 overshoots.
    let mut game = LadderGame::new(board, Dice::scripted(vec![6, 3, 3]));
    game.add_player("Ada").unwrap();
    game.start_game().unwrap();

    let log = EventLog::new();
    game.add_observer(Box::new(log.clone()));

    game.play_turn().unwrap(); // 0 -> 6
    game.play_turn().unwrap(); // 6 -> 9
    log.clear();
    game.play_turn().unwrap(); // 9 -> 10 -> bounce to 8

    let events = log.events();
    assert!(matches!(events[0], GameEvent::DiceRolled { value: 3, .. }));
    assert_eq!(
        events[1],
        GameEvent::PlayerMoved {
            player: PlayerId(0),
            from: TileId(9),
            to: TileId(10),
            steps: 1,
            kind: MoveKind::Roll,
        }
    );
    assert_eq!(
        events[2],
        GameEvent::PlayerMoved {
            player: PlayerId(0),
            from: TileId(10),
            to: TileId(8),
            steps: 2,
            kind: MoveKind::BounceBack,
        }
    );
    assert_eq!(game.players()[0].current_tile, Some(TileId(8)));
    assert!(!game.is_finished()); // 8 != 10
}

/// Ladder climb: tile 4 carries Ladder(dest = 9); a player at 2 rolling 2
/// moves to 4 and climbs to 9.
#[test]
fn test_ladder_climb_after_move() {
    let board = BoardBuilder::new("ladders")
        .linear_path(20)
        .action(4, TileAction::Ladder { dest: TileId(9) })
        .build()
        .unwrap();
    let mut game = LadderGame::new(board, Dice::scripted(vec![2]));
    game.add_player("Ada").unwrap();
    game.start_game().unwrap();

    let log = EventLog::new();
    game.add_observer(Box::new(log.clone()));

    game.play_turn().unwrap(); // 0 -> 2
    log.clear();
    game.play_turn().unwrap(); // 2 -> 4 -> ladder to 9

    let events = log.events();
    assert!(matches!(
        events[1],
        GameEvent::PlayerMoved {
            to: TileId(4),
            kind: MoveKind::Roll,
            ..
        }
    ));
    assert!(matches!(
        events[2],
        GameEvent::PlayerMoved {
            from: TileId(4),
            to: TileId(9),
            kind: MoveKind::LadderClimb,
            ..
        }
    ));
    assert_eq!(game.players()[0].current_tile, Some(TileId(9)));
}

/// Snakes relocate backward and announce a SnakeSlide move.
#[test]
fn test_snake_slide() {
    let board = BoardBuilder::new("snakes")
        .linear_path(20)
        .action(5, TileAction::Snake { dest: TileId(1) })
        .build()
        .unwrap();
    let mut game = LadderGame::new(board, Dice::scripted(vec![5]));
    game.add_player("Ada").unwrap();
    game.start_game().unwrap();

    let log = EventLog::new();
    game.add_observer(Box::new(log.clone()));
    game.play_turn().unwrap(); // 0 -> 5 -> slide to 1

    assert!(log.any(|e| matches!(
        e,
        GameEvent::PlayerMoved {
            kind: MoveKind::SnakeSlide,
            to: TileId(1),
            ..
        }
    )));
    assert_eq!(game.players()[0].current_tile, Some(TileId(1)));
}

/// A bounce landing on an actioned tile resolves that action.
#[test]
fn test_bounce_resolves_landing_action() {
    let board = BoardBuilder::new("bounce-snake")
        .linear_path(11)
        .action(8, TileAction::Snake { dest: TileId(3) })
        .build()
        .unwrap();
    let mut game = LadderGame::new(board, Dice::scripted(vec![6, 3, 3]));
    game.add_player("Ada").unwrap();
    game.start_game().unwrap();

    game.play_turn().unwrap(); // -> 6
    game.play_turn().unwrap(); // -> 9
    game.play_turn().unwrap(); // -> 10, bounce to 8, snake to 3

    assert_eq!(game.players()[0].current_tile, Some(TileId(3)));
}

/// A flagged player's turn passes without a roll and clears the flag.
#[test]
fn test_skip_turn_consumed_without_roll() {
    let board = BoardBuilder::new("skip")
        .linear_path(30)
        .action(3, TileAction::SkipTurn)
        .build()
        .unwrap();
    let mut game = LadderGame::new(board, Dice::scripted(vec![3]));
    game.add_player("Ada").unwrap();
    game.add_player("Grace").unwrap();
    game.start_game().unwrap();

    game.play_turn().unwrap(); // Ada -> 3, flag set
    game.play_turn().unwrap(); // Grace -> 3

    let log = EventLog::new();
    game.add_observer(Box::new(log.clone()));
    game.play_turn().unwrap(); // Ada's turn consumed by the flag

    assert!(!log.any(|e| matches!(e, GameEvent::DiceRolled { .. })));
    assert!(!log.any(|e| matches!(e, GameEvent::PlayerMoved { .. })));
    assert!(log.any(|e| matches!(
        e,
        GameEvent::TurnChanged {
            player: PlayerId(1)
        }
    )));
    assert!(!game.players()[0].skip_next_turn);
    assert_eq!(game.players()[0].current_tile, Some(TileId(3)));
}

/// Exact landing on the end tile wins and announces it.
#[test]
fn test_exact_landing_wins_and_announces() {
    let board = BoardBuilder::new("short").linear_path(6).build().unwrap();
    let mut game = LadderGame::new(board, Dice::scripted(vec![5]));
    game.add_player("Ada").unwrap();
    game.add_player("Grace").unwrap();
    game.start_game().unwrap();

    let log = EventLog::new();
    game.add_observer(Box::new(log.clone()));
    game.play_turn().unwrap(); // Ada 0 -> 5, the end tile

    assert!(game.is_finished());
    assert_eq!(game.winner(), Some(PlayerId(0)));
    assert!(log.any(|e| matches!(e, GameEvent::PlayerWon { winner: PlayerId(0) })));
    assert!(log.any(|e| matches!(
        e,
        GameEvent::GameEnded {
            winner: Some(PlayerId(0))
        }
    )));
}

/// A full game on the classic preset terminates with a seeded roller.
#[test]
fn test_preset_game_runs_to_completion() {
    let mut game = LadderGame::new(
        rust_boardgame::board::presets::snakes_and_ladders(),
        Dice::new(1, 42),
    );
    game.add_player("Ada").unwrap();
    game.add_player("Grace").unwrap();
    game.start_game().unwrap();

    let mut turns = 0;
    while !game.is_finished() && turns < 10_000 {
        game.play_turn().unwrap();
        turns += 1;
    }

    assert!(game.is_finished(), "game should end within 10k turns");
    let winner = game.winner().expect("race games always have a winner");
    assert_eq!(
        game.players()[winner.index()].current_tile,
        Some(TileId(99))
    );
}

/// Reset drops the roster and board; a fresh pair restarts cleanly.
#[test]
fn test_reset_and_restart() {
    let board = BoardBuilder::new("line").linear_path(10).build().unwrap();
    let mut game = LadderGame::new(board, Dice::scripted(vec![2]));
    game.add_player("Ada").unwrap();
    game.start_game().unwrap();
    game.play_turn().unwrap();

    let log = EventLog::new();
    game.add_observer(Box::new(log.clone()));
    game.reset_game();

    assert!(log.any(|e| matches!(e, GameEvent::GameReset)));
    assert!(game.players().is_empty());
    assert!(game.core().board().is_none());

    let fresh = BoardBuilder::new("line").linear_path(5).build().unwrap();
    game.core_mut().set_board(fresh).unwrap();
    game.add_player("Grace").unwrap();
    game.start_game().unwrap();
    assert_eq!(game.players()[0].current_tile, Some(TileId(0)));
}
