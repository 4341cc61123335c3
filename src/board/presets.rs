//! Hand-authored boards.
//!
//! These are the in-crate stand-ins for the external board supply: fully
//! linked, action-bearing boards ready to hand to a game. Loaders that
//! parse external formats produce the same `Board` values through
//! `BoardBuilder`.

use super::board::{Board, BoardBuilder};
use crate::actions::TileAction;

/// Classic 10x10 snakes-and-ladders board.
///
/// 100 tiles (ids 0..=99) in a forward chain, laid out boustrophedon from
/// the bottom row up, with a fixed set of ladders, snakes, and two
/// skip-a-turn tiles.
#[must_use]
pub fn snakes_and_ladders() -> Board {
    let mut builder = BoardBuilder::new("Snakes & Ladders")
        .description("Classic 10x10 race to the final tile")
        .dimensions(10, 10)
        .linear_path(100);

    // Bottom-left is tile 0; rows alternate direction going up.
    for id in 0..100u32 {
        let band = (id / 10) as u16;
        let offset = (id % 10) as u16;
        let row = 9 - band;
        let column = if band % 2 == 0 { offset } else { 9 - offset };
        builder = builder.placement(id, row, column);
    }

    let ladders = [(3, 21), (7, 33), (20, 58), (27, 74), (50, 68), (63, 81), (71, 90)];
    for (foot, top) in ladders {
        builder = builder.action(foot, TileAction::Ladder { dest: top.into() });
    }

    let snakes = [(16, 4), (30, 12), (38, 19), (54, 31), (66, 44), (78, 55), (89, 67), (97, 76)];
    for (head, tail) in snakes {
        builder = builder.action(head, TileAction::Snake { dest: tail.into() });
    }

    builder = builder.action(13, TileAction::SkipTurn);
    builder = builder.action(47, TileAction::SkipTurn);

    builder
        .build()
        .unwrap_or_else(|e| unreachable!("preset board is valid: {e}"))
}

/// A 24-tile property loop in the Monopoly mould.
///
/// Tile 0 is "Go" (pass-go bonus of 200 credited by the landing action and
/// by wrapping past it), properties rise in price around the ring, and two
/// tax tiles drain the unwary. Laid out on the perimeter of a 7x7 grid.
#[must_use]
pub fn property_loop() -> Board {
    let mut builder = BoardBuilder::new("Property Loop")
        .description("24-tile property trading ring")
        .dimensions(7, 7)
        .looped_path(24);

    for (id, (row, column)) in ring_positions(7).into_iter().enumerate() {
        builder = builder.placement(id as u32, row, column);
    }

    let properties = [
        (1, "Baltic Lane", 60),
        (2, "Mediterranean Way", 60),
        (4, "Vermont Walk", 100),
        (5, "Oriental Row", 100),
        (7, "St. Charles Place", 140),
        (8, "States Court", 140),
        (9, "Virginia Cross", 160),
        (10, "Tennessee Walk", 180),
        (11, "New York Strand", 200),
        (12, "Waterworks", 150),
        (13, "Kentucky Hill", 220),
        (14, "Indiana Bend", 220),
        (16, "Illinois Gate", 240),
        (17, "Atlantic Crest", 260),
        (19, "Ventnor Garden", 260),
        (20, "Marvin Meadow", 280),
        (21, "Pacific Heights", 300),
        (22, "Park Place", 350),
        (23, "Boardwalk", 400),
    ];
    for (id, name, price) in properties {
        builder = builder
            .tile_name(id, name)
            .action(id, TileAction::property(price));
    }

    builder = builder
        .tile_name(0, "Go")
        .action(0, TileAction::StartBonus { amount: 200 })
        .tile_name(3, "Income Tax")
        .action(3, TileAction::Tax { amount: 100 })
        .tile_name(6, "Free Parking")
        .tile_name(15, "Luxury Tax")
        .action(15, TileAction::Tax { amount: 150 })
        .tile_name(18, "Park Bench")
        .action(18, TileAction::SkipTurn);

    builder
        .build()
        .unwrap_or_else(|e| unreachable!("preset board is valid: {e}"))
}

/// Perimeter coordinates of a `side`-by-`side` grid, walking from the
/// bottom-right corner along the bottom, up the left edge, across the top,
/// and down the right edge.
fn ring_positions(side: u16) -> Vec<(u16, u16)> {
    let last = side - 1;
    let mut positions = Vec::with_capacity(4 * side as usize - 4);
    for column in (0..side).rev() {
        positions.push((last, column));
    }
    for row in (1..last).rev() {
        positions.push((row, 0));
    }
    for column in 0..side {
        positions.push((0, column));
    }
    for row in 1..last {
        positions.push((row, last));
    }
    positions
}
