//! Core engine types: players and dice.
//!
//! These are the building blocks shared by every rule variant.

pub mod dice;
pub mod player;

pub use dice::{Dice, Die};
pub use player::{Player, PlayerId};
