#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod analysis;
pub mod game;

pub use analysis::{GameAnalyzer, SaddlePoint};
pub use game::{GameError, PayoffMatrix, Player};
