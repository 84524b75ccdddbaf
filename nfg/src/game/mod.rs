mod error;
mod payoff;
mod player;

pub use self::error::GameError;
pub use self::payoff::PayoffMatrix;
pub use self::player::Player;
