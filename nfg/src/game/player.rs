use std::ops::Neg;

/// `Player1` picks rows and receives the payoff ("Player A"),
/// `Player2` picks columns and pays it out ("Player B").
#[derive(Debug, Copy, Clone, Eq, PartialEq, PartialOrd)]
pub enum Player {
    Player1,
    Player2,
}

impl Neg for Player {
    type Output = Player;
    fn neg(self) -> Self::Output {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Player;

    #[test]
    fn opponent() {
        assert_eq!(-Player::Player1, Player::Player2);
        assert_eq!(-Player::Player2, Player::Player1);
        assert_eq!(-(-Player::Player1), Player::Player1);
    }
}
