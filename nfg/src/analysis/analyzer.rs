use crate::analysis::{GameReport, SaddlePoint};
use crate::game::{GameError, PayoffMatrix, Player};

use itertools::iproduct;
use log::debug;

/// Pure-strategy analysis of a two-player zero-sum game in normal form.
///
/// Player 1 (the row chooser, "Player A") maximizes the payoff and Player 2
/// (the column chooser, "Player B") minimizes it. All queries are computed
/// on demand from the payoff matrix, which is never modified after construction.
///
/// Saddle points are detected with exact floating-point comparisons. Every derived
/// quantity is itself an entry of the matrix, so ties between entries that are equal
/// as written are always found. Payoffs produced by arithmetic (e.g. `0.1 + 0.2`)
/// may however break ties that would exist over the reals, and no tolerance is applied.
#[derive(Debug, Clone)]
pub struct GameAnalyzer {
    payoff_matrix: PayoffMatrix,
    num_rows: usize,
    num_cols: usize,
}

impl GameAnalyzer {
    /// Builds an analyzer from a list of rows.
    /// Fails with `GameError::InvalidDimension` if there are fewer than 2 rows or 2 columns.
    pub fn new(payoff_matrix: Vec<Vec<f64>>) -> Result<GameAnalyzer, GameError> {
        Ok(Self::from_matrix(PayoffMatrix::new(payoff_matrix)?))
    }

    pub fn from_matrix(payoff_matrix: PayoffMatrix) -> GameAnalyzer {
        let (num_rows, num_cols) = (payoff_matrix.num_rows(), payoff_matrix.num_cols());
        GameAnalyzer {
            payoff_matrix,
            num_rows,
            num_cols,
        }
    }

    pub fn matrix(&self) -> &PayoffMatrix {
        &self.payoff_matrix
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Smallest entry of each row.
    pub fn row_minimums(&self) -> Vec<f64> {
        self.payoff_matrix
            .rows()
            .map(|row| row.iter().cloned().fold(std::f64::INFINITY, f64::min))
            .collect()
    }

    /// Largest entry of each column.
    pub fn column_maximums(&self) -> Vec<f64> {
        (0..self.num_cols)
            .map(|col| {
                self.payoff_matrix
                    .column(col)
                    .fold(std::f64::NEG_INFINITY, f64::max)
            })
            .collect()
    }

    /// The payoff Player 1 can guarantee regardless of what Player 2 does.
    pub fn maximin(&self) -> f64 {
        self.row_minimums()
            .into_iter()
            .fold(std::f64::NEG_INFINITY, f64::max)
    }

    /// The loss Player 2 can guarantee not to exceed regardless of what Player 1 does.
    pub fn minimax(&self) -> f64 {
        self.column_maximums()
            .into_iter()
            .fold(std::f64::INFINITY, f64::min)
    }

    /// The guaranteed value of `player`: maximin for Player 1 and minimax for Player 2.
    pub fn security_level(&self, player: Player) -> f64 {
        match player {
            Player::Player1 => self.maximin(),
            Player::Player2 => self.minimax(),
        }
    }

    /// Pure strategies (row indices for Player 1, column indices for Player 2)
    /// attaining the security level of `player`, in increasing order.
    pub fn security_strategies(&self, player: Player) -> Vec<usize> {
        let (guarantees, level) = match player {
            Player::Player1 => (self.row_minimums(), self.maximin()),
            Player::Player2 => (self.column_maximums(), self.minimax()),
        };
        guarantees
            .into_iter()
            .enumerate()
            .filter(|(_, guarantee)| *guarantee == level)
            .map(|(strategy, _)| strategy)
            .collect()
    }

    /// All entries which are simultaneously the minimum of their row and the maximum
    /// of their column, in row-major order. Empty when maximin and minimax differ.
    pub fn find_saddle_points(&self) -> Vec<SaddlePoint> {
        let (maximin, minimax) = (self.maximin(), self.minimax());
        debug!("Maximin {:?}, minimax {:?}", maximin, minimax);

        if maximin != minimax {
            return vec![];
        }

        let row_minimums = self.row_minimums();
        let column_maximums = self.column_maximums();
        let saddle_points = iproduct!(0..self.num_rows, 0..self.num_cols)
            .map(|(row, col)| SaddlePoint::new(row, col, self.payoff_matrix.entry(row, col)))
            .filter(|x| x.value == row_minimums[x.row] && x.value == column_maximums[x.col])
            .collect::<Vec<SaddlePoint>>();

        debug!("Saddle points --- {:?}", saddle_points);
        saddle_points
    }

    /// Value of the game in pure strategies, if there is a saddle point.
    pub fn value(&self) -> Option<f64> {
        let maximin = self.maximin();
        if maximin == self.minimax() {
            Some(maximin)
        } else {
            None
        }
    }

    pub fn report(&self) -> GameReport {
        GameReport::new(self.maximin(), self.minimax(), self.find_saddle_points())
    }

    /// Textual summary of the maximin and minimax values and any saddle points.
    pub fn analyze_game(&self) -> String {
        self.report().to_string()
    }
}


#[cfg(test)]
mod properties {
    use crate::analysis::GameAnalyzer;
    use proptest::prelude::*;

    /// Small integer payoffs so that ties, and hence saddle points, are common.
    fn integer_game() -> impl Strategy<Value = Vec<Vec<f64>>> {
        (2usize..6, 2usize..6).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec((-3i32..4).prop_map(f64::from), cols), rows)
        })
    }

    fn real_game() -> impl Strategy<Value = Vec<Vec<f64>>> {
        (2usize..8, 2usize..8).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(-1e6f64..1e6, cols), rows)
        })
    }

    fn check_saddle_points(game: &GameAnalyzer) -> Result<(), TestCaseError> {
        let (maximin, minimax) = (game.maximin(), game.minimax());
        prop_assert!(maximin <= minimax);

        let saddle_points = game.find_saddle_points();
        prop_assert_eq!(!saddle_points.is_empty(), maximin == minimax);
        for x in saddle_points.iter() {
            prop_assert_eq!(x.value, maximin);
            prop_assert_eq!(x.value, minimax);
        }
        for pair in saddle_points.windows(2) {
            prop_assert!((pair[0].row, pair[0].col) < (pair[1].row, pair[1].col));
        }

        // Brute force over the definition, without consulting maximin or minimax.
        let matrix = game.matrix();
        let mut expected = vec![];
        for row in 0..matrix.num_rows() {
            for col in 0..matrix.num_cols() {
                let value = matrix.entry(row, col);
                let is_row_min = matrix.row(row).iter().all(|x| value <= *x);
                let is_col_max = matrix.column(col).all(|x| value >= x);
                if is_row_min && is_col_max {
                    expected.push((row, col));
                }
            }
        }
        let found = saddle_points
            .iter()
            .map(|x| (x.row, x.col))
            .collect::<Vec<_>>();
        prop_assert_eq!(found, expected);
        Ok(())
    }

    proptest! {
        #[test]
        fn integer_games(rows in integer_game()) {
            let game = GameAnalyzer::new(rows).unwrap();
            check_saddle_points(&game)?;
        }

        #[test]
        fn real_games(rows in real_game()) {
            let game = GameAnalyzer::new(rows).unwrap();
            check_saddle_points(&game)?;
        }

        #[test]
        fn report_matches_queries(rows in integer_game()) {
            let game = GameAnalyzer::new(rows).unwrap();
            let report = game.report();
            prop_assert_eq!(report.has_pure_equilibrium(), game.value().is_some());
            prop_assert_eq!(report.maximin, game.maximin());
            prop_assert_eq!(report.minimax, game.minimax());
            prop_assert_eq!(report.saddle_points, game.find_saddle_points());
        }
    }
}
