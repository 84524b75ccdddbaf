use crate::analysis::SaddlePoint;

use std::fmt;

/// Human-readable summary of a matrix game, built from the quantities
/// computed by `GameAnalyzer`.
#[derive(Debug, Clone, PartialEq)]
pub struct GameReport {
    pub maximin: f64,
    pub minimax: f64,
    pub saddle_points: Vec<SaddlePoint>,
}

impl GameReport {
    pub fn new(maximin: f64, minimax: f64, saddle_points: Vec<SaddlePoint>) -> GameReport {
        GameReport {
            maximin,
            minimax,
            saddle_points,
        }
    }

    pub fn has_pure_equilibrium(&self) -> bool {
        !self.saddle_points.is_empty()
    }
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Game Analysis:")?;
        writeln!(
            f,
            "Maximin value (Player A's guaranteed minimum): {}",
            self.maximin
        )?;
        writeln!(
            f,
            "Minimax value (Player B's guaranteed maximum loss): {}",
            self.minimax
        )?;

        if !self.has_pure_equilibrium() {
            return write!(
                f,
                "\nNo saddle points found - this game has no pure strategy equilibrium."
            );
        }

        writeln!(f, "\nFound {} saddle point(s):", self.saddle_points.len())?;
        for saddle_point in self.saddle_points.iter() {
            writeln!(f, "- {}", saddle_point)?;
        }
        write!(f, "\nThis game has a pure strategy equilibrium.")
    }
}

#[cfg(test)]
mod tests {
    use crate::analysis::{GameReport, SaddlePoint};

    #[test]
    fn without_saddle_points() {
        let report = GameReport::new(3.0, 4.0, vec![]);
        assert!(!report.has_pure_equilibrium());
        assert_eq!(
            report.to_string(),
            "Game Analysis:\n\
             Maximin value (Player A's guaranteed minimum): 3\n\
             Minimax value (Player B's guaranteed maximum loss): 4\n\
             \n\
             No saddle points found - this game has no pure strategy equilibrium."
        );
    }

    #[test]
    fn with_saddle_points() {
        let report = GameReport::new(
            0.5,
            0.5,
            vec![SaddlePoint::new(0, 1, 0.5), SaddlePoint::new(2, 1, 0.5)],
        );
        assert!(report.has_pure_equilibrium());
        assert_eq!(
            report.to_string(),
            "Game Analysis:\n\
             Maximin value (Player A's guaranteed minimum): 0.5\n\
             Minimax value (Player B's guaranteed maximum loss): 0.5\n\
             \n\
             Found 2 saddle point(s):\n\
             - Position (0, 1) with value 0.5\n\
             - Position (2, 1) with value 0.5\n\
             \n\
             This game has a pure strategy equilibrium."
        );
    }
}
