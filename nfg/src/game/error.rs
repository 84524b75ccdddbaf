use thiserror::Error;

/// Errors raised while building or reading a payoff matrix.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Matrix must have dimensions m × n where m > 1 and n > 1 (got {rows} × {cols})")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("Row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Entry ({row}, {col}) is not a number")]
    NotANumber { row: usize, col: usize },

    #[error("Could not parse `{token}` on line {line} as a payoff")]
    Parse { line: usize, token: String },

    #[error("Payoff matrix I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
