use std::fmt;

/// A pure-strategy equilibrium: the entry at (`row`, `col`) is the minimum of its row
/// and the maximum of its column, and `value` is the value of the game.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SaddlePoint {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

impl SaddlePoint {
    pub fn new(row: usize, col: usize, value: f64) -> SaddlePoint {
        SaddlePoint { row, col, value }
    }
}

impl From<SaddlePoint> for (usize, usize, f64) {
    fn from(saddle_point: SaddlePoint) -> Self {
        (saddle_point.row, saddle_point.col, saddle_point.value)
    }
}

impl fmt::Display for SaddlePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Position ({}, {}) with value {}",
            self.row, self.col, self.value
        )
    }
}
