use crate::game::GameError;

use itertools::Itertools;
use std::fmt;
use std::io::{BufRead, BufReader, Read, Write};

/// Dense payoff matrix of a two-player zero-sum game, stored in row-major order.
/// Entry (i, j) is the payoff Player 1 receives (and Player 2 loses)
/// when Player 1 picks row i and Player 2 picks column j.
///
/// A `PayoffMatrix` is validated once when it is built and is never mutated afterwards:
/// it has at least 2 rows, at least 2 columns, and no NaN entries.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffMatrix {
    num_rows: usize,
    num_cols: usize,
    entries: Vec<f64>,
}

impl PayoffMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Result<PayoffMatrix, GameError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != num_cols)
        {
            return Err(GameError::RaggedRow {
                row,
                expected: num_cols,
                found,
            });
        }

        if num_rows <= 1 || num_cols <= 1 {
            return Err(GameError::InvalidDimension {
                rows: num_rows,
                cols: num_cols,
            });
        }

        let entries = rows.into_iter().flatten().collect::<Vec<f64>>();
        if let Some(index) = entries.iter().position(|x| x.is_nan()) {
            return Err(GameError::NotANumber {
                row: index / num_cols,
                col: index % num_cols,
            });
        }

        Ok(PayoffMatrix {
            num_rows,
            num_cols,
            entries,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn entry(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.num_cols, "column index out of bounds");
        self.entries[row * self.num_cols + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.num_rows, "row index out of bounds");
        &self.entries[row * self.num_cols..(row + 1) * self.num_cols]
    }

    pub fn column<'a>(&'a self, col: usize) -> impl Iterator<Item = f64> + 'a {
        assert!(col < self.num_cols, "column index out of bounds");
        self.entries.iter().skip(col).step_by(self.num_cols).cloned()
    }

    pub fn rows<'a>(&'a self) -> impl Iterator<Item = &'a [f64]> + 'a {
        self.entries.chunks(self.num_cols)
    }

    /// Reads a matrix written one row per line, with entries separated by whitespace.
    /// Blank lines are skipped. Line numbers in errors are 1-based.
    pub fn deserialize<R>(reader: R) -> Result<PayoffMatrix, GameError>
    where
        R: Read,
    {
        let mut rows = vec![];
        for (line_index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let mut row = vec![];
            for token in line.split_whitespace() {
                let payoff = token.parse::<f64>().map_err(|_| GameError::Parse {
                    line: line_index + 1,
                    token: token.to_string(),
                })?;
                row.push(payoff);
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        PayoffMatrix::new(rows)
    }

    /// Writes the matrix in the format read by `deserialize()`.
    pub fn persist<W>(&self, writer: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        for row in self.rows() {
            writeln!(writer, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

/// Bracketed rows with right-aligned columns, e.g.
/// ```text
/// [[3 2 4]
///  [1 4 2]]
/// ```
impl fmt::Display for PayoffMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let formatted = self
            .entries
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<String>>();
        let width = formatted.iter().map(String::len).max().unwrap_or(0);

        for (row_index, row) in formatted.chunks(self.num_cols).enumerate() {
            let opening = if row_index == 0 { "[[" } else { " [" };
            let closing = if row_index + 1 == self.num_rows { "]]" } else { "]\n" };
            let cells = row
                .iter()
                .map(|cell| format!("{:>width$}", cell, width = width))
                .join(" ");
            write!(f, "{}{}{}", opening, cells, closing)?;
        }
        Ok(())
    }
}
