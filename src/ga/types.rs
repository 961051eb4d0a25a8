//! Board representation and fitness evaluation.
//!
//! A [`Candidate`] stores one column index per row, so two queens can never
//! share a row. Its fitness is the number of non-attacking queen pairs and
//! is recomputed on every write to the row array.

use crate::ga::error::GaError;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// Number of rows, columns, and queens on the board.
pub const BOARD_SIZE: usize = 8;

/// Fitness of a solved board: every one of the C(8, 2) pairs is non-attacking.
pub const MAX_FITNESS: u32 = (BOARD_SIZE * (BOARD_SIZE - 1) / 2) as u32;

/// Row-to-column assignment. Index is the row, value is the column.
pub type Rows = [usize; BOARD_SIZE];

/// Counts the non-attacking queen pairs in `rows`.
///
/// A pair `(i, j)` with `i < j` is non-attacking when the queens occupy
/// different columns and different diagonals.
///
/// # Complexity
/// O(n²) over the board size
pub fn evaluate(rows: &Rows) -> u32 {
    let mut fitness = 0;
    for i in 0..BOARD_SIZE {
        for j in (i + 1)..BOARD_SIZE {
            if rows[i] != rows[j] && rows[i].abs_diff(rows[j]) != j - i {
                fitness += 1;
            }
        }
    }
    fitness
}

/// One proposed placement of the eight queens.
///
/// Only serializable, since a deserialized fitness could disagree with the rows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate {
    rows: Rows,
    fitness: u32,
}

impl Candidate {
    /// Creates a candidate with every row set to a uniformly random column.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut rows = [0; BOARD_SIZE];
        for col in rows.iter_mut() {
            *col = rng.random_range(0..BOARD_SIZE);
        }
        Self::from_valid_rows(rows)
    }

    /// Creates a candidate from externally supplied rows.
    ///
    /// Returns [`GaError::ColumnOutOfRange`] if any column is not on the board.
    pub fn from_rows(rows: Rows) -> Result<Self, GaError> {
        if let Some(row) = rows.iter().position(|&c| c >= BOARD_SIZE) {
            return Err(GaError::ColumnOutOfRange {
                row,
                column: rows[row],
            });
        }
        Ok(Self::from_valid_rows(rows))
    }

    /// Rows built inside the crate are bounded where they are generated.
    pub(crate) fn from_valid_rows(rows: Rows) -> Self {
        Self {
            fitness: evaluate(&rows),
            rows,
        }
    }

    /// The row-to-column assignment.
    pub fn rows(&self) -> &Rows {
        &self.rows
    }

    /// Number of non-attacking pairs, in `0..=MAX_FITNESS`.
    pub fn fitness(&self) -> u32 {
        self.fitness
    }

    /// Whether no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.fitness == MAX_FITNESS
    }

    /// Moves the queen in `row` to `column` and refreshes the fitness.
    pub(crate) fn set_row(&mut self, row: usize, column: usize) {
        debug_assert!(row < BOARD_SIZE && column < BOARD_SIZE);
        self.rows[row] = column;
        self.fitness = evaluate(&self.rows);
    }
}

impl fmt::Display for Candidate {
    /// Renders the board with `Q ` for a queen and `. ` for an empty cell,
    /// followed by a `Fitness: <f>` line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &queen_col in &self.rows {
            for col in 0..BOARD_SIZE {
                f.write_str(if col == queen_col { "Q " } else { ". " })?;
            }
            writeln!(f)?;
        }
        write!(f, "Fitness: {}", self.fitness)
    }
}

/// Orders candidates best first (higher fitness sorts earlier).
pub fn by_fitness_desc(a: &Candidate, b: &Candidate) -> Ordering {
    b.fitness.cmp(&a.fitness)
}

/// Sorts the population best first. The sort is stable, so ties keep
/// their relative order.
pub fn sort_population(population: &mut [Candidate]) {
    population.sort_by(by_fitness_desc);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CANONICAL: Rows = [0, 4, 7, 5, 2, 6, 1, 3];

    #[test]
    fn test_max_fitness_is_pair_count() {
        assert_eq!(MAX_FITNESS, 28);
    }

    #[test]
    fn test_canonical_solution() {
        assert_eq!(evaluate(&CANONICAL), MAX_FITNESS);
        let c = Candidate::from_rows(CANONICAL).unwrap();
        assert!(c.is_solution());
    }

    #[test]
    fn test_all_same_column_scores_zero() {
        assert_eq!(evaluate(&[0; BOARD_SIZE]), 0);
    }

    #[test]
    fn test_main_diagonal_scores_zero() {
        // Every pair shares the diagonal.
        assert_eq!(evaluate(&[0, 1, 2, 3, 4, 5, 6, 7]), 0);
    }

    #[test]
    fn test_single_conflict() {
        // Move the last queen into the column of the one above it.
        let mut rows = CANONICAL;
        rows[7] = rows[6];
        let fitness = evaluate(&rows);
        assert!(fitness < MAX_FITNESS);
        assert_eq!(evaluate(&rows), fitness);
    }

    #[test]
    fn test_from_rows_rejects_off_board() {
        let err = Candidate::from_rows([0, 1, 2, 8, 4, 5, 6, 7]).unwrap_err();
        match err {
            GaError::ColumnOutOfRange { row, column } => {
                assert_eq!(row, 3);
                assert_eq!(column, 8);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_set_row_refreshes_fitness() {
        let mut c = Candidate::from_rows([0; BOARD_SIZE]).unwrap();
        assert_eq!(c.fitness(), 0);
        for (row, &col) in CANONICAL.iter().enumerate() {
            c.set_row(row, col);
            assert_eq!(c.fitness(), evaluate(c.rows()));
        }
        assert!(c.is_solution());
    }

    #[test]
    fn test_random_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let c = Candidate::random(&mut rng);
            assert!(c.rows().iter().all(|&col| col < BOARD_SIZE));
            assert_eq!(c.fitness(), evaluate(c.rows()));
        }
    }

    #[test]
    fn test_display_format() {
        let c = Candidate::from_rows(CANONICAL).unwrap();
        let text = c.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), BOARD_SIZE + 1);
        assert_eq!(lines[0], "Q . . . . . . . ");
        assert_eq!(lines[1], ". . . . Q . . . ");
        assert_eq!(lines[2], ". . . . . . . Q ");
        assert_eq!(lines[8], "Fitness: 28");
    }

    #[test]
    fn test_sort_descending_and_stable() {
        let a = Candidate::from_rows([0; BOARD_SIZE]).unwrap();
        let b = Candidate::from_rows(CANONICAL).unwrap();
        let c = Candidate::from_rows([1; BOARD_SIZE]).unwrap();
        let mut pop = vec![a.clone(), b.clone(), c.clone()];
        sort_population(&mut pop);
        assert_eq!(pop[0], b);
        // a and c tie at 0 and keep their order
        assert_eq!(pop[1], a);
        assert_eq!(pop[2], c);
    }
}
