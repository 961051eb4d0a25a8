//! Genetic operators for row-encoded boards.
//!
//! - [`uniform_crossover`]: each row inherited from either parent by a fair coin
//! - [`mutate`]: with a given probability, one random row moved to a random column
//!
//! Every column written here comes from `random_range(0..BOARD_SIZE)` or from
//! a parent, so no queen can leave the board.

use super::types::{Candidate, Rows, BOARD_SIZE};
use rand::Rng;

/// Uniform crossover.
///
/// For each row an independent fair coin picks whether the child takes the
/// column from `parent1` or `parent2`. Fitness is evaluated once, after the
/// whole row array is assembled.
///
/// # Complexity
/// O(n) coin flips plus one fitness evaluation
pub fn uniform_crossover<R: Rng>(
    parent1: &Candidate,
    parent2: &Candidate,
    rng: &mut R,
) -> Candidate {
    let mut rows: Rows = [0; BOARD_SIZE];
    for (i, col) in rows.iter_mut().enumerate() {
        *col = if rng.random_bool(0.5) {
            parent1.rows()[i]
        } else {
            parent2.rows()[i]
        };
    }
    Candidate::from_valid_rows(rows)
}

/// Mutates `candidate` with probability `rate`.
///
/// The probability is checked once per candidate. On success a single row
/// and column are drawn uniformly and the queen in that row is moved there.
/// Returns whether a mutation happened.
pub fn mutate<R: Rng>(candidate: &mut Candidate, rate: f64, rng: &mut R) -> bool {
    if rng.random_range(0.0..1.0) < rate {
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        candidate.set_row(row, col);
        true
    } else {
        false
    }
}
