//! Banded linear solves.

use crate::error::{MathError, MathResult};

/// Pivots smaller than this make the system singular.
const PIVOT_TOLERANCE: f64 = 1e-15;

/// Solves `M x = rhs` for a tridiagonal `M`.
///
/// Row `i` of `M` reads `lower[i-1] x[i-1] + diag[i] x[i] + upper[i] x[i+1]`,
/// so `lower` and `upper` hold `n - 1` entries for `n` unknowns. The
/// elimination runs without pivoting, which is stable for the diagonally
/// dominant systems produced by spline fitting.
///
/// An empty system has an empty solution.
pub fn solve_tridiagonal(
    lower: &[f64],
    diag: &[f64],
    upper: &[f64],
    rhs: &[f64],
) -> MathResult<Vec<f64>> {
    let n = diag.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    if lower.len() + 1 != n || upper.len() + 1 != n || rhs.len() != n {
        return Err(MathError::invalid_input(format!(
            "tridiagonal system of size {} needs off-diagonals of {} and a right-hand side of {}, got {}, {} and {}",
            n,
            n - 1,
            n,
            lower.len(),
            upper.len(),
            rhs.len()
        )));
    }

    // Elimination: row i becomes x[i] + ratio[i] x[i+1] = reduced[i].
    let mut ratio = Vec::with_capacity(n);
    let mut reduced = Vec::with_capacity(n);
    let mut prev_ratio = 0.0;
    let mut prev_reduced = 0.0;

    for i in 0..n {
        let sub = if i == 0 { 0.0 } else { lower[i - 1] };
        let pivot = diag[i] - sub * prev_ratio;
        if pivot.abs() < PIVOT_TOLERANCE {
            return Err(MathError::SingularMatrix);
        }
        prev_ratio = upper.get(i).map_or(0.0, |&u| u / pivot);
        prev_reduced = (rhs[i] - sub * prev_reduced) / pivot;
        ratio.push(prev_ratio);
        reduced.push(prev_reduced);
    }

    // Back substitution, reusing `reduced` as the solution.
    for i in (0..n - 1).rev() {
        reduced[i] -= ratio[i] * reduced[i + 1];
    }

    Ok(reduced)
}
