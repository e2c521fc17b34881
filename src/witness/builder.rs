//! Witness construction: p_0 = 0, p_{i+1} = p_i + σ · m_i · l_i, then shifted

use rand::{Rng, RngCore};

use super::Problem;
use crate::errors::{PartitionError, Result};

/// Blinded prefix sums of a satisfying assignment, `n + 1` entries long.
///
/// Adjacent entries differ by exactly `±l_i`, and the first and last entries
/// are equal (both hold the shift).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness {
    values: Vec<i64>,
}

impl Witness {
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Build a fresh witness for `assignment`.
///
/// Draws the side obfuscator σ and the shared shift from `rng`. Fails with
/// `InvalidInput` on malformed assignments and `UnsatisfiableAssignment` when
/// the prefix sum does not return to zero.
#[tracing::instrument(skip_all, name = "build_witness", fields(n = problem.len()))]
pub fn build_witness<R: RngCore>(
    problem: &Problem,
    assignment: &[i64],
    rng: &mut R,
) -> Result<Witness> {
    problem.check_assignment(assignment)?;

    let side_obfuscator: i64 = if rng.gen::<bool>() { 1 } else { -1 };

    let mut values = Vec::with_capacity(problem.len() + 1);
    let mut sum = 0i64;
    values.push(sum);
    for (weight, side) in problem.weights().iter().zip(assignment) {
        sum = sum
            .checked_add(side * weight * side_obfuscator)
            .ok_or_else(|| PartitionError::InvalidInput("prefix sum overflows i64".to_string()))?;
        values.push(sum);
    }

    if sum != 0 {
        // report Σ m_i · l_i, not the sign-flipped value
        return Err(PartitionError::UnsatisfiableAssignment {
            residual: sum * side_obfuscator,
        });
    }

    let shift = rng.gen_range(0..=problem.max_weight());
    for v in values.iter_mut() {
        *v = v
            .checked_add(shift)
            .ok_or_else(|| PartitionError::InvalidInput("shifted witness overflows i64".to_string()))?;
    }

    Ok(Witness { values })
}
