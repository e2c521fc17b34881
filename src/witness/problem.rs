//! Partition instance and assignment checks

use crate::errors::{PartitionError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    weights: Vec<i64>,
}

impl Problem {
    /// Create an instance from its weights; all weights must be non-negative
    /// and there must be at least one.
    pub fn new(weights: Vec<i64>) -> Result<Self> {
        if weights.is_empty() {
            return Err(PartitionError::InvalidInput(
                "problem must contain at least one weight".to_string(),
            ));
        }
        if let Some((idx, w)) = weights.iter().enumerate().find(|(_, w)| **w < 0) {
            return Err(PartitionError::InvalidInput(format!(
                "weight {} at position {} is negative",
                w, idx
            )));
        }
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &[i64] {
        &self.weights
    }

    /// Number of weights (`n`); the witness has `n + 1` entries
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn max_weight(&self) -> i64 {
        self.weights.iter().copied().max().unwrap_or(0)
    }

    /// Length and domain checks shared by the witness builder and
    /// [`Problem::is_satisfied_by`].
    pub fn check_assignment(&self, assignment: &[i64]) -> Result<()> {
        if assignment.len() != self.weights.len() {
            return Err(PartitionError::InvalidInput(format!(
                "assignment length mismatch: expected {}, got {}",
                self.weights.len(),
                assignment.len()
            )));
        }
        if let Some((idx, side)) = assignment
            .iter()
            .enumerate()
            .find(|(_, s)| **s != 1 && **s != -1)
        {
            return Err(PartitionError::InvalidInput(format!(
                "assignment entry {} at position {} is not -1 or 1",
                side, idx
            )));
        }
        Ok(())
    }

    /// Signed sum `Σ assignment[i] · weights[i]`
    pub fn signed_sum(&self, assignment: &[i64]) -> Result<i64> {
        self.check_assignment(assignment)?;
        self.weights
            .iter()
            .zip(assignment)
            .try_fold(0i64, |acc, (w, side)| acc.checked_add(side * w))
            .ok_or_else(|| PartitionError::InvalidInput("signed sum overflows i64".to_string()))
    }

    pub fn is_satisfied_by(&self, assignment: &[i64]) -> Result<bool> {
        Ok(self.signed_sum(assignment)? == 0)
    }
}

impl TryFrom<Vec<i64>> for Problem {
    type Error = PartitionError;

    fn try_from(weights: Vec<i64>) -> Result<Self> {
        Self::new(weights)
    }
}

impl TryFrom<&[i64]> for Problem {
    type Error = PartitionError;

    fn try_from(weights: &[i64]) -> Result<Self> {
        Self::new(weights.to_vec())
    }
}
