//! Error types for partition proofs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Assignment does not satisfy the problem: signed sum is {residual}")]
    UnsatisfiableAssignment { residual: i64 },

    #[error("Malformed authentication path: expected {expected} siblings, got {actual}")]
    MalformedPath { expected: usize, actual: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, PartitionError>;
