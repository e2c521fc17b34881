use crate::errors::{PartitionError, Result};

/// Rounds used when no count is given.
///
/// A cheating prover whose witness does not close survives one round with
/// probability `n / (n + 1)`, so the count should grow with the instance.
pub const DEFAULT_ROUNDS: usize = 40;

/// Protocol configuration shared by prover and verifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtocolParams {
    /// Number of independent rounds (fresh witness and tree each)
    pub rounds: usize,
}

impl ProtocolParams {
    pub fn with_rounds(rounds: usize) -> Result<Self> {
        let params = Self { rounds };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(PartitionError::InvalidParameter(
                "at least one round is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self { rounds: DEFAULT_ROUNDS }
    }
}
