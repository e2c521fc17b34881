//! Non-interactive partition proof (Fiat-Shamir over a zk Merkle commitment)
//!
//! Each round the prover:
//! 1. builds a fresh blinded witness `p` and commits to it in a `ZkMerkleTree`
//! 2. derives `i ∈ [0, n]` from the transcript
//! 3. opens `p_i` and `p_{(i+1) mod (n+1)}` with their authentication paths
//! 4. appends the query to the transcript
//!
//! The verifier replays the transcript and checks `|p_i - p_{i+1}| = l_i` for
//! `i < n`, `p_n = p_0` for `i = n`, and both paths against the round root.

mod params;
mod prover;
mod query;
mod verifier;

pub use params::{ProtocolParams, DEFAULT_ROUNDS};
pub use query::{Proof, Query};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::errors::Result;
use crate::witness::Problem;

/// Prover and verifier for a fixed parameter set.
///
/// # Example
/// ```
/// use partition_zk::{PartitionProtocol, Problem, ProtocolParams};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let problem = Problem::new(vec![4, 11, 8, 1]).unwrap();
/// let protocol = PartitionProtocol::new(ProtocolParams::with_rounds(8).unwrap()).unwrap();
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
///
/// let proof = protocol.prove(&problem, &[1, -1, 1, -1], &mut rng).unwrap();
/// assert!(protocol.verify(&problem, &proof).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PartitionProtocol {
    params: ProtocolParams,
}

impl PartitionProtocol {
    pub fn new(params: ProtocolParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ProtocolParams {
        &self.params
    }

    /// Prove that `assignment` satisfies `problem` without revealing it.
    pub fn prove<R: RngCore>(
        &self,
        problem: &Problem,
        assignment: &[i64],
        rng: &mut R,
    ) -> Result<Proof> {
        prover::prove(&self.params, problem, assignment, rng)
    }

    /// Verify `proof`, additionally requiring at least `params.rounds` rounds.
    pub fn verify(&self, problem: &Problem, proof: &Proof) -> Result<bool> {
        if proof.len() < self.params.rounds {
            tracing::debug!(
                required = self.params.rounds,
                got = proof.len(),
                "proof has too few rounds"
            );
            return Ok(false);
        }
        verifier::verify(problem, proof)
    }
}

impl Default for PartitionProtocol {
    fn default() -> Self {
        Self { params: ProtocolParams::default() }
    }
}

/// Generate a `rounds`-round proof using a freshly seeded prover RNG.
pub fn generate_proof(problem: &Problem, assignment: &[i64], rounds: usize) -> Result<Proof> {
    let mut rng = ChaCha20Rng::from_entropy();
    generate_proof_with_rng(problem, assignment, rounds, &mut rng)
}

/// Generate a proof drawing all prover randomness from `rng`.
pub fn generate_proof_with_rng<R: RngCore>(
    problem: &Problem,
    assignment: &[i64],
    rounds: usize,
    rng: &mut R,
) -> Result<Proof> {
    let params = ProtocolParams::with_rounds(rounds)?;
    prover::prove(&params, problem, assignment, rng)
}

/// Verify a proof of any non-zero number of rounds.
pub fn verify_proof(problem: &Problem, proof: &Proof) -> Result<bool> {
    verifier::verify(problem, proof)
}
