//! # partition-zk: zero-knowledge proofs for the partition problem
//!
//! A prover who knows a sign assignment `m ∈ {-1,1}^n` with `Σ m_i · l_i = 0`
//! convinces a verifier of that fact without revealing `m`. Each round commits
//! to a blinded prefix-sum witness in a SHA-256 Merkle tree, and a Fiat-Shamir
//! transcript picks which adjacent pair of entries to open.
//!
//! ## Structure
//!
//! - `hash`: Domain-separated SHA-256 leaf and node hashing
//! - `merkle`: Plain and zero-knowledge Merkle trees, path verification
//! - `witness`: Problem instances and blinded prefix-sum witnesses
//! - `transcript`: Fiat-Shamir transcript and challenge derivation
//! - `protocol`: Prover, verifier, proof and parameter types
//! - `utils`: Power-of-two helpers
//!
//! ## Usage
//!
//! ```
//! use partition_zk::{generate_proof, verify_proof, Problem};
//!
//! let problem = Problem::new(vec![1, 2, 3, 6, 6, 6, 12]).unwrap();
//! let assignment = [1, 1, 1, -1, -1, -1, 1];
//!
//! let proof = generate_proof(&problem, &assignment, 16).unwrap();
//! assert!(verify_proof(&problem, &proof).unwrap());
//! ```

pub mod hash;
pub mod merkle;
pub mod protocol;
pub mod transcript;
pub mod witness;

pub mod errors;
pub mod utils;

// Re-exports
pub use errors::{PartitionError, Result};
pub use hash::Digest;
pub use merkle::{verify_path, verify_zk_path, AuthPath, MerkleTree, ZkMerkleTree};
pub use protocol::{
    generate_proof, generate_proof_with_rng, verify_proof, PartitionProtocol, Proof,
    ProtocolParams, Query, DEFAULT_ROUNDS,
};
pub use transcript::Transcript;
pub use witness::{build_witness, Problem, Witness};
