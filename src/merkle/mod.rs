//! Complete binary SHA-256 Merkle trees over integer sequences
//!
//! Trees are stored as a flat array of `2·L` digests: the root sits at index 1,
//! the children of node `i` at `2i` and `2i + 1`, and the leaves at `[L, 2L)`.
//! Authentication paths carry no direction bits; the parity of the running
//! node index decides which side the sibling goes on.
//!
//! `ZkMerkleTree` interleaves every value with fresh randomness before
//! committing, so a revealed path leaks nothing about unopened neighbours.

mod path;
mod tree;
mod zk;

pub use path::{verify_path, verify_path_with, verify_zk_path, PathLayout};
pub use tree::{MerkleTree, PARALLEL_THRESHOLD};
pub use zk::ZkMerkleTree;

use crate::hash::Digest;

/// Sibling digests from a leaf up to (but excluding) the root
pub type AuthPath = Vec<Digest>;
