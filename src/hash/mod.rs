//! SHA-256 commitments for tree leaves and inner nodes
//!
//! Leaves commit to a single integer, encoded as 8 little-endian bytes of its
//! two's complement form. Inner nodes commit to the concatenation of their
//! children. A one-byte tag separates the two so that a leaf digest can never
//! be replayed as an inner node.

use sha2::{Digest as _, Sha256};

/// Width of every commitment in bytes
pub const DIGEST_LEN: usize = 32;

/// SHA-256 output
pub type Digest = [u8; DIGEST_LEN];

const LEAF_TAG: u8 = 0x00;
const NODE_TAG: u8 = 0x01;

/// Commit to a single value
pub fn hash_leaf(value: i64) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_TAG]);
    hasher.update(value.to_le_bytes());
    hasher.finalize().into()
}

/// Commit to an ordered pair of child digests
pub fn hash_node(left: &Digest, right: &Digest) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update([NODE_TAG]);
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Lowercase hex rendering, used in log fields
pub fn digest_hex(digest: &Digest) -> String {
    hex::encode(digest)
}
