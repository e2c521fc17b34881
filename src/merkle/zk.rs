use rand::RngCore;

use super::{AuthPath, MerkleTree};
use crate::errors::{PartitionError, Result};
use crate::hash::Digest;
use crate::utils::next_power_of_two;

/// Merkle tree over `(v_0, r_0, v_1, r_1, …)` with fresh random `r_i`.
///
/// Logical index `k` lives at raw position `2k`; the random partner at
/// `2k + 1` is only ever exposed as part of an ancestor hash.
#[derive(Debug, Clone)]
pub struct ZkMerkleTree {
    inner: MerkleTree,
    logical_len: usize,
}

impl ZkMerkleTree {
    #[tracing::instrument(skip_all, name = "ZkMerkleTree::build", fields(len = data.len()))]
    pub fn build<R: RngCore>(data: &[i64], rng: &mut R) -> Result<Self> {
        if data.is_empty() {
            return Err(PartitionError::InvalidInput(
                "cannot build a Merkle tree over empty data".to_string(),
            ));
        }
        let leaf_count = next_power_of_two(2 * data.len());
        let mut interleaved = Vec::with_capacity(leaf_count);
        for &value in data {
            interleaved.push(value);
            interleaved.push(i64::from(rng.next_u32()));
        }
        interleaved.resize(leaf_count, 0);

        Ok(Self {
            inner: MerkleTree::from_padded(interleaved, 2 * data.len()),
            logical_len: data.len(),
        })
    }

    pub fn root(&self) -> Digest {
        self.inner.root()
    }

    /// Value at logical `index` and its path; the first sibling is the
    /// value's blinding partner.
    pub fn val_and_path(&self, index: usize) -> Result<(i64, AuthPath)> {
        if index >= self.logical_len {
            return Err(PartitionError::InvalidInput(format!(
                "index {} out of range for tree over {} values",
                index, self.logical_len
            )));
        }
        let position = 2 * index;
        let value = self.inner.raw_value(position);
        Ok((value, self.inner.path_from(position + self.inner.leaf_count())))
    }

    /// Raw leaves in the underlying tree (values, randomness and padding)
    pub fn leaf_count(&self) -> usize {
        self.inner.leaf_count()
    }

    pub fn depth(&self) -> usize {
        self.inner.depth()
    }

    pub fn logical_len(&self) -> usize {
        self.logical_len
    }
}
