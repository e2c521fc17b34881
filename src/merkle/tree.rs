use rayon::prelude::*;

use super::AuthPath;
use crate::errors::{PartitionError, Result};
use crate::hash::{hash_leaf, hash_node, Digest, DIGEST_LEN};
use crate::utils::{next_power_of_two, tree_depth};

/// Levels at least this wide are hashed on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 1 << 10;

/// Plain Merkle tree: leaf `k` commits directly to `data[k]`.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    /// Owned copy of the input, zero-padded to `leaf_count`
    data: Vec<i64>,
    /// Length before padding
    logical_len: usize,
    /// `nodes[1]` is the root; `nodes[0]` is unused
    nodes: Vec<Digest>,
}

impl MerkleTree {
    /// Commit to `data`, padding with zeros up to the next power of two.
    #[tracing::instrument(skip_all, name = "MerkleTree::build", fields(len = data.len()))]
    pub fn build(data: &[i64]) -> Result<Self> {
        if data.is_empty() {
            return Err(PartitionError::InvalidInput(
                "cannot build a Merkle tree over empty data".to_string(),
            ));
        }
        let leaf_count = next_power_of_two(data.len());
        let mut padded = Vec::with_capacity(leaf_count);
        padded.extend_from_slice(data);
        padded.resize(leaf_count, 0);
        Ok(Self::from_padded(padded, data.len()))
    }

    /// Build over data whose length is already a power of two.
    pub(super) fn from_padded(data: Vec<i64>, logical_len: usize) -> Self {
        let leaf_count = data.len();
        debug_assert!(leaf_count.is_power_of_two());

        let mut nodes = vec![[0u8; DIGEST_LEN]; 2 * leaf_count];
        hash_leaves(&mut nodes[leaf_count..], &data);

        let mut width = leaf_count / 2;
        while width >= 1 {
            // parents live in [width, 2·width), children in [2·width, 4·width)
            let (upper, lower) = nodes.split_at_mut(2 * width);
            hash_level(&mut upper[width..], &lower[..2 * width]);
            width /= 2;
        }

        Self { data, logical_len, nodes }
    }

    pub fn root(&self) -> Digest {
        self.nodes[1]
    }

    /// Value at `index` together with its authentication path.
    pub fn val_and_path(&self, index: usize) -> Result<(i64, AuthPath)> {
        if index >= self.logical_len {
            return Err(PartitionError::InvalidInput(format!(
                "index {} out of range for tree over {} values",
                index, self.logical_len
            )));
        }
        Ok((self.data[index], self.path_from(index + self.leaf_count())))
    }

    /// Collect siblings climbing from tree node `node` to the root.
    pub(super) fn path_from(&self, mut node: usize) -> AuthPath {
        let mut path = Vec::with_capacity(self.depth());
        while node > 1 {
            path.push(self.nodes[node ^ 1]);
            node /= 2;
        }
        path
    }

    pub(super) fn raw_value(&self, position: usize) -> i64 {
        self.data[position]
    }

    pub fn leaf_count(&self) -> usize {
        self.data.len()
    }

    /// Path length for every leaf
    pub fn depth(&self) -> usize {
        tree_depth(self.leaf_count())
    }

    pub fn logical_len(&self) -> usize {
        self.logical_len
    }

    /// Padded leaf values
    pub fn data(&self) -> &[i64] {
        &self.data
    }
}

fn hash_leaves(out: &mut [Digest], data: &[i64]) {
    if out.len() >= PARALLEL_THRESHOLD {
        out.par_iter_mut()
            .zip(data.par_iter())
            .for_each(|(node, value)| *node = hash_leaf(*value));
    } else {
        for (node, value) in out.iter_mut().zip(data) {
            *node = hash_leaf(*value);
        }
    }
}

fn hash_level(parents: &mut [Digest], children: &[Digest]) {
    if parents.len() >= PARALLEL_THRESHOLD {
        parents
            .par_iter_mut()
            .enumerate()
            .for_each(|(j, parent)| *parent = hash_node(&children[2 * j], &children[2 * j + 1]));
    } else {
        for (j, parent) in parents.iter_mut().enumerate() {
            *parent = hash_node(&children[2 * j], &children[2 * j + 1]);
        }
    }
}
