use crate::errors::{PartitionError, Result};
use crate::hash::{hash_leaf, hash_node, Digest};
use crate::utils::{next_power_of_two, tree_depth};

/// How logical indices map onto tree leaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathLayout {
    /// Leaf `k` holds value `k` ([`MerkleTree`](super::MerkleTree))
    Plain,
    /// Leaf `2k` holds value `k`, leaf `2k + 1` its blinding
    /// ([`ZkMerkleTree`](super::ZkMerkleTree))
    ZeroKnowledge,
}

impl PathLayout {
    /// Raw (index, size) in the committed leaf sequence
    fn raw_position(self, data_size: usize, index: usize) -> Result<(usize, usize)> {
        match self {
            PathLayout::Plain => Ok((index, data_size)),
            PathLayout::ZeroKnowledge => {
                let size = data_size.checked_mul(2).ok_or_else(|| {
                    PartitionError::InvalidInput(format!("data size {} too large", data_size))
                })?;
                Ok((2 * index, size))
            }
        }
    }
}

/// Check `value` at `index` against a plain tree root.
pub fn verify_path(
    root: &Digest,
    data_size: usize,
    index: usize,
    value: i64,
    path: &[Digest],
) -> Result<bool> {
    verify_path_with(PathLayout::Plain, root, data_size, index, value, path)
}

/// Check `value` at logical `index` against a zero-knowledge tree root.
pub fn verify_zk_path(
    root: &Digest,
    data_size: usize,
    index: usize,
    value: i64,
    path: &[Digest],
) -> Result<bool> {
    verify_path_with(PathLayout::ZeroKnowledge, root, data_size, index, value, path)
}

/// Fold `path` from the leaf holding `value` up to the root.
///
/// Returns `Ok(false)` when the recomputed root differs from `root`. A path
/// whose length does not match the tree depth is a caller error and yields
/// `MalformedPath` rather than a rejection.
pub fn verify_path_with(
    layout: PathLayout,
    root: &Digest,
    data_size: usize,
    index: usize,
    value: i64,
    path: &[Digest],
) -> Result<bool> {
    if data_size == 0 {
        return Err(PartitionError::InvalidInput("data size must be positive".to_string()));
    }
    if index >= data_size {
        return Err(PartitionError::InvalidInput(format!(
            "index {} out of range for data size {}",
            index, data_size
        )));
    }

    let (raw_index, raw_size) = layout.raw_position(data_size, index)?;
    let leaf_count = next_power_of_two(raw_size);
    let malformed = || PartitionError::MalformedPath {
        expected: tree_depth(leaf_count),
        actual: path.len(),
    };

    let mut node = raw_index + leaf_count;
    let mut current = hash_leaf(value);
    for sibling in path {
        if node <= 1 {
            return Err(malformed());
        }
        current = if node % 2 == 0 {
            hash_node(&current, sibling)
        } else {
            hash_node(sibling, &current)
        };
        node /= 2;
    }
    if node != 1 {
        return Err(malformed());
    }

    Ok(current == *root)
}
