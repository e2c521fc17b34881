//! Utility functions

/// Smallest power of two greater than or equal to `n`, with `0` mapping to `1`
pub fn next_power_of_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Number of levels above the leaves in a tree with `leaf_count` leaves
pub fn tree_depth(leaf_count: usize) -> usize {
    leaf_count.max(1).trailing_zeros() as usize
}
