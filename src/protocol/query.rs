//! Proof messages and their canonical byte encoding

use crate::hash::Digest;
use crate::merkle::AuthPath;

/// One round of the protocol: a commitment and two adjacent openings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    /// Root of this round's zero-knowledge tree
    pub root: Digest,
    /// Challenge index `i ∈ [0, n]`
    pub index: usize,
    /// Witness entry at `i`
    pub value: i64,
    pub path: AuthPath,
    /// Witness entry at `(i + 1) mod (n + 1)`
    pub next_value: i64,
    pub next_path: AuthPath,
}

impl Query {
    /// Append the canonical encoding:
    /// `root ‖ index:u64 ‖ value:i64 ‖ |path|:u64 ‖ path ‖ next_value:i64 ‖
    /// |next_path|:u64 ‖ next_path`, integers little-endian.
    pub fn write_canonical(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.root);
        out.extend_from_slice(&(self.index as u64).to_le_bytes());
        out.extend_from_slice(&self.value.to_le_bytes());
        write_path(out, &self.path);
        out.extend_from_slice(&self.next_value.to_le_bytes());
        write_path(out, &self.next_path);
    }

    pub fn encoded_len(&self) -> usize {
        32 + 8 + 8 + 8 + 32 * self.path.len() + 8 + 8 + 32 * self.next_path.len()
    }
}

fn write_path(out: &mut Vec<u8>, path: &[Digest]) {
    out.extend_from_slice(&(path.len() as u64).to_le_bytes());
    for sibling in path {
        out.extend_from_slice(sibling);
    }
}

/// Non-interactive proof: one query per round, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Proof {
    queries: Vec<Query>,
}

impl Proof {
    pub fn new(queries: Vec<Query>) -> Self {
        Self { queries }
    }

    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    /// Mutable view of the rounds; the round count stays fixed
    pub fn queries_mut(&mut self) -> &mut [Query] {
        &mut self.queries
    }

    /// Number of rounds
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Total canonical encoding size of all queries
    pub fn size_in_bytes(&self) -> usize {
        self.queries.iter().map(Query::encoded_len).sum()
    }
}

impl<'a> IntoIterator for &'a Proof {
    type Item = &'a Query;
    type IntoIter = std::slice::Iter<'a, Query>;

    fn into_iter(self) -> Self::IntoIter {
        self.queries.iter()
    }
}
