//! Fiat-Shamir transcript for the partition protocol
//!
//! The transcript is the canonical byte encoding of the problem followed by
//! every completed query. Each challenge index is drawn from a ChaCha20
//! stream keyed by SHA-256 of the encoding so far, so prover and verifier
//! derive identical indices from identical public messages.
//!
//! Encoding (integers little-endian, fixed width):
//! - `|label|:u64 ‖ label`
//! - problem: `0x01 ‖ n:u64 ‖ n × weight:i64`
//! - each query: `0x02 ‖` [`Query::write_canonical`]

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest as _, Sha256};

use crate::protocol::Query;
use crate::witness::Problem;

/// Domain separator at the head of every transcript
pub const TRANSCRIPT_LABEL: &[u8] = b"partition-zk/transcript-v1";

const PROBLEM_TAG: u8 = 0x01;
const QUERY_TAG: u8 = 0x02;

/// Append-only public record of the protocol
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    bytes: Vec<u8>,
    num_queries: usize,
}

impl Transcript {
    pub fn new(problem: &Problem) -> Self {
        let mut bytes = Vec::with_capacity(
            8 + TRANSCRIPT_LABEL.len() + 1 + 8 + 8 * problem.len(),
        );
        bytes.extend_from_slice(&(TRANSCRIPT_LABEL.len() as u64).to_le_bytes());
        bytes.extend_from_slice(TRANSCRIPT_LABEL);
        bytes.push(PROBLEM_TAG);
        bytes.extend_from_slice(&(problem.len() as u64).to_le_bytes());
        for weight in problem.weights() {
            bytes.extend_from_slice(&weight.to_le_bytes());
        }
        Self { bytes, num_queries: 0 }
    }

    pub fn append_query(&mut self, query: &Query) {
        self.bytes.push(QUERY_TAG);
        query.write_canonical(&mut self.bytes);
        self.num_queries += 1;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn num_queries(&self) -> usize {
        self.num_queries
    }

    /// SHA-256 of the encoding so far
    pub fn seed(&self) -> [u8; 32] {
        Sha256::digest(&self.bytes).into()
    }

    /// Challenge uniform in `[0, max]` derived from the current state.
    pub fn challenge_index(&self, max: usize) -> usize {
        let mut rng = ChaCha20Rng::from_seed(self.seed());
        sample_inclusive(&mut rng, max as u64) as usize
    }
}

/// Uniform sample from `[0, max]` by rejection over raw `u64` outputs.
///
/// Samples at or above `2^64 - (2^64 mod (max + 1))` are discarded, the rest
/// are reduced modulo `max + 1`.
fn sample_inclusive<R: RngCore>(rng: &mut R, max: u64) -> u64 {
    if max == u64::MAX {
        return rng.next_u64();
    }
    let span = max + 1;
    let rem = (u64::MAX % span + 1) % span;
    let zone = 0u64.wrapping_sub(rem);
    loop {
        let x = rng.next_u64();
        if rem == 0 || x < zone {
            return x % span;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem() -> Problem {
        Problem::new(vec![1, 2, 3, 6, 6, 6, 12]).unwrap()
    }

    fn query(index: usize) -> Query {
        Query {
            root: [index as u8; 32],
            index,
            value: 4,
            path: vec![[1u8; 32]; 4],
            next_value: 5,
            next_path: vec![[2u8; 32]; 4],
        }
    }

    #[test]
    fn transcript_deterministic() {
        let mut t1 = Transcript::new(&problem());
        let mut t2 = Transcript::new(&problem());
        assert_eq!(t1.challenge_index(7), t2.challenge_index(7));

        t1.append_query(&query(2));
        t2.append_query(&query(2));
        assert_eq!(t1.as_bytes(), t2.as_bytes());
        assert_eq!(t1.challenge_index(7), t2.challenge_index(7));
    }

    #[test]
    fn transcript_different_inputs() {
        let mut t1 = Transcript::new(&problem());
        let mut t2 = Transcript::new(&problem());
        t1.append_query(&query(2));
        t2.append_query(&query(3));
        assert_ne!(t1.seed(), t2.seed());
    }

    #[test]
    fn transcript_binds_problem() {
        let a = Transcript::new(&Problem::new(vec![1, 2, 3]).unwrap());
        let b = Transcript::new(&Problem::new(vec![1, 2, 4]).unwrap());
        assert_ne!(a.seed(), b.seed());
    }

    #[test]
    fn header_layout() {
        let t = Transcript::new(&Problem::new(vec![4, 11]).unwrap());
        let bytes = t.as_bytes();
        let label_end = 8 + TRANSCRIPT_LABEL.len();
        assert_eq!(&bytes[..8], &(TRANSCRIPT_LABEL.len() as u64).to_le_bytes());
        assert_eq!(&bytes[8..label_end], TRANSCRIPT_LABEL);
        assert_eq!(bytes[label_end], PROBLEM_TAG);
        assert_eq!(&bytes[label_end + 1..label_end + 9], &2u64.to_le_bytes());
        assert_eq!(bytes.len(), label_end + 9 + 16);
    }

    #[test]
    fn challenges_stay_in_range() {
        let mut t = Transcript::new(&problem());
        for round in 0..200 {
            let idx = t.challenge_index(7);
            assert!(idx <= 7);
            t.append_query(&query(round % 8));
        }
        assert_eq!(t.num_queries(), 200);
    }

    #[test]
    fn challenges_cover_range() {
        let mut seen = [false; 8];
        let mut t = Transcript::new(&problem());
        for round in 0..400 {
            seen[t.challenge_index(7)] = true;
            t.append_query(&query(round % 8));
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn sample_inclusive_edges() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..100 {
            assert_eq!(sample_inclusive(&mut rng, 0), 0);
            assert!(sample_inclusive(&mut rng, 1) <= 1);
        }
        // span of 2^63 + 1 rejects almost half of all samples but still terminates
        let big = 1u64 << 63;
        assert!(sample_inclusive(&mut rng, big) <= big);
    }
}
