use super::{Proof, Query};
use crate::errors::Result;
use crate::merkle::verify_zk_path;
use crate::transcript::Transcript;
use crate::witness::Problem;

/// Replay the transcript and check every round.
///
/// All rounds are checked even after one fails. Malformed authentication
/// paths are returned as errors, everything else as `Ok(false)`.
#[tracing::instrument(skip_all, name = "verify", fields(n = problem.len(), rounds = proof.len()))]
pub(super) fn verify(problem: &Problem, proof: &Proof) -> Result<bool> {
    if proof.is_empty() {
        tracing::debug!("rejecting empty proof");
        return Ok(false);
    }

    let n = problem.len();
    let mut transcript = Transcript::new(problem);
    let mut accepted = true;

    for (round, query) in proof.queries().iter().enumerate() {
        let index = transcript.challenge_index(n);
        accepted &= check_round(problem, round, index, query)?;
        transcript.append_query(query);
    }

    Ok(accepted)
}

/// Checks for one query against the recomputed challenge `index`.
fn check_round(problem: &Problem, round: usize, index: usize, query: &Query) -> Result<bool> {
    let n = problem.len();
    let mut ok = true;

    if query.index != index {
        tracing::debug!(round, expected = index, got = query.index, "challenge index mismatch");
        ok = false;
    }

    // i == n pairs the last witness entry with the first: both carry the shift
    let values_ok = if index < n {
        let diff = (i128::from(query.value) - i128::from(query.next_value)).abs();
        diff == i128::from(problem.weights()[index])
    } else {
        query.value == query.next_value
    };
    if !values_ok {
        tracing::debug!(round, index, "opened values inconsistent with the problem");
        ok = false;
    }

    let size = n + 1;
    if !verify_zk_path(&query.root, size, index, query.value, &query.path)? {
        tracing::debug!(round, index, "authentication failed for value");
        ok = false;
    }
    let next_index = (index + 1) % size;
    if !verify_zk_path(&query.root, size, next_index, query.next_value, &query.next_path)? {
        tracing::debug!(round, index = next_index, "authentication failed for next value");
        ok = false;
    }

    Ok(ok)
}
