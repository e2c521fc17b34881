use rand::RngCore;

use super::{ProtocolParams, Proof, Query};
use crate::errors::Result;
use crate::hash::digest_hex;
use crate::merkle::ZkMerkleTree;
use crate::transcript::Transcript;
use crate::witness::{build_witness, Problem};

/// Run `params.rounds` rounds, each with a fresh witness and tree.
///
/// Round `k`'s challenge is derived from the problem and the queries of
/// rounds `0..k`, so rounds are strictly sequential.
#[tracing::instrument(skip_all, name = "prove", fields(n = problem.len(), rounds = params.rounds))]
pub(super) fn prove<R: RngCore>(
    params: &ProtocolParams,
    problem: &Problem,
    assignment: &[i64],
    rng: &mut R,
) -> Result<Proof> {
    params.validate()?;
    problem.check_assignment(assignment)?;

    let n = problem.len();
    let witness_len = n + 1;
    let mut transcript = Transcript::new(problem);
    let mut queries = Vec::with_capacity(params.rounds);

    for round in 0..params.rounds {
        let witness = build_witness(problem, assignment, rng)?;
        let tree = ZkMerkleTree::build(witness.values(), rng)?;

        let index = transcript.challenge_index(n);
        let (value, path) = tree.val_and_path(index)?;
        let (next_value, next_path) = tree.val_and_path((index + 1) % witness_len)?;

        let query = Query {
            root: tree.root(),
            index,
            value,
            path,
            next_value,
            next_path,
        };
        tracing::trace!(round, index, root = %digest_hex(&query.root), "round committed");

        transcript.append_query(&query);
        queries.push(query);
    }

    Ok(Proof::new(queries))
}
