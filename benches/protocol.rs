use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use partition_zk::{generate_proof_with_rng, verify_proof, Problem};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Random satisfiable instance: weights for the minus side are chosen so the
/// last weight balances the signed sum.
fn random_instance(n: usize, rng: &mut ChaCha20Rng) -> (Problem, Vec<i64>) {
    let mut weights = Vec::with_capacity(n);
    let mut assignment = Vec::with_capacity(n);
    let mut sum = 0i64;
    for _ in 0..n - 1 {
        let w = rng.gen_range(1..1_000);
        let side = if rng.gen::<bool>() { 1 } else { -1 };
        sum += side * w;
        weights.push(w);
        assignment.push(side);
    }
    weights.push(sum.abs());
    assignment.push(if sum > 0 { -1 } else { 1 });
    (Problem::new(weights).unwrap(), assignment)
}

/// Benchmark: prover, rounds × O(n) hashing
fn bench_prove(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition_prove");
    group.sample_size(20);
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    for n in [16usize, 256, 4096].iter() {
        let (problem, assignment) = random_instance(*n, &mut rng);
        for rounds in [10usize, 40].iter() {
            group.bench_with_input(
                BenchmarkId::new(format!("n={}", n), rounds),
                rounds,
                |b, &rounds| {
                    b.iter(|| {
                        black_box(
                            generate_proof_with_rng(&problem, &assignment, rounds, &mut rng).unwrap(),
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

/// Benchmark: verifier, rounds × O(log n) hashing
fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition_verify");
    let mut rng = ChaCha20Rng::seed_from_u64(1);

    for n in [16usize, 256, 4096].iter() {
        let (problem, assignment) = random_instance(*n, &mut rng);
        let proof = generate_proof_with_rng(&problem, &assignment, 40, &mut rng).unwrap();
        println!("n={} rounds=40 proof size: {} bytes", n, proof.size_in_bytes());

        group.bench_with_input(BenchmarkId::from_parameter(format!("n={}", n)), &proof, |b, proof| {
            b.iter(|| black_box(verify_proof(&problem, proof).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_prove, bench_verify);
criterion_main!(benches);
