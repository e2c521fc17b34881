use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use partition_zk::{verify_zk_path, MerkleTree, ZkMerkleTree};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Benchmark: plain tree construction, O(n) hashes
/// Crosses PARALLEL_THRESHOLD at 2^10 leaves
fn bench_merkle_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("merkle_build");
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    for log_size in [6, 10, 14, 16].iter() {
        let size = 1usize << log_size;
        let data: Vec<i64> = (0..size).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("2^{}", log_size)),
            &data,
            |b, data| b.iter(|| black_box(MerkleTree::build(data).unwrap())),
        );
    }
    group.finish();
}

/// Benchmark: zk tree construction (2n leaves plus randomness)
fn bench_zk_merkle_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("zk_merkle_build");
    let mut rng = ChaCha20Rng::seed_from_u64(1);

    for log_size in [6, 10, 14].iter() {
        let size = 1usize << log_size;
        let data: Vec<i64> = (0..size as i64).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("2^{}", log_size)),
            &data,
            |b, data| b.iter(|| black_box(ZkMerkleTree::build(data, &mut rng).unwrap())),
        );
    }
    group.finish();
}

/// Benchmark: single opening and verification, O(log n)
fn bench_path_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("zk_path_verify");
    let mut rng = ChaCha20Rng::seed_from_u64(2);

    for log_size in [6, 10, 14].iter() {
        let size = 1usize << log_size;
        let data: Vec<i64> = (0..size as i64).collect();
        let tree = ZkMerkleTree::build(&data, &mut rng).unwrap();
        let root = tree.root();
        let index = size / 3;
        let (value, path) = tree.val_and_path(index).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("2^{}", log_size)),
            &path,
            |b, path| {
                b.iter(|| black_box(verify_zk_path(&root, size, index, value, path).unwrap()))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_merkle_build, bench_zk_merkle_build, bench_path_verify);
criterion_main!(benches);
