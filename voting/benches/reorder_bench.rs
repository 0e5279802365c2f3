use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rust_decimal::Decimal;
use veolas_types::{Allocation, BaseUnits, ChainId, StakingContract, UserVote, UserVotes};
use veolas_voting::{reorder_votes, simulate};

/// `n` recorded votes and an allocation that moves every one of them:
/// a third dropped, a third halved, a third doubled, plus `n / 3` new.
fn make_rotation(n: usize) -> (Vec<Allocation>, UserVotes, Vec<StakingContract>) {
    let per_nominee = BaseUnits::MAX_WEIGHT.get() / (2 * n as u64).max(1);
    let address = |i: usize| format!("0x{:040x}", i + 1);

    let user_votes: UserVotes = (0..n)
        .map(|i| {
            (
                address(i).as_str().into(),
                UserVote::new(ChainId::GNOSIS, BaseUnits::new(per_nominee)),
            )
        })
        .collect();

    let mut allocations = Vec::new();
    for i in 0..n {
        let units = match i % 3 {
            0 => continue,
            1 => per_nominee / 2,
            _ => per_nominee * 2,
        };
        allocations.push(Allocation::new(
            address(i).as_str(),
            ChainId::GNOSIS,
            Decimal::new(units as i64, 2),
        ));
    }
    for i in n..n + n / 3 {
        allocations.push(Allocation::new(
            address(i).as_str(),
            ChainId::BASE,
            Decimal::new(per_nominee as i64, 2),
        ));
    }

    let contracts = (0..n + n / 3)
        .map(|i| StakingContract {
            address: address(i).as_str().into(),
            chain_id: ChainId::GNOSIS,
            metadata: None,
        })
        .collect();

    (allocations, user_votes, contracts)
}

fn bench_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder_votes");

    for nominees in [3usize, 30, 300] {
        let (allocations, user_votes, contracts) = make_rotation(nominees);
        group.bench_with_input(BenchmarkId::new("rotation", nominees), &nominees, |b, _| {
            b.iter(|| {
                black_box(reorder_votes(
                    black_box(&allocations),
                    black_box(&user_votes),
                    black_box(&contracts),
                ))
            });
        });
    }

    group.finish();
}

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for nominees in [3usize, 30, 300] {
        let (allocations, user_votes, contracts) = make_rotation(nominees);
        let ordered = reorder_votes(&allocations, &user_votes, &contracts);
        group.bench_with_input(BenchmarkId::new("rotation", nominees), &nominees, |b, _| {
            b.iter(|| {
                black_box(simulate(
                    black_box(&user_votes),
                    black_box(&ordered),
                    BaseUnits::MAX_WEIGHT,
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reorder, bench_simulate);
criterion_main!(benches);
