use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use policy_foreach::predicate::predicate;
use policy_foreach::sequences::random_seq;
use policy_foreach::{for_each_policy, Policy};

fn policies(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut group = c.benchmark_group("for_each_policies");
    for &size in &[1_000usize, 100_000, 1_000_000] {
        let seq = random_seq(size, &mut rng);
        for policy in Policy::ALL {
            group.bench_with_input(BenchmarkId::new(policy.label(), size), &seq, |b, seq| {
                b.iter(|| {
                    for_each_policy(seq, policy, |&x| {
                        predicate(x);
                    })
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, policies);
criterion_main!(benches);
