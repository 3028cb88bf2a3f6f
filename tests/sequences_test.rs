use policy_foreach::sequences::random_seq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn sequences_have_requested_length_and_bounded_elements() {
    let mut rng = StdRng::from_entropy();
    for &size in &[1usize, 100, 10_000] {
        let seq = random_seq(size, &mut rng);
        assert_eq!(seq.len(), size);
        assert!(seq.iter().all(|&x| (0..=100).contains(&x)));
    }
}

#[test]
fn one_engine_yields_distinct_consecutive_sequences() {
    let mut rng = StdRng::seed_from_u64(42);
    let first = random_seq(1_000, &mut rng);
    let second = random_seq(1_000, &mut rng);
    assert_ne!(first, second);
}
