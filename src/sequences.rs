//! Random input sequences.
use rand::Rng;

/// Draw `size` integers independently and uniformly from [0, 100].
///
/// The engine is borrowed so its state keeps evolving across calls;
/// consecutive sequences are independent draws from one stream.
pub fn random_seq<R: Rng>(size: usize, rng: &mut R) -> Vec<i32> {
    (0..size).map(|_| rng.gen_range(0..=100)).collect()
}
