//! The three benchmark parts, driven over one shared set of sequences.
use crate::partition::{split_chunks, timed_partition_pass};
use crate::policy::{for_each_policy, Policy};
use crate::predicate::predicate;
use crate::sequences::random_seq;
use rand::Rng;
use time::precise_time_ns;

/// Benchmark parameters. Defaults: five sequences of sizes 100 to
/// 1_000_000 and a worker sweep over 2..=16 stepping by 2.
#[derive(Debug, Clone)]
pub struct Config {
    /// How many sequences to generate.
    pub sequence_count: usize,
    /// Length of the first sequence.
    pub base_size: usize,
    /// Each following sequence is this many times longer.
    pub growth_factor: usize,
    /// Smallest worker count tried by the partition sweep.
    pub min_workers: usize,
    /// Largest worker count tried (inclusive).
    pub max_workers: usize,
    /// Sweep step.
    pub workers_step: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sequence_count: 5,
            base_size: 100,
            growth_factor: 10,
            min_workers: 2,
            max_workers: 16,
            workers_step: 2,
        }
    }
}

impl Config {
    /// Sequence lengths, geometrically increasing.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        let factor = self.growth_factor;
        (0..self.sequence_count).scan(self.base_size, move |size, _| {
            let current = *size;
            *size *= factor;
            Some(current)
        })
    }

    /// Worker counts tried by the partition sweep.
    pub fn worker_counts(&self) -> impl Iterator<Item = usize> {
        (self.min_workers..=self.max_workers).step_by(self.workers_step)
    }
}

/// Generate all input sequences from one shared engine.
pub fn generate_sequences<R: Rng>(config: &Config, rng: &mut R) -> Vec<Vec<i32>> {
    config.sizes().map(|size| random_seq(size, rng)).collect()
}

fn timed_ms<F: FnOnce()>(work: F) -> f64 {
    let start = precise_time_ns();
    work();
    (precise_time_ns() - start) as f64 / 1e6
}

/// Part one: a plain sequential pass over every sequence.
pub fn sequential_baseline(sequences: &[Vec<i32>]) {
    println!("No policy (sequential):");
    for seq in sequences {
        let elapsed = timed_ms(|| {
            for &x in seq {
                predicate(x);
            }
        });
        println!("Sequence size = {}; time = {:.4} ms", seq.len(), elapsed);
    }
}

/// Part two: the same pass through each execution policy, timed separately.
pub fn policy_comparison(sequences: &[Vec<i32>]) {
    for seq in sequences {
        println!("\nSequence size = {}", seq.len());
        for policy in Policy::ALL {
            let elapsed = timed_ms(|| {
                for_each_policy(seq, policy, |&x| {
                    predicate(x);
                })
            });
            println!("  {}: {:.4} ms", policy.label(), elapsed);
        }
    }
}

/// Outcome of the partition sweep.
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    /// Worker count with the lowest average elapsed time.
    pub best_workers: usize,
    /// That count's average over all sequences, in milliseconds.
    pub best_avg_ms: f64,
    /// Every tried (worker count, average milliseconds) pair, in sweep order.
    pub averages: Vec<(usize, f64)>,
}

/// Part three: cut each sequence into chunks, run one worker thread per
/// chunk and wait on the rendezvous. Each worker count's elapsed times are
/// averaged over all sequences; the lowest average wins. Ties keep the
/// earlier count.
pub fn partition_sweep(sequences: &[Vec<i32>], config: &Config) -> SweepOutcome {
    println!("\nMultithreaded pass (variable worker count):");
    println!("{:<8} {:<15} {:<15}", "Workers", "Seq size", "Time(ms)");
    println!("{}", "-".repeat(40));

    let mut averages = Vec::new();
    for count in config.worker_counts() {
        let mut total_ms = 0.0;
        for seq in sequences {
            let chunks = split_chunks(seq, count);
            let elapsed = timed_partition_pass(chunks, |x| {
                predicate(x);
            });
            total_ms += elapsed;
            println!("{:<8} {:<15} {:<15.4}", count, seq.len(), elapsed);
        }
        averages.push((count, total_ms / sequences.len() as f64));
    }
    let (best_workers, best_avg_ms) =
        averages
            .iter()
            .cloned()
            .fold((0, f64::MAX), |best, candidate| {
                if candidate.1 < best.1 {
                    candidate
                } else {
                    best
                }
            });
    SweepOutcome {
        best_workers,
        best_avg_ms,
        averages,
    }
}
