//! Micro-benchmarks comparing strategies for applying an elementwise
//! predicate over integer sequences: a plain sequential pass, policy-driven
//! iteration and a hand-partitioned multithreaded pass.
#![warn(clippy::all)]
#![deny(missing_docs)]

#[cfg(feature = "logs")]
extern crate rayon_logs as rayon;

/// Benchmark parts and their configuration.
pub mod harness;
/// Cutting sequences into worker chunks and timing the partitioned pass.
pub mod partition;
/// Execution policies for elementwise application.
pub mod policy;
/// The benchmarked predicate.
pub mod predicate;
/// Random input sequences.
pub mod sequences;

pub use harness::{
    generate_sequences, partition_sweep, policy_comparison, sequential_baseline, Config,
    SweepOutcome,
};
pub use policy::{for_each_policy, Policy};
