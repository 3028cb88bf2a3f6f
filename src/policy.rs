//! Execution policies for elementwise application.
use rayon::prelude::*;

/// Block width handed to the unsequenced variants. The inner loop over one
/// block carries no cross-iteration ordering.
const UNSEQ_BLOCK: usize = 4096;

/// Permitted relaxations when applying a function over a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// One element after the other, in original order.
    Sequential,
    /// Elements spread over rayon's pool, no ordering between evaluations.
    Parallel,
    /// Single thread, block at a time. Stands in for a vectorization hint,
    /// which rust does not expose; otherwise equivalent to `Sequential`.
    Unsequenced,
    /// Both relaxations combined: blocks spread over rayon's pool.
    ParallelUnsequenced,
}

impl Policy {
    /// All policies, in reporting order.
    pub const ALL: [Policy; 4] = [
        Policy::Sequential,
        Policy::Parallel,
        Policy::Unsequenced,
        Policy::ParallelUnsequenced,
    ];

    /// Label used by the benchmark report.
    pub fn label(self) -> &'static str {
        match self {
            Policy::Sequential => "Sequential (seq)",
            Policy::Parallel => "Parallel (par)",
            Policy::Unsequenced => "Unsequenced (unseq)",
            Policy::ParallelUnsequenced => "Parallel Unsequenced (par_unseq)",
        }
    }
}

/// Apply `work` to every element of `slice` exactly once under `policy`.
/// The parallel policies invoke `work` concurrently and unordered, so it
/// must not rely on sequencing; a pure function qualifies.
pub fn for_each_policy<T, F>(slice: &[T], policy: Policy, work: F)
where
    T: Sync,
    F: Fn(&T) + Send + Sync,
{
    match policy {
        Policy::Sequential => slice.iter().for_each(|e| work(e)),
        Policy::Parallel => slice.par_iter().for_each(|e| work(e)),
        Policy::Unsequenced => slice
            .chunks(UNSEQ_BLOCK)
            .for_each(|block| block.iter().for_each(|e| work(e))),
        Policy::ParallelUnsequenced => slice
            .par_chunks(UNSEQ_BLOCK)
            .for_each(|block| block.iter().for_each(|e| work(e))),
    }
}
