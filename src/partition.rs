//! Cutting sequences into worker chunks and timing the partitioned pass.
use crossbeam::sync::WaitGroup;
use itertools::repeat_n;
use std::thread;
use time::precise_time_ns;

/// Chunk lengths cutting `len` elements into `count` contiguous pieces:
/// `len / count` each, with the first `len % count` taking one extra element.
pub fn chunk_sizes(len: usize, count: usize) -> impl Iterator<Item = usize> {
    let base = len / count;
    let remainder = len % count;
    repeat_n(base + 1, remainder).chain(repeat_n(base, count - remainder))
}

/// Cut `seq` into exactly `count` contiguous chunks, each an owned copy,
/// together covering `seq` once, in order, with no overlap.
pub fn split_chunks(seq: &[i32], count: usize) -> Vec<Vec<i32>> {
    let mut rest = seq;
    chunk_sizes(seq.len(), count)
        .map(|size| {
            let (chunk, tail) = rest.split_at(size);
            rest = tail;
            chunk.to_vec()
        })
        .collect()
}

/// Run one worker thread per chunk, each applying `work` to its elements in
/// order before signalling the shared wait group. Returns the milliseconds
/// from just before the first launch until the last signal released the
/// waiter; workers are joined after the clock stops.
pub fn timed_partition_pass<F>(chunks: Vec<Vec<i32>>, work: F) -> f64
where
    F: Fn(i32) + Clone + Send + 'static,
{
    let done = WaitGroup::new();
    let start = precise_time_ns();
    let workers: Vec<_> = chunks
        .into_iter()
        .map(|chunk| {
            let done = done.clone();
            let work = work.clone();
            thread::spawn(move || {
                for x in chunk {
                    work(x);
                }
                drop(done);
            })
        })
        .collect();
    done.wait();
    let elapsed = (precise_time_ns() - start) as f64 / 1e6;
    for worker in workers {
        worker.join().expect("worker thread panicked");
    }
    elapsed
}
