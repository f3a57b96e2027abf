//! parallel.rs — split one sampling job across worker threads.
//!
//! Every worker owns its own `StdRng`, seeded in worker order from a master
//! generator, so no stream is shared. Output is the workers' masses
//! concatenated in worker order, which keeps a run reproducible for a fixed
//! `(seed, workers)` pair. Changing `workers` changes the masses.
//!
//! A sampler's `max_attempts` budget applies to each worker on its own, so a
//! parallel run may draw up to `workers × max_attempts` proposals in total.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::{errors::Result, sampler::ChabrierSampler};

/// Per-worker quotas: `size` spread as evenly as possible, remainder first.
fn quotas(size: usize, workers: usize) -> Vec<usize> {
    let base = size / workers;
    let rem = size % workers;
    (0..workers).map(|w| base + usize::from(w < rem)).collect()
}

/// Independent generators derived from `seed`, one per worker.
pub fn worker_streams(seed: u64, workers: usize) -> Vec<StdRng> {
    let mut master = StdRng::seed_from_u64(seed);
    (0..workers)
        .map(|_| StdRng::seed_from_u64(master.gen()))
        .collect()
}

/// Draw `size` masses using `workers` scoped threads.
///
/// `workers` is clamped to `1..=size` so no thread is spawned with nothing
/// to do. Each worker gets the full `max_attempts` budget for its own quota.
/// The first worker error, in worker order, is returned; its `attempts`
/// and `accepted` counts are that worker's. A panicking worker resumes its
/// panic on the calling thread.
pub fn sample_parallel(
    sampler: &ChabrierSampler,
    size: usize,
    workers: usize,
    seed: u64,
) -> Result<Vec<f64>> {
    let workers = workers.clamp(1, size.max(1));
    let streams = worker_streams(seed, workers);

    let results: Vec<Result<Vec<f64>>> = std::thread::scope(|s| {
        let handles: Vec<_> = streams
            .into_iter()
            .zip(quotas(size, workers))
            .enumerate()
            .map(|(w, (mut rng, quota))| {
                trace!(worker = w, quota, "spawning sampler worker");
                s.spawn(move || sampler.sample(&mut rng, quota))
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });

    let mut masses = Vec::with_capacity(size);
    for r in results {
        masses.extend(r?);
    }
    Ok(masses)
}
