use std::cmp::Ordering;
use std::thread::available_parallelism;

use eyre::{Result, WrapErr};
use rayon::{ThreadPool, ThreadPoolBuilder};

// Negative requests count back from the number of available cores: -1 means all of them.
fn normalize(requested: isize, cores: isize) -> usize {
    match requested.cmp(&0) {
        Ordering::Less => (cores + requested + 1).max(1) as usize,
        Ordering::Equal => 1,
        Ordering::Greater => requested.min(cores) as usize,
    }
}

/// Number of worker threads to use for the requested amount.
pub fn available(requested: isize) -> Result<usize> {
    let cores = available_parallelism()
        .wrap_err("Failed to query the number of available cores")?
        .get() as isize;
    Ok(normalize(requested, cores))
}

/// Build a thread pool sized by [`available`].
pub fn pool(requested: isize) -> Result<ThreadPool> {
    let threads = available(requested)?;
    log::debug!("Building a thread pool with {threads} thread(s) (requested: {requested})");
    ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .wrap_err_with(|| format!("Failed to build a thread pool with {threads} threads"))
}
