use eyre::Result;
use rayon::prelude::*;
use rayon::ThreadPool;

use pairstack_alignment_rs::pairwise::nw::Algorithm;
use pairstack_alignment_rs::pairwise::{orientation, Alignment};
use pairstack_alignment_rs::Score;
use pairstack_core_rs::num::Float;
use pairstack_core_rs::parallelism;

use crate::{reconcile, reconcile_in, Msa};

pub struct EngineBuilder<S: Score> {
    algorithm: Algorithm<S>,
    thread_pool: Option<ThreadPool>,
    threads: Option<isize>,
}

impl<S: Score + Float> Default for EngineBuilder<S> {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}

impl<S: Score> EngineBuilder<S> {
    pub fn new(algorithm: Algorithm<S>) -> Self {
        Self {
            algorithm,
            thread_pool: None,
            threads: None,
        }
    }

    pub fn set_algorithm(mut self, algorithm: Algorithm<S>) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn set_thread_pool(mut self, pool: ThreadPool) -> Self {
        self.thread_pool = Some(pool);
        self
    }

    /// Number of worker threads: 0 means a single thread, negative values count back from all
    /// available cores (-1 is all of them).
    pub fn set_threads(mut self, threads: isize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn build(self) -> Result<Engine<S>> {
        let thread_pool = match (self.thread_pool, self.threads) {
            (Some(pool), Some(threads)) => {
                log::warn!(
                    "Both a thread pool and a number of threads ({threads}) were provided, using the pool with {} threads",
                    pool.current_num_threads()
                );
                Some(pool)
            }
            (Some(pool), None) => Some(pool),
            (None, Some(threads)) => Some(parallelism::pool(threads)?),
            (None, None) => None,
        };
        Ok(Engine {
            algorithm: self.algorithm,
            thread_pool,
        })
    }
}

/// Aligns a batch of reads against a single reference in their best orientation and reconciles
/// the results.
pub struct Engine<S: Score> {
    algorithm: Algorithm<S>,
    thread_pool: Option<ThreadPool>,
}

impl<S: Score + Float> Engine<S> {
    pub fn builder() -> EngineBuilder<S> {
        EngineBuilder::default()
    }
}

impl<S: Score> Engine<S> {
    pub fn algorithm(&self) -> &Algorithm<S> {
        &self.algorithm
    }

    /// Number of threads used by the engine.
    pub fn threads(&self) -> usize {
        self.thread_pool
            .as_ref()
            .map_or(1, |pool| pool.current_num_threads())
    }

    /// Align every `(id, read)` pair in its best orientation. Results follow the input order.
    ///
    /// If several reads are invalid, the error of the first one in the input order is returned.
    pub fn align<Id, Read>(
        &self,
        reference: &[u8],
        reads: &[(Id, Read)],
    ) -> Result<Vec<Alignment<S>>>
    where
        Id: AsRef<str> + Sync,
        Read: AsRef<[u8]> + Sync,
    {
        log::debug!(
            "Aligning {} read(s) against a {} bp reference ({} algorithm, {} thread(s))",
            reads.len(),
            reference.len(),
            self.algorithm.name(),
            self.threads()
        );
        let best = |(id, read): &(Id, Read)| {
            orientation::best(&self.algorithm, reference, id.as_ref(), read.as_ref())
        };

        match &self.thread_pool {
            Some(pool) => {
                // Errors are reported in the input order
                let results: Vec<_> = pool.install(|| reads.par_iter().map(best).collect());
                results.into_iter().collect()
            }
            None => reads.iter().map(best).collect(),
        }
    }

    /// Align all reads and reconcile them into a reference-anchored multiple alignment.
    pub fn run<Id, Read>(&self, reference: &[u8], reads: &[(Id, Read)]) -> Result<Msa<S>>
    where
        Id: AsRef<str> + Sync,
        Read: AsRef<[u8]> + Sync,
    {
        let alignments = self.align(reference, reads)?;
        match &self.thread_pool {
            Some(pool) => reconcile_in(pool, &alignments),
            None => reconcile(&alignments),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() -> Result<()> {
        let engine = Engine::<f64>::builder().build()?;
        assert_eq!(engine.threads(), 1);
        assert!(!engine.algorithm().is_affine());

        let engine = Engine::<f64>::builder()
            .set_algorithm(Algorithm::with_defaults(true))
            .set_threads(2)
            .build()?;
        assert!(engine.algorithm().is_affine());
        assert!(engine.threads() >= 1 && engine.threads() <= 2);

        let pool = rayon::ThreadPoolBuilder::new().num_threads(3).build()?;
        let engine = Engine::<f64>::builder()
            .set_thread_pool(pool)
            .set_threads(1)
            .build()?;
        assert_eq!(engine.threads(), 3);
        Ok(())
    }

    #[test]
    fn test_invalid_read() -> Result<()> {
        let engine = Engine::<f64>::builder().build()?;
        let reads = [("ok", "ACGT"), ("broken", "ACNT")];
        let err = engine.align(b"ACGT", &reads).unwrap_err();
        assert!(format!("{err:?}").contains("broken"));
        Ok(())
    }

    #[test]
    fn test_first_invalid_read() -> Result<()> {
        let mut reads: Vec<(String, &str)> =
            (0..64).map(|i| (format!("ok{i}"), "ACGT")).collect();
        reads[17] = ("first-broken".to_string(), "ACXT");
        reads[40] = ("second-broken".to_string(), "NCGT");
        reads[63] = ("third-broken".to_string(), "ACGU");

        let engine = Engine::<f64>::builder().set_threads(4).build()?;
        for _ in 0..8 {
            let err = engine.align(b"ACGT", &reads).unwrap_err();
            let message = format!("{err:?}");
            assert!(message.contains("first-broken"), "{message}");
            assert!(!message.contains("second-broken"));
        }
        Ok(())
    }
}
