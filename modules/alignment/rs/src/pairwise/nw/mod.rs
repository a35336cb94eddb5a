//! Global (Needleman-Wunsch) alignment of a query against a target sequence.
//!
//! All aligners consume both sequences entirely and allocate their DP matrices per call,
//! so a single aligner can be shared between threads.

pub use affine::Affine;
pub use algorithm::Algorithm;
pub use matrix::Matrix;
pub use simple::Simple;

use crate::pairwise::Alignment;
use crate::Score;

mod affine;
mod algorithm;
mod matrix;
mod simple;
mod traceback;

pub trait Aligner {
    type Score: Score;

    /// Globally align `query` against `target`.
    fn align(&self, target: &[u8], query: &[u8]) -> Alignment<Self::Score>;
}

impl<T: Aligner + ?Sized> Aligner for &T {
    type Score = T::Score;

    fn align(&self, target: &[u8], query: &[u8]) -> Alignment<Self::Score> {
        (**self).align(target, query)
    }
}
