use derive_getters::Dissolve;
use derive_more::Constructor;

use pairstack_core_rs::num::Float;

use super::{Scheme, Score};

/// Scoring with separate gap-open and gap-extend costs.
///
/// A run of `k` gaps costs `gap_open + (k - 1) * gap_extend`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Hash, Dissolve, Constructor)]
pub struct Affine<S: Score> {
    pub matched: S,
    pub mismatched: S,
    pub gap_open: S,
    pub gap_extend: S,
    /// Reserved for ambiguity-aware substitution scores. Not used by the recurrence:
    /// any pair of different symbols scores `mismatched`.
    pub partial_match: S,
}

impl<S: Score + Float> Default for Affine<S> {
    fn default() -> Self {
        let half = S::one() / (S::one() + S::one());
        Affine {
            matched: S::zero(),
            mismatched: -S::one(),
            gap_open: -S::one(),
            gap_extend: -half,
            partial_match: S::zero(),
        }
    }
}

impl<S: Score> Scheme for Affine<S> {
    type Score = S;

    #[inline(always)]
    fn matched(&self) -> S {
        self.matched
    }

    #[inline(always)]
    fn mismatched(&self) -> S {
        self.mismatched
    }
}
