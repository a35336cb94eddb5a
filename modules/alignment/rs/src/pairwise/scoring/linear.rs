use derive_getters::Dissolve;
use derive_more::Constructor;

use super::{Scheme, Score};

/// Scoring with a constant per-symbol gap cost.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Hash, Dissolve, Constructor)]
pub struct Linear<S: Score> {
    pub matched: S,
    pub mismatched: S,
    /// Cost of a query symbol placed against a reference gap.
    pub insertion: S,
    /// Cost of a reference symbol placed against a query gap.
    pub deletion: S,
}

impl<S: Score> Default for Linear<S> {
    fn default() -> Self {
        Linear {
            matched: S::zero(),
            mismatched: -(S::one() + S::one()),
            insertion: -S::one(),
            deletion: -S::one(),
        }
    }
}

impl<S: Score> Scheme for Linear<S> {
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
