use pairstack_core_rs::num::Float;

use super::{Affine, Aligner, Simple};
use crate::pairwise::{scoring, Alignment};
use crate::Score;

/// Gap model selected at runtime.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Algorithm<S: Score> {
    Simple(Simple<S>),
    Affine(Affine<S>),
}

impl<S: Score> Algorithm<S> {
    pub fn simple(scoring: scoring::Linear<S>) -> Self {
        Algorithm::Simple(Simple::new(scoring))
    }

    pub fn affine(scoring: scoring::Affine<S>) -> Self {
        Algorithm::Affine(Affine::new(scoring))
    }

    pub fn is_affine(&self) -> bool {
        matches!(self, Algorithm::Affine(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Simple(_) => "simple",
            Algorithm::Affine(_) => "affine",
        }
    }
}

impl<S: Score + Float> Algorithm<S> {
    /// Default parameters of the affine or the linear gap model.
    pub fn with_defaults(use_affine: bool) -> Self {
        if use_affine {
            Algorithm::Affine(Affine::default())
        } else {
            Algorithm::Simple(Simple::default())
        }
    }
}

impl<S: Score + Float> Default for Algorithm<S> {
    fn default() -> Self {
        Self::with_defaults(false)
    }
}

impl<S: Score> Aligner for Algorithm<S> {
    type Score = S;

    fn align(&self, target: &[u8], query: &[u8]) -> Alignment<S> {
        match self {
            Algorithm::Simple(aligner) => aligner.align(target, query),
            Algorithm::Affine(aligner) => aligner.align(target, query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        let simple = Algorithm::<f64>::with_defaults(false);
        let affine = Algorithm::<f64>::with_defaults(true);
        assert!(!simple.is_affine());
        assert!(affine.is_affine());
        assert_eq!(Algorithm::<f64>::default(), simple);

        // One 2-symbol deletion: -2 under the linear model, -1.5 under the affine one
        assert_eq!(*simple.align(b"ACGTAC", b"ACAC").score(), -2.0);
        assert_eq!(*affine.align(b"ACGTAC", b"ACAC").score(), -1.5);
        assert_eq!(simple.name(), "simple");
    }
}
