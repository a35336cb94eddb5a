//! Flat entry points with `f64` scores, meant for thin binding layers.

use eyre::Result;

use crate::pairwise::nw::{self, Aligner, Algorithm};
use crate::pairwise::{orientation, scoring, Alignment};

/// Global alignment with a linear gap cost and default scoring `{0, -2, -1, -1}`.
pub fn align_simple(target: impl AsRef<[u8]>, query: impl AsRef<[u8]>) -> Alignment<f64> {
    nw::Simple::default().align(target.as_ref(), query.as_ref())
}

/// Global alignment with affine gap costs.
pub fn align_affine(
    target: impl AsRef<[u8]>,
    query: impl AsRef<[u8]>,
    params: &scoring::Affine<f64>,
) -> Alignment<f64> {
    nw::Affine::new(*params).align(target.as_ref(), query.as_ref())
}

/// Align the read in both orientations with default scoring and keep the best one.
pub fn align_best_orientation(
    reference: impl AsRef<[u8]>,
    read_id: &str,
    read: impl AsRef<[u8]>,
    use_affine: bool,
) -> Result<Alignment<f64>> {
    let aligner = Algorithm::with_defaults(use_affine);
    orientation::best(&aligner, reference.as_ref(), read_id, read.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_simple() {
        let aln = align_simple("GATTACA", "GCATGCU");
        assert_eq!(*aln.score(), -6.0);
        assert_eq!(aln.query(), b"GCA-TGCU");
        assert_eq!(aln.reference(), b"G-ATTACA");
    }

    #[test]
    fn test_align_affine() {
        let aln = align_affine(b"ACGTACGT", b"ACGTTTACGT", &scoring::Affine::default());
        assert_eq!(*aln.score(), -1.5);
        assert_eq!(aln.reference(), b"ACG--TACGT");
    }

    #[test]
    fn test_align_best_orientation() -> Result<()> {
        let aln = align_best_orientation("AAACCG", "r", "CGGTTT", true)?;
        assert_eq!(aln.query_id(), "r/R");
        assert_eq!(*aln.score(), 0.0);

        let aln = align_best_orientation("AAACCG", "r", "AAACCG", false)?;
        assert_eq!(aln.query_id(), "r/F");

        assert!(align_best_orientation("AAACCG", "r", "AAXCCG", false).is_err());
        Ok(())
    }
}
