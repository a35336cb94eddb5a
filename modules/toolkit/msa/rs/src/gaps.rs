use std::iter::repeat_n;

use derive_getters::Dissolve;

use pairstack_alignment_rs::pairwise::Alignment;
use pairstack_alignment_rs::Score;
use pairstack_core_rs::seq::{self, GAP};

use crate::Error;

/// Maximum number of gap columns observed at each insertion site of the reference.
///
/// Site `k < bases` sits right before the reference base `k`, site `bases` is the trailing site
/// after the last base.
#[derive(Clone, PartialEq, Eq, Debug, Dissolve)]
pub struct GapSizes {
    sizes: Vec<usize>,
}

impl GapSizes {
    pub fn new(bases: usize) -> Self {
        Self {
            sizes: vec![0; bases + 1],
        }
    }

    /// Number of reference bases.
    pub fn bases(&self) -> usize {
        self.sizes.len() - 1
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Total number of gap columns across all sites.
    pub fn total(&self) -> usize {
        self.sizes.iter().sum()
    }

    /// Number of columns in each re-gapped sequence.
    pub fn width(&self) -> usize {
        self.bases() + self.total()
    }

    /// Record gap runs of the aligned reference, keeping the largest run seen at each site.
    ///
    /// `index` is the position of the alignment in its batch and is used only for reporting.
    /// Fails if the aligned reference has a different number of bases.
    pub fn observe<S: Score>(
        &mut self,
        index: usize,
        alignment: &Alignment<S>,
    ) -> Result<(), Error> {
        let reference = alignment.reference();
        let actual = seq::count_bases(reference);
        if actual != self.bases() {
            log::error!(
                "Alignment #{index} ({}) is anchored to a reference with {actual} bases, while {} were expected",
                alignment.query_id(),
                self.bases()
            );
            return Err(Error::ReferenceMismatch {
                index,
                id: alignment.query_id().clone(),
                expected: self.bases(),
                actual,
            });
        }

        let (mut site, mut run) = (0, 0);
        for symbol in reference {
            if seq::is_gap(*symbol) {
                run += 1;
            } else {
                self.sizes[site] = self.sizes[site].max(run);
                site += 1;
                run = 0;
            }
        }
        self.sizes[site] = self.sizes[site].max(run);
        Ok(())
    }

    /// Element-wise maximum of two partial observations over the same reference.
    pub fn merge(mut self, other: &GapSizes) -> Self {
        debug_assert_eq!(self.sizes.len(), other.sizes.len());
        for (mine, theirs) in self.sizes.iter_mut().zip(&other.sizes) {
            *mine = (*mine).max(*theirs);
        }
        self
    }

    /// The reference padded with the maximum number of gaps at every site.
    pub fn regap_reference(&self, reference: &[u8]) -> Vec<u8> {
        let bases = seq::ungapped(reference);
        self.regap(&bases, &bases)
    }

    /// Expand an aligned (reference, query) pair to the common column layout.
    ///
    /// Gaps are added in front of the columns already present at each site, so the query symbols
    /// of an insertion stay next to the following reference base.
    ///
    /// # Panics
    ///
    /// Panics if the reference has more bases than [`GapSizes::bases`].
    pub fn regap(&self, reference: &[u8], query: &[u8]) -> Vec<u8> {
        debug_assert_eq!(reference.len(), query.len());
        let mut result = Vec::with_capacity(self.width());

        let (mut site, mut start) = (0, 0);
        for (pos, symbol) in reference.iter().enumerate() {
            if seq::is_gap(*symbol) {
                continue;
            }
            let present = pos - start;
            result.extend(repeat_n(GAP, self.sizes[site].saturating_sub(present)));
            result.extend_from_slice(&query[start..=pos]);
            start = pos + 1;
            site += 1;
        }

        let present = reference.len() - start;
        result.extend(repeat_n(GAP, self.sizes[site].saturating_sub(present)));
        result.extend_from_slice(&query[start..]);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alignment(query: &str, reference: &str) -> Alignment<i32> {
        Alignment::new("read", query, reference, 0).unwrap()
    }

    #[test]
    fn test_observe() {
        let mut sizes = GapSizes::new(4);
        assert_eq!(sizes.width(), 4);

        sizes.observe(0, &alignment("AACGT", "-ACGT")).unwrap();
        sizes.observe(1, &alignment("ACCCGTAA", "A--CGT--")).unwrap();
        sizes.observe(2, &alignment("ACGTA", "ACGT-")).unwrap();
        assert_eq!(sizes.sizes(), &[1, 2, 0, 0, 2]);
        assert_eq!(sizes.total(), 5);
        assert_eq!(sizes.width(), 9);
    }

    #[test]
    fn test_observe_mismatch() {
        let mut sizes = GapSizes::new(4);
        let err = sizes.observe(3, &alignment("ACG", "ACG")).unwrap_err();
        assert_eq!(
            err,
            Error::ReferenceMismatch {
                index: 3,
                id: "read".to_string(),
                expected: 4,
                actual: 3
            }
        );
        // Failed observations leave the sizes untouched
        assert_eq!(sizes, GapSizes::new(4));
    }

    #[test]
    fn test_merge() {
        let mut first = GapSizes::new(2);
        first.observe(0, &alignment("TAC", "-AC")).unwrap();
        let mut second = GapSizes::new(2);
        second.observe(0, &alignment("AGGC", "A--C")).unwrap();

        let merged = first.clone().merge(&second);
        assert_eq!(merged.sizes(), &[1, 2, 0]);
        assert_eq!(second.merge(&first), merged);
    }

    #[test]
    fn test_regap() {
        let mut sizes = GapSizes::new(2);
        sizes.observe(0, &alignment("TTAC", "--AC")).unwrap();
        sizes.observe(1, &alignment("AGCA", "A-C-")).unwrap();
        assert_eq!(sizes.sizes(), &[2, 1, 1]);

        assert_eq!(sizes.regap_reference(b"A-C"), b"--A-C-");
        assert_eq!(sizes.regap(b"--AC", b"TTAC"), b"TTA-C-");
        assert_eq!(sizes.regap(b"A-C-", b"AGCA"), b"--AGCA");
        // Existing gaps in the query are copied through
        assert_eq!(sizes.regap(b"AC", b"-C"), b"----C-");
    }
}
