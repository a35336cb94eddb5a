use std::fmt::Display;

use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

use pairstack_core_rs::loc::Orientation;
use pairstack_core_rs::num::PrimUInt;
use pairstack_core_rs::seq;

use super::op::Op;
use super::step::Step;
use crate::Score;

/// A global alignment of a query (read) against a reference window.
///
/// Both aligned sequences are stored column by column with `-` marking gaps, so that
/// `query[i]` is aligned to `reference[i]`.
#[derive(Clone, PartialEq, Debug, Default, Getters, Dissolve)]
pub struct Alignment<S: Score> {
    /// Identifier of the query. Empty until the query orientation is selected.
    query_id: String,
    /// Aligned query.
    query: Vec<u8>,
    /// Aligned reference, same length as the aligned query.
    reference: Vec<u8>,
    score: S,
}

impl<S: Score> Alignment<S> {
    /// Create an alignment from already gapped sequences.
    pub fn new(
        query_id: impl Into<String>,
        query: impl Into<Vec<u8>>,
        reference: impl Into<Vec<u8>>,
        score: S,
    ) -> Result<Self> {
        let (query, reference) = (query.into(), reference.into());
        ensure!(
            query.len() == reference.len(),
            "Aligned query and reference must have the same length, got {} and {}",
            query.len(),
            reference.len()
        );
        Ok(Self::from_parts(query_id.into(), query, reference, score))
    }

    // Aligners produce columns in pairs, the length invariant holds by construction.
    pub(crate) fn from_parts(
        query_id: String,
        query: Vec<u8>,
        reference: Vec<u8>,
        score: S,
    ) -> Self {
        debug_assert_eq!(query.len(), reference.len());
        Self {
            query_id,
            query,
            reference,
            score,
        }
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.reference.len()
    }

    /// Checks if the alignment has no columns, i.e. both sequences were empty.
    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
    }

    pub fn set_query_id(&mut self, query_id: impl Into<String>) -> &mut Self {
        self.query_id = query_id.into();
        self
    }

    pub fn with_query_id(mut self, query_id: impl Into<String>) -> Self {
        self.set_query_id(query_id);
        self
    }

    /// Orientation of the query encoded in its identifier (`/F` or `/R` suffix), if any.
    pub fn orientation(&self) -> Option<Orientation> {
        Orientation::from_tagged(&self.query_id)
    }

    /// Ungapped query.
    pub fn query_seq(&self) -> Vec<u8> {
        seq::ungapped(&self.query)
    }

    /// Ungapped reference.
    pub fn reference_seq(&self) -> Vec<u8> {
        seq::ungapped(&self.reference)
    }

    /// Per-column operations. Columns with gaps on both sides are skipped.
    pub fn ops(&self) -> impl Iterator<Item = Op> + '_ {
        self.reference
            .iter()
            .zip(self.query.iter())
            .filter_map(|(r, q)| Op::classify(*r, *q))
    }

    /// Run-length encoded operations.
    pub fn steps<Len: PrimUInt>(&self) -> Vec<Step<Len>> {
        Step::encode(self.ops())
    }

    /// Returns the RLE representation of the alignment, e.g. `3=1I2X`.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps::<u32>().iter())
    }
}

impl<S: Score + Display> Display for Alignment<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} (score: {})", self.query_id, self.score)?;
        writeln!(f, "{}", String::from_utf8_lossy(&self.reference))?;
        write!(f, "{}", String::from_utf8_lossy(&self.query))
    }
}
