use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use pairstack_alignment_rs::Score;

use crate::GapSizes;

/// Identifier of the reference row in reconciled alignments.
pub const REFERENCE_ID: &str = "Reference";

/// A single sequence of the reconciled alignment.
#[derive(Clone, PartialEq, Debug, Default, Getters, Dissolve, Constructor)]
pub struct Row<S: Score> {
    id: String,
    score: S,
    sequence: Vec<u8>,
}

/// Reference-anchored multiple alignment: the reference row followed by one row per read, all of
/// the same width.
#[derive(Clone, PartialEq, Debug, Getters, Dissolve)]
pub struct Msa<S: Score> {
    gaps: GapSizes,
    rows: Vec<Row<S>>,
}

impl<S: Score> Msa<S> {
    pub(crate) fn new(gaps: GapSizes, rows: Vec<Row<S>>) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|x| x.sequence.len() == gaps.width()));
        Self { gaps, rows }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.gaps.width()
    }

    pub fn reference(&self) -> &Row<S> {
        &self.rows[0]
    }

    pub fn reads(&self) -> &[Row<S>] {
        &self.rows[1..]
    }

    pub fn into_rows(self) -> Vec<Row<S>> {
        self.rows
    }
}
