use derive_more::{Display, Error};

/// Failures of the alignment reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Error)]
pub enum Error {
    #[display("Nothing to reconcile: the list of alignments is empty")]
    EmptyInput,
    /// The aligned reference of an alignment has a different number of bases than the first one.
    #[display(
        "Reference of alignment #{index} ({id}) has {actual} bases, expected {expected} as in the first alignment"
    )]
    ReferenceMismatch {
        index: usize,
        id: String,
        expected: usize,
        actual: usize,
    },
}
