use pairstack_core_rs::seq;

/// `Op` describes a single column of a global pairwise alignment, read from the reference side.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Identical symbols in the reference and the query (=)
    Match,
    /// Different symbols in the reference and the query (X)
    Mismatch,
    /// A query symbol placed against a gap in the reference (I)
    Insertion,
    /// A reference symbol placed against a gap in the query (D)
    Deletion,
}

impl Op {
    /// Classify an alignment column. Columns with gaps on both sides carry no operation.
    pub fn classify(reference: u8, query: u8) -> Option<Self> {
        match (seq::is_gap(reference), seq::is_gap(query)) {
            (true, true) => None,
            (true, false) => Some(Op::Insertion),
            (false, true) => Some(Op::Deletion),
            (false, false) if reference == query => Some(Op::Match),
            (false, false) => Some(Op::Mismatch),
        }
    }

    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::Match => '=',
            Op::Mismatch => 'X',
            Op::Insertion => 'I',
            Op::Deletion => 'D',
        }
    }
}
