use pairstack_core_rs::seq::GAP;

use crate::pairwise::Alignment;
use crate::Score;

/// Alignment columns collected from the end of the alignment towards its start.
pub(super) struct Columns {
    query: Vec<u8>,
    target: Vec<u8>,
}

impl Columns {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            query: Vec::with_capacity(capacity),
            target: Vec::with_capacity(capacity),
        }
    }

    /// Match or mismatch column.
    #[inline(always)]
    pub fn diagonal(&mut self, target: u8, query: u8) {
        self.target.push(target);
        self.query.push(query);
    }

    /// Query symbol against a gap in the target.
    #[inline(always)]
    pub fn insertion(&mut self, query: u8) {
        self.target.push(GAP);
        self.query.push(query);
    }

    /// Target symbol against a gap in the query.
    #[inline(always)]
    pub fn deletion(&mut self, target: u8) {
        self.target.push(target);
        self.query.push(GAP);
    }

    pub fn finish<S: Score>(mut self, score: S) -> Alignment<S> {
        self.query.reverse();
        self.target.reverse();
        Alignment::from_parts(String::new(), self.query, self.target, score)
    }
}
