pub use affine::Affine;
pub use linear::Linear;

pub use crate::Score;

mod affine;
mod linear;

/// Substitution scoring shared by all gap models.
pub trait Scheme {
    type Score: Score;

    /// Score of two identical symbols.
    fn matched(&self) -> Self::Score;

    /// Score of two different symbols.
    fn mismatched(&self) -> Self::Score;

    /// Score of aligning `target` against `query` in a single column.
    #[inline(always)]
    fn substitution(&self, target: u8, query: u8) -> Self::Score {
        if target == query {
            self.matched()
        } else {
            self.mismatched()
        }
    }
}
