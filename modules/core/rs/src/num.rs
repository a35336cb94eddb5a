use std::fmt::Debug;

/// T values are non-negative primitive integers
pub trait PrimUInt: ::num::PrimInt + ::num::Unsigned + Debug + Default {}

impl<T: ::num::PrimInt + ::num::Unsigned + Debug + Default> PrimUInt for T {}

/// T values are float numbers
pub trait Float: ::num::Float + Debug + Default + Send + Sync {}

impl<T: ::num::Float + Debug + Default + Send + Sync> Float for T {}

/// Alignment score - any signed integer or float type.
pub trait Score:
    ::num::Signed
    + ::num::Bounded
    + ::num::NumCast
    + PartialOrd
    + Copy
    + Debug
    + Default
    + Send
    + Sync
{
    /// Score of an unreachable DP cell.
    ///
    /// Half of the type minimum: adding a single penalty to it must neither overflow integers nor
    /// produce a value that beats any reachable cell.
    #[inline(always)]
    fn lowest() -> Self {
        Self::min_value() / (Self::one() + Self::one())
    }

    /// The score repeated `n` times, computed as a single product rather than a running sum.
    ///
    /// Saturates at [`Score::lowest`] if `n` doesn't fit into the score type.
    #[inline(always)]
    fn times(self, n: usize) -> Self {
        match <Self as ::num::NumCast>::from(n) {
            Some(n) => n * self,
            None => Self::lowest(),
        }
    }

    /// Larger of two scores, `a` on ties.
    #[inline(always)]
    fn max2(a: Self, b: Self) -> Self {
        if a >= b {
            a
        } else {
            b
        }
    }
}

impl<T> Score for T where
    T: ::num::Signed
        + ::num::Bounded
        + ::num::NumCast
        + PartialOrd
        + Copy
        + Debug
        + Default
        + Send
        + Sync
{
}
