use derive_more::Constructor;

use pairstack_core_rs::num::Float;

use super::matrix::Matrix;
use super::traceback::Columns;
use super::Aligner;
use crate::pairwise::scoring::{self, Scheme};
use crate::pairwise::Alignment;
use crate::Score;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    /// The alignment ends with a match or a mismatch
    Match,
    /// The alignment ends with a gap in either sequence
    Gap,
}

/// Ways to enter a cell of the gap layer.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum GapMove {
    /// Consume a target symbol against a new query gap, coming from the match layer.
    TargetOpen,
    /// Consume a target symbol against a query gap, continuing the gap layer.
    TargetExtend,
    /// Consume a query symbol against a new target gap, coming from the match layer.
    QueryOpen,
    /// Consume a query symbol against a target gap, continuing the gap layer.
    QueryExtend,
}

impl GapMove {
    /// Order in which moves are evaluated. On equal scores the earliest move wins, which fixes
    /// where gaps end up among equally scoring alignments.
    const PRIORITY: [GapMove; 4] = [
        GapMove::TargetOpen,
        GapMove::TargetExtend,
        GapMove::QueryOpen,
        GapMove::QueryExtend,
    ];

    fn source(&self) -> State {
        match self {
            GapMove::TargetOpen | GapMove::QueryOpen => State::Match,
            GapMove::TargetExtend | GapMove::QueryExtend => State::Gap,
        }
    }
}

/// Two-layer DP matrices: `m` for alignments ending in a substitution, `gap` for alignments
/// ending in a gap.
struct Layers<S> {
    m: Matrix<S>,
    gap: Matrix<S>,
}

/// Global alignment with affine gap costs (two-state model from Durbin et al.).
#[derive(Copy, Clone, PartialEq, Debug, Constructor)]
pub struct Affine<S: Score> {
    scoring: scoring::Affine<S>,
}

impl<S: Score> Affine<S> {
    pub fn scoring(&self) -> &scoring::Affine<S> {
        &self.scoring
    }

    // Scores of all gap moves into (row, col), listed in GapMove::PRIORITY order.
    // Moves that would leave the matrix score as unreachable.
    #[inline(always)]
    fn gap_moves(&self, layers: &Layers<S>, row: usize, col: usize) -> [S; 4] {
        let (open, extend) = (self.scoring.gap_open, self.scoring.gap_extend);
        let mut scores = [S::lowest(); 4];
        if col > 0 {
            scores[0] = layers.m[(row, col - 1)] + open;
            scores[1] = layers.gap[(row, col - 1)] + extend;
        }
        if row > 0 {
            scores[2] = layers.m[(row - 1, col)] + open;
            scores[3] = layers.gap[(row - 1, col)] + extend;
        }
        scores
    }

    fn fill(&self, target: &[u8], query: &[u8]) -> Layers<S> {
        let (rows, cols) = (query.len() + 1, target.len() + 1);
        let mut layers = Layers {
            m: Matrix::filled(rows, cols, S::lowest()),
            gap: Matrix::filled(rows, cols, S::lowest()),
        };

        // A leading gap of length k costs one opening and k - 1 extensions
        let (open, extend) = (self.scoring.gap_open, self.scoring.gap_extend);
        layers.m[(0, 0)] = S::zero();
        for row in 1..rows {
            layers.gap[(row, 0)] = open + extend.times(row - 1);
        }
        for col in 1..cols {
            layers.gap[(0, col)] = open + extend.times(col - 1);
        }

        for row in 1..rows {
            for col in 1..cols {
                let substitution = self.scoring.substitution(target[col - 1], query[row - 1]);
                layers.m[(row, col)] = S::max2(
                    layers.m[(row - 1, col - 1)],
                    layers.gap[(row - 1, col - 1)],
                ) + substitution;

                let [a, b, c, d] = self.gap_moves(&layers, row, col);
                layers.gap[(row, col)] = S::max2(S::max2(a, b), S::max2(c, d));
            }
        }
        layers
    }

    // The first move with the highest score, following GapMove::PRIORITY.
    fn best_gap_move(&self, layers: &Layers<S>, row: usize, col: usize) -> GapMove {
        let scores = self.gap_moves(layers, row, col);
        let mut best = 0;
        for ind in 1..scores.len() {
            if scores[ind] > scores[best] {
                best = ind;
            }
        }
        GapMove::PRIORITY[best]
    }
}

impl<S: Score + Float> Default for Affine<S> {
    fn default() -> Self {
        Self::new(scoring::Affine::default())
    }
}

impl<S: Score> Aligner for Affine<S> {
    type Score = S;

    fn align(&self, target: &[u8], query: &[u8]) -> Alignment<S> {
        let layers = self.fill(target, query);

        let (mut row, mut col) = (query.len(), target.len());
        let (score, mut state) = if layers.m[(row, col)] >= layers.gap[(row, col)] {
            (layers.m[(row, col)], State::Match)
        } else {
            (layers.gap[(row, col)], State::Gap)
        };

        let mut columns = Columns::with_capacity(query.len() + target.len());
        while row > 0 || col > 0 {
            match state {
                State::Match => {
                    // Match cells on the first row/column are unreachable
                    debug_assert!(row > 0 && col > 0);
                    row -= 1;
                    col -= 1;
                    columns.diagonal(target[col], query[row]);
                    state = if layers.m[(row, col)] >= layers.gap[(row, col)] {
                        State::Match
                    } else {
                        State::Gap
                    };
                }
                State::Gap => {
                    let step = self.best_gap_move(&layers, row, col);
                    match step {
                        GapMove::TargetOpen | GapMove::TargetExtend => {
                            col -= 1;
                            columns.deletion(target[col]);
                        }
                        GapMove::QueryOpen | GapMove::QueryExtend => {
                            row -= 1;
                            columns.insertion(query[row]);
                        }
                    }
                    state = step.source();
                }
            }
        }
        columns.finish(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn align(target: &[u8], query: &[u8]) -> Alignment<f64> {
        Affine::default().align(target, query)
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(GapMove::PRIORITY[0].source(), State::Match);
        assert_eq!(GapMove::PRIORITY[1].source(), State::Gap);
        assert_eq!(GapMove::PRIORITY[2].source(), State::Match);
        assert_eq!(GapMove::PRIORITY[3].source(), State::Gap);
    }

    #[test]
    fn test_boundaries() {
        let layers = Affine::<f64>::default().fill(b"ACGT", b"AC");
        assert_eq!(layers.m[(0, 0)], 0.0);
        assert_eq!(layers.gap[(0, 1)], -1.0);
        assert_eq!(layers.gap[(0, 4)], -2.5);
        assert_eq!(layers.gap[(2, 0)], -1.5);
        assert!(layers.m[(0, 2)] < -1e300);
        assert!(layers.gap[(0, 0)] < -1e300);
    }

    #[test]
    fn test_empty() {
        let aln = align(b"", b"");
        assert!(aln.is_empty());
        assert_eq!(*aln.score(), 0.0);

        let aln = align(b"ACGT", b"");
        assert_eq!(aln.query(), b"----");
        assert_eq!(aln.reference(), b"ACGT");
        assert_eq!(*aln.score(), -2.5);

        let aln = align(b"", b"AC");
        assert_eq!(aln.query(), b"AC");
        assert_eq!(aln.reference(), b"--");
        assert_eq!(*aln.score(), -1.5);
    }

    #[test]
    fn test_mismatches_only() {
        let aln = align(b"GATTACA", b"GCATGCU");
        assert_eq!(*aln.score(), -4.0);
        assert_eq!(aln.query(), b"GCATGCU");
        assert_eq!(aln.reference(), b"GATTACA");
    }

    #[test]
    fn test_gap_placement() {
        let aln = align(b"ACGTACGT", b"ACGTTTACGT");
        assert_eq!(*aln.score(), -1.5);
        assert_eq!(aln.query(), b"ACGTTTACGT");
        assert_eq!(aln.reference(), b"ACG--TACGT");

        let aln = align(b"ACGTTTTACGT", b"ACGTACGT");
        assert_eq!(*aln.score(), -2.0);
        assert_eq!(aln.query(), b"ACG---TACGT");
        assert_eq!(aln.reference(), b"ACGTTTTACGT");
    }

    #[test]
    fn test_non_dyadic_scores() {
        let aligner = Affine::new(scoring::Affine::new(0.3, -0.7, -0.9, -0.1, 0.0));

        let layers = aligner.fill(b"CTCAGCATGTAAG", b"");
        for col in 1..=13 {
            assert_eq!(layers.gap[(0, col)], -0.9 + (col - 1) as f64 * -0.1);
        }
        assert_eq!(*aligner.align(b"CTCAGCATGTAAG", b"").score(), -2.1);

        // Boundary values decide between equally scoring gap placements
        let aln = aligner.align(b"GTTCATT", b"C");
        assert_eq!(*aln.score(), -1.6);
        assert_eq!(aln.query(), b"------C-");
        assert_eq!(aln.reference(), b"GTTCAT-T");
    }

    #[test]
    fn test_integer_scores() {
        let aligner = Affine::new(scoring::Affine::new(2, -3, -5, -1, 0));
        let aln = aligner.align(b"AAAACCCCGGGG", b"AAAAGGGG");
        assert_eq!(*aln.score(), 16 - 5 - 3);
        assert_eq!(aln.rle(), "4=4D4=");
    }
}
