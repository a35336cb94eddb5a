use derive_more::Constructor;

use super::matrix::Matrix;
use super::traceback::Columns;
use super::Aligner;
use crate::pairwise::scoring::{self, Scheme};
use crate::pairwise::Alignment;
use crate::Score;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Move {
    Diagonal,
    Insertion,
    Deletion,
}

/// Global alignment with a linear gap cost and a single DP matrix.
#[derive(Copy, Clone, PartialEq, Debug, Default, Constructor)]
pub struct Simple<S: Score> {
    scoring: scoring::Linear<S>,
}

impl<S: Score> Simple<S> {
    pub fn scoring(&self) -> &scoring::Linear<S> {
        &self.scoring
    }

    // Candidate scores for the cell (row, col) in the order [diagonal, insertion, deletion]
    #[inline(always)]
    fn candidates(
        &self,
        matrix: &Matrix<S>,
        target: &[u8],
        query: &[u8],
        row: usize,
        col: usize,
    ) -> [S; 3] {
        let substitution = self.scoring.substitution(target[col - 1], query[row - 1]);
        [
            matrix[(row - 1, col - 1)] + substitution,
            matrix[(row - 1, col)] + self.scoring.insertion,
            matrix[(row, col - 1)] + self.scoring.deletion,
        ]
    }

    fn fill(&self, target: &[u8], query: &[u8]) -> Matrix<S> {
        let (rows, cols) = (query.len() + 1, target.len() + 1);
        let mut matrix = Matrix::filled(rows, cols, S::zero());

        for row in 1..rows {
            matrix[(row, 0)] = self.scoring.insertion.times(row);
        }
        for col in 1..cols {
            matrix[(0, col)] = self.scoring.deletion.times(col);
        }

        for row in 1..rows {
            for col in 1..cols {
                let [diagonal, insertion, deletion] =
                    self.candidates(&matrix, target, query, row, col);
                matrix[(row, col)] = S::max2(S::max2(diagonal, insertion), deletion);
            }
        }
        matrix
    }

    // Ties are resolved as diagonal > insertion > deletion.
    #[inline(always)]
    fn choose(
        &self,
        matrix: &Matrix<S>,
        target: &[u8],
        query: &[u8],
        row: usize,
        col: usize,
    ) -> Move {
        if row == 0 {
            return Move::Deletion;
        }
        if col == 0 {
            return Move::Insertion;
        }

        let [diagonal, insertion, deletion] = self.candidates(matrix, target, query, row, col);
        if diagonal >= insertion && diagonal >= deletion {
            Move::Diagonal
        } else if insertion >= deletion {
            Move::Insertion
        } else {
            Move::Deletion
        }
    }
}

impl<S: Score> Aligner for Simple<S> {
    type Score = S;

    fn align(&self, target: &[u8], query: &[u8]) -> Alignment<S> {
        let matrix = self.fill(target, query);
        let score = matrix[(query.len(), target.len())];

        let mut columns = Columns::with_capacity(query.len() + target.len());
        let (mut row, mut col) = (query.len(), target.len());
        while row > 0 || col > 0 {
            match self.choose(&matrix, target, query, row, col) {
                Move::Diagonal => {
                    row -= 1;
                    col -= 1;
                    columns.diagonal(target[col], query[row]);
                }
                Move::Insertion => {
                    row -= 1;
                    columns.insertion(query[row]);
                }
                Move::Deletion => {
                    col -= 1;
                    columns.deletion(target[col]);
                }
            }
        }
        columns.finish(score)
    }
}
