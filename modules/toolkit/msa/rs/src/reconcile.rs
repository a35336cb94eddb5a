use eyre::Result;
use rayon::prelude::*;
use rayon::ThreadPool;

use pairstack_alignment_rs::pairwise::Alignment;
use pairstack_alignment_rs::Score;
use pairstack_core_rs::seq;

use crate::msa::REFERENCE_ID;
use crate::{Error, GapSizes, Msa, Row};

fn canonical<S: Score>(alignments: &[Alignment<S>]) -> Result<Vec<u8>, Error> {
    alignments
        .first()
        .map(|x| seq::ungapped(x.reference()))
        .ok_or(Error::EmptyInput)
}

fn regapped<S: Score>(gaps: &GapSizes, alignment: &Alignment<S>) -> Row<S> {
    Row::new(
        alignment.query_id().clone(),
        *alignment.score(),
        gaps.regap(alignment.reference(), alignment.query()),
    )
}

fn assemble<S: Score>(gaps: GapSizes, reference: &[u8], reads: Vec<Row<S>>) -> Msa<S> {
    let mut rows = Vec::with_capacity(reads.len() + 1);
    rows.push(Row::new(
        REFERENCE_ID.to_string(),
        S::zero(),
        gaps.regap_reference(reference),
    ));
    rows.extend(reads);

    log::debug!(
        "Reconciled {} alignment(s) over {} reference bases into {} columns",
        rows.len() - 1,
        gaps.bases(),
        gaps.width()
    );
    Msa::new(gaps, rows)
}

/// Expand pairwise alignments against the same reference into a common column layout.
///
/// The reference of the first alignment (gaps removed) is the canonical one. Every aligned
/// reference must have the same number of bases, otherwise [`Error::ReferenceMismatch`] is
/// returned. An empty input fails with [`Error::EmptyInput`].
pub fn reconcile<S: Score>(alignments: &[Alignment<S>]) -> Result<Msa<S>> {
    let reference = canonical(alignments)?;

    let mut gaps = GapSizes::new(reference.len());
    for (index, alignment) in alignments.iter().enumerate() {
        gaps.observe(index, alignment)?;
    }

    let reads = alignments.iter().map(|x| regapped(&gaps, x)).collect();
    Ok(assemble(gaps, &reference, reads))
}

/// Same as [`reconcile`], but both passes run in parallel on the given pool.
///
/// If several alignments have an inconsistent reference, any one of them may be reported.
pub fn reconcile_in<S: Score>(pool: &ThreadPool, alignments: &[Alignment<S>]) -> Result<Msa<S>> {
    let reference = canonical(alignments)?;
    let bases = reference.len();

    pool.install(|| {
        let gaps = alignments
            .par_iter()
            .enumerate()
            .try_fold(
                || GapSizes::new(bases),
                |mut gaps, (index, alignment)| {
                    gaps.observe(index, alignment)?;
                    Ok::<_, Error>(gaps)
                },
            )
            .try_reduce(|| GapSizes::new(bases), |left, right| Ok(left.merge(&right)))?;

        let reads = alignments
            .par_iter()
            .map(|x| regapped(&gaps, x))
            .collect();
        Ok(assemble(gaps, &reference, reads))
    })
}

/// Flat variant of [`reconcile`] that returns the rows only.
pub fn reconcile_alignments<S: Score>(alignments: &[Alignment<S>]) -> Result<Vec<Row<S>>> {
    reconcile(alignments).map(Msa::into_rows)
}
