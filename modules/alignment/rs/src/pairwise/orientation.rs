use eyre::{Result, WrapErr};

use pairstack_core_rs::loc::Orientation;
use pairstack_core_rs::seq;

use super::nw::Aligner;
use super::Alignment;

/// Align the read and its reverse complement against the reference and keep the better one.
///
/// The returned alignment carries the read identifier tagged with the selected orientation
/// (`/F` or `/R`). The forward orientation wins ties. Fails if the read contains symbols that
/// can't be reverse complemented.
pub fn best<A: Aligner>(
    aligner: &A,
    reference: &[u8],
    read_id: &str,
    read: &[u8],
) -> Result<Alignment<A::Score>> {
    let reversed = seq::reverse_complement(read)
        .wrap_err_with(|| format!("Failed to reverse complement read {read_id}"))?;

    let forward = aligner.align(reference, read);
    let reverse = aligner.align(reference, &reversed);
    log::trace!(
        "Read {read_id}: forward score {:?}, reverse score {:?}",
        forward.score(),
        reverse.score()
    );

    let (mut best, orientation) = if forward.score() >= reverse.score() {
        (forward, Orientation::Forward)
    } else {
        (reverse, Orientation::Reverse)
    };
    best.set_query_id(orientation.tag(read_id));
    Ok(best)
}
