//! Helpers for nucleotide sequences that may contain the gap symbol.

use derive_more::{Display, Error};

/// Gap symbol used in aligned sequences.
pub const GAP: u8 = b'-';

/// A symbol that has no complement in the `{A, C, G, T, -}` alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
#[display("Tried to reverse complement a sequence with a non-ACGT- symbol '{symbol}' at position {position}")]
pub struct InvalidSymbol {
    pub symbol: char,
    pub position: usize,
}

#[inline(always)]
pub fn is_gap(symbol: u8) -> bool {
    symbol == GAP
}

/// Number of non-gap symbols in the sequence.
pub fn count_bases(seq: &[u8]) -> usize {
    seq.iter().filter(|x| !is_gap(**x)).count()
}

/// Copy of the sequence with all gaps removed.
pub fn ungapped(seq: &[u8]) -> Vec<u8> {
    seq.iter().copied().filter(|x| !is_gap(*x)).collect()
}

#[inline(always)]
fn complement(symbol: u8) -> Option<u8> {
    match symbol {
        b'A' => Some(b'T'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        b'T' => Some(b'A'),
        GAP => Some(GAP),
        _ => None,
    }
}

/// Reverse complement of an (optionally gapped) DNA sequence.
///
/// Only upper-case `A`, `C`, `G`, `T` and the gap symbol are accepted; any other symbol is reported
/// together with its position in the input.
pub fn reverse_complement(seq: &[u8]) -> Result<Vec<u8>, InvalidSymbol> {
    let mut result = Vec::with_capacity(seq.len());
    for (position, symbol) in seq.iter().enumerate().rev() {
        match complement(*symbol) {
            Some(x) => result.push(x),
            None => {
                return Err(InvalidSymbol {
                    symbol: *symbol as char,
                    position,
                })
            }
        }
    }
    Ok(result)
}
