use std::borrow::Borrow;
use std::fmt::Display;

use derive_getters::{Dissolve, Getters};
use eyre::Result;
use itertools::Itertools;

use pairstack_core_rs::num::PrimUInt;

use super::op::Op;

/// A run of identical operations in the alignment
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step<Len: PrimUInt> {
    /// The length of the run, e.g. the number of consecutive matches or gaps.
    /// Guaranteed to be greater than zero.
    len: Len,
    /// The alignment operation
    op: Op,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Result<Self> {
        if len.is_zero() {
            return Err(eyre::eyre!("Step length must be greater than zero"));
        }
        Ok(Self { len, op })
    }

    /// Run-length encode a sequence of operations.
    /// Runs longer than the maximum value of `Len` are split into several steps.
    pub fn encode(ops: impl IntoIterator<Item = Op>) -> Vec<Self> {
        let limit = Len::max_value().to_usize().unwrap_or(usize::MAX);

        let mut steps = Vec::new();
        for (mut total, op) in ops.into_iter().dedup_with_count() {
            while total > 0 {
                let chunk = total.min(limit);
                if let Some(len) = <Len as num::NumCast>::from(chunk) {
                    steps.push(Self { len, op });
                }
                total -= chunk;
            }
        }
        steps
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        // 2 digits is an average length of a step + 1 symbol for the operation
        let hint = match steps.size_hint() {
            (_, Some(upper)) => upper * 3,
            (lower, _) => lower * 3,
        };

        let mut result = String::with_capacity(hint);
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len().to_string());
            result.push(step.op().symbol());
        }
        result
    }
}
