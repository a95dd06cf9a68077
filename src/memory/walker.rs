//! Program-order traversal of memory.
//!
//! Every scan over program memory uses the same order: the bytes of a register
//! are consumed from offset 0 to offset 6, after which the walk continues at
//! offset 0 of the numerically preceding register. Instructions, labels and
//! injected code all straddle register boundaries in this order.

use crate::analysis::{Error, Result};
use crate::memory::REGISTER_SIZE;

/// A byte address into a memory image.
pub type Location = usize;

/// The offset of `loc` within its register.
pub fn offset(loc: Location) -> usize {
    loc % REGISTER_SIZE
}

/// The register that contains `loc`.
pub fn register_of(loc: Location) -> usize {
    loc / REGISTER_SIZE
}

/// The location of byte 0 of register `reg`.
pub fn register_start(reg: usize) -> Location {
    reg * REGISTER_SIZE
}

/// Compute the location of the byte that follows `loc` in program order.
///
/// Walking past the bottom of memory yields `Error::WalkUnderflow`.
pub fn next(loc: Location) -> Result<Location> {
    if offset(loc) == REGISTER_SIZE - 1 {
        loc.checked_sub(2 * REGISTER_SIZE - 1)
            .ok_or(Error::WalkUnderflow(loc))
    } else {
        Ok(loc + 1)
    }
}

/// Apply `next` to `loc` `count` times.
#[cfg(test)]
pub fn advance(mut loc: Location, count: usize) -> Result<Location> {
    for _ in 0..count {
        loc = next(loc)?;
    }

    Ok(loc)
}
