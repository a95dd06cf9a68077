//! Tools for analysis of calculator memory

pub mod alarm;
pub mod catalog;
mod error;
pub mod inject;
pub mod listing;
pub mod summary;

pub use catalog::CatalogEntry;
pub use error::Error;
pub use error::Result;
pub use inject::Injection;
pub use listing::Row;

use crate::memory::{MemoryImage, PARTITION_BASE};

/// Find the lowest register available to programs.
///
/// Scanning down from just below the program limit, the first register whose
/// first byte is `0xF0` terminates the partition area; the register above it
/// is the bottom of free space. The terminator itself is not counted as free,
/// so an injection that fills every free register still leaves it intact.
/// Without such a register the whole area above the partition base is free.
pub fn program_bottom(image: &MemoryImage) -> usize {
    let limit = image.status().program_limit;

    (PARTITION_BASE..limit)
        .rev()
        .find(|reg| image.register_head(*reg) == Some(0xF0))
        .map_or(PARTITION_BASE, |reg| reg + 1)
}

/// Count the registers between the bottom of free space and the program
/// limit.
pub fn free_registers(image: &MemoryImage) -> usize {
    image
        .status()
        .program_limit
        .saturating_sub(program_bottom(image))
}

#[cfg(test)]
mod tests;
