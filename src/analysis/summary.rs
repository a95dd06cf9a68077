//! Memory usage summary.

use crate::analysis::{alarm, catalog, program_bottom, Result};
use crate::memory::{MemoryImage, StatusFields, PARTITION_BASE};
use serde::Serialize;

/// Counts and register accounting for a whole image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub status: StatusFields,
    pub well_formed: bool,
    pub labels: usize,
    pub programs: usize,
    pub alarms: usize,

    /// Registers between the program limit and the top of program space.
    pub program_registers: usize,

    /// The lowest register programs may grow into. This is the register
    /// above the partition terminator, which itself is never free.
    pub program_bottom: usize,

    /// Registers between the bottom of free space and the program limit.
    pub free_registers: usize,

    /// Registers taken by key assignments, alarms and buffers.
    pub partition_registers: usize,
}

pub fn summarize(image: &MemoryImage) -> Result<Summary> {
    let status = image.status();
    let catalog = catalog::index(image)?;
    let bottom = program_bottom(image);

    Ok(Summary {
        status,
        well_formed: status.is_well_formed(),
        labels: catalog.labels,
        programs: catalog.programs,
        alarms: alarm::index(image, 0).len(),
        program_registers: status.program_top.saturating_sub(status.program_limit),
        program_bottom: bottom,
        free_registers: status.program_limit.saturating_sub(bottom),
        partition_registers: bottom.saturating_sub(PARTITION_BASE),
    })
}
