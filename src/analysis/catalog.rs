//! Catalog of the global labels and programs in program space.

use crate::analysis::Result;
use crate::arch::hp41::{Instruction, Label};
use crate::memory::walker;
use crate::memory::MemoryImage;
use serde::Serialize;

/// One line of the program catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum CatalogEntry {
    /// A global label.
    Label(Label),

    /// The end of a program, with the program's size in bytes.
    Size(usize),
}

/// The labels and programs found in program space.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub labels: usize,
    pub programs: usize,

    /// Labels and program sizes in the order they occur in memory.
    ///
    /// Each `Size` closes the program made up of the labels before it.
    pub entries: Vec<CatalogEntry>,
}

/// Index the programs in program space.
///
/// Program space is decoded from the top register down to the program limit.
/// Every `END` closes a program, whose size counts every byte since the end of
/// the previous program (or the top of program space), its own end included.
/// The final `.END.` stops the scan and is not counted as a program.
pub fn index(image: &MemoryImage) -> Result<Catalog> {
    let status = image.status();
    let stop = walker::register_start(status.program_limit);
    let mut loc = walker::register_start(status.program_top);
    let mut catalog = Catalog::default();
    let mut size = 0;

    while loc >= stop {
        let decoded = Instruction::decode(image, loc)?;
        size += decoded.len();

        match decoded.instruction {
            Instruction::Label(label) => {
                tracing::debug!("Found label \"{}\" at {}", label.name, decoded.location);

                catalog.labels += 1;
                catalog.entries.push(CatalogEntry::Label(label));
            }
            Instruction::End => {
                tracing::debug!("Found program end at {}, {} bytes", decoded.location, size);

                catalog.programs += 1;
                catalog.entries.push(CatalogEntry::Size(size));
                size = 0;
            }
            Instruction::FinalEnd => break,
            _ => {}
        }

        loc = decoded.next;
    }

    Ok(catalog)
}
