//! Program listings.

use crate::analysis::Result;
use crate::arch::hp41::{Decoded, Instruction, Label};
use crate::memory::walker::{self, Location};
use crate::memory::MemoryImage;
use serde::Serialize;

/// One line of a program listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Line number, starting from 1.
    pub sequence: usize,
    pub mnemonic: String,
    pub hex: String,
}

impl Row {
    fn new(sequence: usize, decoded: &Decoded) -> Self {
        Row {
            sequence,
            mnemonic: decoded.instruction.to_string(),
            hex: decoded.hex(),
        }
    }
}

/// A disassembled program.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Program {
    /// The label the program was looked up by.
    pub label: Label,

    /// The first byte after the label.
    pub start: Location,

    /// Every instruction from `start` up to and including the end.
    pub rows: Vec<Row>,

    /// The raw bytes of every row, concatenated.
    pub hex: String,
}

impl Program {
    /// The size of the listed code, in bytes.
    pub fn size(&self) -> usize {
        self.hex.len() / 2
    }
}

/// Decode program space from the top, handing each instruction to `visit`
/// until it returns `false` or program space runs out.
fn walk_program_space<F>(image: &MemoryImage, mut visit: F) -> Result<()>
where
    F: FnMut(&Decoded) -> bool,
{
    let status = image.status();
    let stop = walker::register_start(status.program_limit);
    let mut loc = walker::register_start(status.program_top);

    while loc >= stop {
        let decoded = Instruction::decode(image, loc)?;
        if !visit(&decoded) {
            break;
        }

        loc = decoded.next;
    }

    Ok(())
}

/// Find a global label by name, returning it and the location after it.
pub fn find_label(image: &MemoryImage, name: &str) -> Result<Option<(Label, Location)>> {
    let mut found = None;

    walk_program_space(image, |decoded| match &decoded.instruction {
        Instruction::Label(label) if label.name == name => {
            found = Some((label.clone(), decoded.next));
            false
        }
        Instruction::FinalEnd => false,
        _ => true,
    })?;

    Ok(found)
}

/// Disassemble the program containing the global label `name`.
///
/// Listing starts right after the label and runs until the end of the
/// program. Returns `None` if no such label exists.
pub fn disassemble(image: &MemoryImage, name: &str) -> Result<Option<Program>> {
    let (label, start) = match find_label(image, name)? {
        Some(found) => found,
        None => return Ok(None),
    };

    let stop = walker::register_start(image.status().program_limit);
    let mut rows = Vec::new();
    let mut hex = String::new();
    let mut loc = start;

    loop {
        if loc < stop {
            tracing::warn!("Program \"{}\" runs past the end of program space", name);
            break;
        }

        let decoded = Instruction::decode(image, loc)?;
        rows.push(Row::new(rows.len() + 1, &decoded));
        hex.push_str(&decoded.hex());

        if decoded.instruction.is_end() {
            break;
        }

        loc = decoded.next;
    }

    Ok(Some(Program {
        label,
        start,
        rows,
        hex,
    }))
}

/// List every instruction in program space, down to the final `.END.`.
pub fn disassemble_all(image: &MemoryImage) -> Result<Vec<Row>> {
    let mut rows = Vec::new();

    walk_program_space(image, |decoded| {
        rows.push(Row::new(rows.len() + 1, decoded));
        decoded.instruction != Instruction::FinalEnd
    })?;

    Ok(rows)
}
