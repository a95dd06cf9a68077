//! Appending code to program space.

use crate::analysis::{free_registers, program_bottom, Error, Result};
use crate::input;
use crate::memory::walker;
use crate::memory::{MemoryImage, REGISTER_SIZE};
use serde::Serialize;

/// The canonical `.END.` marker.
pub const FINAL_END: [u8; 3] = [0xC4, 0x01, 0x29];

/// What an injection did to program space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Injection {
    /// Number of bytes injected.
    pub bytes: usize,

    /// Number of registers the injected bytes occupy.
    pub registers: usize,
    pub old_limit: usize,
    pub new_limit: usize,
    pub program_bottom: usize,
    pub free_before: usize,
    pub free_after: usize,
}

/// Parse the hex string of code to inject. Whitespace is ignored.
pub fn parse_code(hex: &str) -> Result<Vec<u8>> {
    let digits: String = hex.chars().filter(|c| !c.is_whitespace()).collect();

    input::parse_hex_bytes(&digits).ok_or_else(|| Error::InvalidHex(hex.to_string()))
}

/// Append `code` to the end of program space.
///
/// The code overwrites the current `.END.` and continues downward in program
/// order. A fresh `.END.` is written at the start of the register following
/// the code, and the program limit in the status register is moved to it.
/// Any bytes between the end of the code and the next register boundary are
/// cleared.
pub fn inject_bytes(image: &mut MemoryImage, code: &[u8]) -> Result<Injection> {
    let old_limit = image.status().program_limit;
    let bottom = program_bottom(image);
    let free_before = old_limit.saturating_sub(bottom);
    let registers = (code.len() + REGISTER_SIZE - 1) / REGISTER_SIZE;

    if registers > free_before {
        return Err(Error::InsufficientSpace {
            required: registers,
            free: free_before,
        });
    }

    let mut loc = walker::register_start(old_limit);
    for b in code {
        image.set_byte(loc, *b)?;
        loc = walker::next(loc)?;
    }

    while walker::offset(loc) != 0 {
        image.set_byte(loc, 0)?;
        loc = walker::next(loc)?;
    }

    let new_limit = old_limit - registers;
    debug_assert_eq!(walker::register_of(loc), new_limit);

    let mut end = [0; REGISTER_SIZE];
    end[..FINAL_END.len()].copy_from_slice(&FINAL_END);
    image.set_register(new_limit, end)?;
    image.set_program_limit(new_limit);

    let free_after = free_registers(image);
    tracing::info!(
        "Injected {} bytes into {} registers, program limit {} -> {}, {} registers free",
        code.len(),
        registers,
        old_limit,
        new_limit,
        free_after
    );

    Ok(Injection {
        bytes: code.len(),
        registers,
        old_limit,
        new_limit,
        program_bottom: bottom,
        free_before,
        free_after,
    })
}

/// Parse `hex` and append it to the end of program space.
pub fn inject(image: &mut MemoryImage, hex: &str) -> Result<Injection> {
    let code = parse_code(hex)?;

    inject_bytes(image, &code)
}
