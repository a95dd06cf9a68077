//! The contents of a calculator's memory, as loaded from a transcription.

use crate::analysis::{Error, Result};
use crate::memory::walker::{self, Location};
use crate::memory::{IMAGE_SIZE, REGISTER_COUNT, REGISTER_SIZE, STATUS_REGISTER, WATCHDOG};
use serde::Serialize;
use std::fmt;

/// The CPU registers saved alongside a memory image.
///
/// None of these are interpreted; they are carried so that a transcription
/// can be written back out unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CpuRegisters {
    pub a: [u8; REGISTER_SIZE],
    pub b: [u8; REGISTER_SIZE],
    pub c: [u8; REGISTER_SIZE],
    pub m: [u8; REGISTER_SIZE],
    pub n: [u8; REGISTER_SIZE],

    /// The flag register. Usually one byte, but transcriptions may carry up
    /// to seven.
    pub g: Vec<u8>,
}

impl Default for CpuRegisters {
    fn default() -> Self {
        CpuRegisters {
            a: [0; REGISTER_SIZE],
            b: [0; REGISTER_SIZE],
            c: [0; REGISTER_SIZE],
            m: [0; REGISTER_SIZE],
            n: [0; REGISTER_SIZE],
            g: vec![0],
        }
    }
}

/// Fields decoded from the status register.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusFields {
    /// Cold start constant. Should always be `0x169`.
    pub watchdog: u16,

    /// The highest register of program space.
    pub program_top: usize,

    /// The register holding the final `.END.`, which is the lowest register
    /// of program space.
    pub program_limit: usize,
}

impl StatusFields {
    pub fn is_well_formed(&self) -> bool {
        self.watchdog == WATCHDOG
    }
}

/// A full memory image.
#[derive(Clone, PartialEq, Eq)]
pub struct MemoryImage {
    bytes: Vec<u8>,
    cpu: CpuRegisters,
}

impl Default for MemoryImage {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryImage")
            .field("status", &self.status())
            .field("cpu", &self.cpu)
            .finish()
    }
}

impl MemoryImage {
    /// Construct a zeroed memory image.
    pub fn new() -> Self {
        MemoryImage {
            bytes: vec![0; IMAGE_SIZE],
            cpu: CpuRegisters::default(),
        }
    }

    /// Construct a memory image from raw bytes.
    ///
    /// Returns `None` if `bytes` is not exactly one image long.
    #[cfg(test)]
    pub fn from_bytes(bytes: Vec<u8>, cpu: CpuRegisters) -> Option<Self> {
        if bytes.len() != IMAGE_SIZE {
            return None;
        }

        Some(MemoryImage { bytes, cpu })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn cpu(&self) -> &CpuRegisters {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut CpuRegisters {
        &mut self.cpu
    }

    /// Read the byte at `loc`.
    pub fn byte(&self, loc: Location) -> Result<u8> {
        self.bytes.get(loc).copied().ok_or(Error::OutOfBounds(loc))
    }

    /// Overwrite the byte at `loc`.
    pub fn set_byte(&mut self, loc: Location, value: u8) -> Result<()> {
        let slot = self.bytes.get_mut(loc).ok_or(Error::OutOfBounds(loc))?;
        *slot = value;

        Ok(())
    }

    /// The seven bytes of register `reg`, if it exists.
    pub fn register(&self, reg: usize) -> Option<&[u8]> {
        if reg >= REGISTER_COUNT {
            return None;
        }

        let start = walker::register_start(reg);
        Some(&self.bytes[start..start + REGISTER_SIZE])
    }

    /// Overwrite register `reg`.
    pub fn set_register(&mut self, reg: usize, value: [u8; REGISTER_SIZE]) -> Result<()> {
        if reg >= REGISTER_COUNT {
            return Err(Error::OutOfBounds(walker::register_start(reg)));
        }

        let start = walker::register_start(reg);
        self.bytes[start..start + REGISTER_SIZE].copy_from_slice(&value);

        Ok(())
    }

    /// The first byte of register `reg`, which is where partition and marker
    /// identifiers live.
    pub fn register_head(&self, reg: usize) -> Option<u8> {
        self.register(reg).map(|r| r[0])
    }

    /// Read `count` bytes in program order, starting at `loc`.
    ///
    /// Returns the bytes read and the location of the byte after them.
    pub fn read_run(&self, mut loc: Location, count: usize) -> Result<(Vec<u8>, Location)> {
        let mut run = Vec::with_capacity(count);

        for _ in 0..count {
            run.push(self.byte(loc)?);
            loc = walker::next(loc)?;
        }

        Ok((run, loc))
    }

    /// Decode the status register.
    pub fn status(&self) -> StatusFields {
        let base = walker::register_start(STATUS_REGISTER);
        let b = &self.bytes[base..base + REGISTER_SIZE];

        StatusFields {
            watchdog: ((b[0] as u16 & 0x0F) << 8) | b[1] as u16,
            program_top: ((b[4] as usize) << 4) | (b[5] as usize >> 4),
            program_limit: ((b[5] as usize & 0x0F) << 8) | b[6] as usize,
        }
    }

    /// Repack the program limit into the status register.
    ///
    /// Only the low nibble of byte 96 and byte 97 change; the top of program
    /// space shares byte 96 and is left alone.
    pub fn set_program_limit(&mut self, limit: usize) {
        let base = walker::register_start(STATUS_REGISTER);

        self.bytes[base + 5] = (self.bytes[base + 5] & 0xF0) | ((limit >> 8) & 0x0F) as u8;
        self.bytes[base + 6] = (limit & 0xFF) as u8;
    }

    /// Repack the top of program space into the status register.
    #[cfg(test)]
    pub fn set_program_top(&mut self, top: usize) {
        let base = walker::register_start(STATUS_REGISTER);

        self.bytes[base + 4] = ((top >> 4) & 0xFF) as u8;
        self.bytes[base + 5] = (self.bytes[base + 5] & 0x0F) | ((top & 0x0F) << 4) as u8;
    }

    /// Write the cold start constant into the status register.
    #[cfg(test)]
    pub fn set_watchdog(&mut self, watchdog: u16) {
        let base = walker::register_start(STATUS_REGISTER);

        self.bytes[base] = (self.bytes[base] & 0xF0) | ((watchdog >> 8) & 0x0F) as u8;
        self.bytes[base + 1] = (watchdog & 0xFF) as u8;
    }

    /// Build an image with a healthy status register and the given program
    /// space bounds.
    #[cfg(test)]
    pub fn test_image(top: usize, limit: usize) -> Self {
        let mut image = Self::new();
        image.set_watchdog(WATCHDOG);
        image.set_program_top(top);
        image.set_program_limit(limit);

        image
    }

    /// Write `bytes` in program order starting at `loc`, returning the
    /// location after the last byte written.
    #[cfg(test)]
    pub fn poke(&mut self, mut loc: Location, bytes: &[u8]) -> Location {
        for b in bytes {
            self.set_byte(loc, *b).unwrap();
            loc = walker::next(loc).unwrap();
        }

        loc
    }
}
