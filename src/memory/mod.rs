//! The calculator's memory model.
//!
//! Memory is addressed in registers of seven bytes each. Register `r` owns
//! bytes `7r` through `7r + 6`, and byte 0 of a register is its most
//! significant byte. Program code runs from high registers to low ones; see
//! the `walker` module for the exact order.

mod image;
pub mod walker;

pub use image::{CpuRegisters, MemoryImage, StatusFields};
pub use walker::Location;

/// Size of a single register, in bytes.
pub const REGISTER_SIZE: usize = 7;

/// Number of registers in a full HP-41CX memory image.
pub const REGISTER_COUNT: usize = 1112;

/// Size of a full memory image, in bytes.
pub const IMAGE_SIZE: usize = REGISTER_SIZE * REGISTER_COUNT;

/// The status register holding the watchdog and program space pointers.
pub const STATUS_REGISTER: usize = 13;

/// The cold start constant a healthy status register carries.
pub const WATCHDOG: u16 = 0x169;

/// First register of the partition area (key assignments, alarms, buffers).
pub const PARTITION_BASE: usize = 192;

#[cfg(test)]
mod tests;
