//! Line-oriented transcriptions of calculator memory.
//!
//! A transcription starts with the model identifier, followed by the CPU
//! registers and then the contents of memory, four registers per line:
//!
//! ```text
//! HP-41CX
//! A: 00000000000000 B: 00000000000000 C: 00000000000000
//! M: 00000000000000 N: 00000000000000 G: 00
//! 000  00000000000000  00000000000000  00000000000000  00000000000000
//! ```
//!
//! Blank lines are ignored. Registers that never appear are zero.

mod error;
mod reader;
mod writer;

pub use error::{Error, Result};
pub use reader::load;
pub use writer::{save, write};

/// The model identifier of the calculators we understand.
pub const MODEL_ID: &str = "HP-41CX";

/// Number of registers listed on each memory line.
pub const REGISTERS_PER_LINE: usize = 4;
