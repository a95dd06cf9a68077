//! The HP-41 user code (FOCAL) instruction set.

pub mod glyph;
mod instr;
mod operand;
pub mod xrom;

pub use instr::{Decoded, Instruction, Label};
pub use operand::{Operand, Target};
