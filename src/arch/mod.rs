//! Processor architectures that calcmem can decode.
//!
//! Only the HP-41 user code instruction set is implemented. Each architecture
//! provides an instruction type that decodes itself from a memory image at a
//! given location, yielding the decoded instruction, its raw bytes, and the
//! location of the instruction that follows it.

pub mod hp41;
