//! Error type for analysis

use crate::memory::Location;
use std::{io, result};
use thiserror::Error;

/// Error type for analysis.
///
/// Only conditions that leave the image in a state we cannot reason about are
/// errors. Undecodable bytes, unknown extension calls and missing programs are
/// reported as data instead.
#[derive(Error, Debug)]
pub enum Error {
    /// A walk through program memory went below the first register.
    #[error("Walked below the bottom of memory from location {0}")]
    WalkUnderflow(Location),

    /// A read or write landed outside of the memory image.
    #[error("Location {0} is outside of the memory image")]
    OutOfBounds(Location),

    /// Bytes to inject were not a valid hex string.
    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    /// There is not enough free program space to hold the injected code.
    #[error("Insufficient free space: {required} registers required, {free} available")]
    InsufficientSpace { required: usize, free: usize },
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

pub type Result<T> = result::Result<T, Error>;
