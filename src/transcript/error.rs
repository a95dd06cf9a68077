//! Error type for transcriptions

use std::{io, result};
use thiserror::Error;

/// Error type for reading transcriptions.
///
/// Line numbers count from 1 and include blank lines.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not read transcription: {0}")]
    Io(#[from] io::Error),

    /// The transcription ended before naming the calculator model.
    #[error("Transcription is empty, expected a model identifier")]
    MissingHeader,

    /// The transcription is for a different calculator.
    #[error("Expected a {expected} transcription, found {found:?}")]
    WrongModel { expected: String, found: String },

    /// A register value had the wrong number of digits, or non-hex digits.
    #[error("Malformed register value on line {line}")]
    MalformedRegister { line: usize },

    /// A line was neither a CPU register line nor a memory line.
    #[error("Unrecognized line {line}: {text:?}")]
    UnrecognizedLine { line: usize, text: String },

    /// A memory line addressed registers past the end of memory.
    #[error("Register {register:03X} on line {line} is outside of memory")]
    RegisterOutOfRange { line: usize, register: usize },
}

impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        match err {
            Error::Io(err) => err,
            err => io::Error::new(io::ErrorKind::InvalidData, err),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
