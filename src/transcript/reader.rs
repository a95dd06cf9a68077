//! Transcription parsing

use crate::input;
use crate::memory::{CpuRegisters, MemoryImage, REGISTER_COUNT, REGISTER_SIZE};
use crate::transcript::{Error, Result, REGISTERS_PER_LINE};
use std::io::BufRead;
use std::path::Path;
use std::{fs, io};

/// Parse a `NAME:` `VALUE` pair from a CPU register line into `cpu`.
fn parse_cpu_field(cpu: &mut CpuRegisters, name: &str, value: &str, line: usize) -> Result<()> {
    let malformed = || Error::MalformedRegister { line };

    let slot = match name {
        "A:" => &mut cpu.a,
        "B:" => &mut cpu.b,
        "C:" => &mut cpu.c,
        "M:" => &mut cpu.m,
        "N:" => &mut cpu.n,
        "G:" => {
            let g = input::parse_hex_bytes(value).ok_or_else(malformed)?;
            if g.is_empty() || g.len() > REGISTER_SIZE {
                return Err(malformed());
            }

            cpu.g = g;
            return Ok(());
        }
        _ => {
            return Err(Error::UnrecognizedLine {
                line,
                text: name.to_string(),
            })
        }
    };

    *slot = input::parse_register(value).ok_or_else(malformed)?;

    Ok(())
}

/// Parse a line of `NAME: VALUE` pairs.
fn parse_cpu_line(cpu: &mut CpuRegisters, text: &str, line: usize) -> Result<()> {
    let mut fields = text.split_whitespace();

    while let Some(name) = fields.next() {
        let value = fields.next().ok_or(Error::MalformedRegister { line })?;
        parse_cpu_field(cpu, name, value, line)?;
    }

    Ok(())
}

/// Parse a memory line into `image`.
fn parse_memory_line(image: &mut MemoryImage, text: &str, line: usize) -> Result<()> {
    let mut fields = text.split_whitespace();
    let index = fields.next().unwrap_or_default();
    let start = usize::from_str_radix(index, 16).map_err(|_| Error::UnrecognizedLine {
        line,
        text: text.to_string(),
    })?;

    let values: Vec<&str> = fields.collect();
    if values.is_empty() || values.len() > REGISTERS_PER_LINE {
        return Err(Error::MalformedRegister { line });
    }

    for (i, value) in values.into_iter().enumerate() {
        let register = start + i;
        if register >= REGISTER_COUNT {
            return Err(Error::RegisterOutOfRange { line, register });
        }

        let bytes = input::parse_register(value).ok_or(Error::MalformedRegister { line })?;
        image
            .set_register(register, bytes)
            .map_err(|_| Error::RegisterOutOfRange { line, register })?;
    }

    Ok(())
}

fn is_memory_line(text: &str) -> bool {
    match text.split_whitespace().next() {
        Some(index) => {
            (1..=3).contains(&index.len()) && index.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Read a transcription for the calculator model `model`.
///
/// A status register without the cold start constant is reported, but still
/// loaded.
pub fn read<R: BufRead>(reader: R, model: &str) -> Result<MemoryImage> {
    let mut image = MemoryImage::new();
    let mut seen_header = false;

    for (number, text) in reader.lines().enumerate() {
        let text = text?;
        let line = number + 1;
        let trimmed = text.trim();

        if trimmed.is_empty() {
            continue;
        }

        if !seen_header {
            if !trimmed.eq_ignore_ascii_case(model) {
                return Err(Error::WrongModel {
                    expected: model.to_string(),
                    found: trimmed.to_string(),
                });
            }

            seen_header = true;
            continue;
        }

        if trimmed.contains(':') {
            parse_cpu_line(image.cpu_mut(), trimmed, line)?;
        } else if is_memory_line(trimmed) {
            parse_memory_line(&mut image, trimmed, line)?;
        } else {
            return Err(Error::UnrecognizedLine {
                line,
                text: trimmed.to_string(),
            });
        }
    }

    if !seen_header {
        return Err(Error::MissingHeader);
    }

    let status = image.status();
    if !status.is_well_formed() {
        tracing::warn!(
            "Status register watchdog is {:03X}, memory may be corrupt",
            status.watchdog
        );
    }

    tracing::debug!(
        "Loaded image, program space {} down to {}",
        status.program_top,
        status.program_limit
    );

    Ok(image)
}

/// Read the transcription file at `path`.
pub fn load<P: AsRef<Path>>(path: P, model: &str) -> Result<MemoryImage> {
    let path = path.as_ref();
    tracing::info!("Loading transcription {}", path.display());

    read(io::BufReader::new(fs::File::open(path)?), model)
}
