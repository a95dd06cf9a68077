//! Transcription output

use crate::input::format_hex;
use crate::memory::{MemoryImage, REGISTER_SIZE};
use crate::transcript::{Result, REGISTERS_PER_LINE};
use std::io::Write;
use std::path::Path;
use std::{fs, io};

/// Write `image` out as a transcription for `model`.
pub fn write<W: Write>(mut out: W, image: &MemoryImage, model: &str) -> Result<()> {
    let cpu = image.cpu();

    writeln!(out, "{}", model)?;
    writeln!(
        out,
        "A: {} B: {} C: {}",
        format_hex(&cpu.a),
        format_hex(&cpu.b),
        format_hex(&cpu.c)
    )?;
    writeln!(
        out,
        "M: {} N: {} G: {}",
        format_hex(&cpu.m),
        format_hex(&cpu.n),
        format_hex(&cpu.g)
    )?;

    let lines = image.bytes().chunks(REGISTER_SIZE * REGISTERS_PER_LINE);
    for (index, line) in lines.enumerate() {
        write!(out, "{:03X}", index * REGISTERS_PER_LINE)?;

        for reg in line.chunks(REGISTER_SIZE) {
            write!(out, "  {}", format_hex(reg))?;
        }

        writeln!(out)?;
    }

    Ok(())
}

/// Write `image` to the file at `path`, replacing it.
pub fn save<P: AsRef<Path>>(path: P, image: &MemoryImage, model: &str) -> Result<()> {
    let path = path.as_ref();
    tracing::info!("Saving transcription {}", path.display());

    let mut file = io::BufWriter::new(fs::File::create(path)?);
    write(&mut file, image, model)?;
    file.flush()?;

    Ok(())
}
