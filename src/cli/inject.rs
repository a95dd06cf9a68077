//! Code injection command

use crate::analysis::{inject, Injection};
use crate::cli::common::{load_image, wants_json};
use crate::project::Project;
use crate::transcript;
use clap::ArgMatches;
use std::io;
use std::io::Write;

fn report<W: Write>(mut out: W, injection: &Injection, json: bool) -> io::Result<()> {
    if json {
        return writeln!(out, "{}", serde_json::to_string_pretty(injection)?);
    }

    writeln!(
        out,
        "Injected {} bytes into {} registers",
        injection.bytes, injection.registers
    )?;
    writeln!(
        out,
        "Program limit {:03X} -> {:03X}",
        injection.old_limit, injection.new_limit
    )?;
    writeln!(
        out,
        "Free registers {} -> {}",
        injection.free_before, injection.free_after
    )
}

pub fn inject(project: &Project, args: &ArgMatches) -> io::Result<()> {
    let mut image = load_image(project)?;
    let code = args.value_of("code").ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "Must specify code to inject")
    })?;

    let injection = inject::inject(&mut image, code)?;

    match args.value_of("output") {
        Some(output) => {
            transcript::save(output, &image, project.model())?;
            report(io::stdout(), &injection, wants_json(args))
        }
        None => {
            let stdout = io::stdout();
            transcript::write(stdout.lock(), &image, project.model())?;
            report(io::stderr(), &injection, wants_json(args))
        }
    }
}
