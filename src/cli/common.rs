//! Common utilities for command implementations

use crate::memory::MemoryImage;
use crate::project::Project;
use crate::transcript;
use clap::{App, Arg, ArgMatches, SubCommand};
use serde::Serialize;
use std::io;
use std::str;
use std::str::FromStr;

/// Enumeration of all CLI commands
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Summary,
    Catalog,
    Disassemble,
    Alarms,
    Inject,
    Print,
}

impl Command {
    /// Enumerate all commands that calcmem recognizes.
    pub fn enumerate() -> Vec<Self> {
        use Command::*;

        vec![Summary, Catalog, Disassemble, Alarms, Inject, Print]
    }

    /// Construct the subcommand object for this particular `Command`.
    pub fn into_clap_subcommand<'a, 'b>(self) -> App<'a, 'b> {
        match self {
            Command::Summary => SubCommand::with_name("summary")
                .about("Show the status register, program and alarm counts, and free space"),
            Command::Catalog => {
                SubCommand::with_name("catalog").about("List every global label and program size")
            }
            Command::Disassemble => SubCommand::with_name("dis")
                .about("List the program containing a given global label")
                .arg(
                    Arg::with_name("label")
                        .value_name("NAME")
                        .index(1)
                        .required_unless("all")
                        .help("The global label of the program to list"),
                )
                .arg(
                    Arg::with_name("all")
                        .long("all")
                        .conflicts_with("label")
                        .help("List all of program space instead"),
                ),
            Command::Alarms => SubCommand::with_name("alarms").about("List the scheduled alarms"),
            Command::Inject => SubCommand::with_name("inject")
                .about("Append code to the end of program space")
                .arg(
                    Arg::with_name("code")
                        .value_name("HEX")
                        .index(1)
                        .required(true)
                        .help("The code to inject, as hex digit pairs"),
                )
                .arg(
                    Arg::with_name("output")
                        .long("output")
                        .short("o")
                        .value_name("memory.txt")
                        .takes_value(true)
                        .help("Where to write the new transcription (defaults to stdout)"),
                ),
            Command::Print => {
                SubCommand::with_name("print").about("Write the transcription back out")
            }
        }
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "summary" => Ok(Command::Summary),
            "catalog" => Ok(Command::Catalog),
            "dis" => Ok(Command::Disassemble),
            "alarms" => Ok(Command::Alarms),
            "inject" => Ok(Command::Inject),
            "print" => Ok(Command::Print),
            _ => Err(()),
        }
    }
}

/// Load the transcription the project points to.
pub fn load_image(project: &Project) -> io::Result<MemoryImage> {
    let image = project.image().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "Did not specify an image, use --image or the project file.",
        )
    })?;

    Ok(transcript::load(image, project.model())?)
}

/// Whether the user asked for machine-readable output.
pub fn wants_json(args: &ArgMatches) -> bool {
    args.is_present("json")
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}
