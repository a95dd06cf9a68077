//! Transcription output command

use crate::cli::common::load_image;
use crate::project::Project;
use crate::transcript;
use clap::ArgMatches;
use std::io;

pub fn print(project: &Project, _args: &ArgMatches) -> io::Result<()> {
    let image = load_image(project)?;
    let stdout = io::stdout();

    Ok(transcript::write(stdout.lock(), &image, project.model())?)
}
