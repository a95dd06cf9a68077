//! Project configuration file representation

use crate::analysis::alarm;
use crate::transcript::MODEL_ID;
use clap::{App, Arg, ArgMatches, ArgSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{fs, io};

/// In-memory representation of the current project configuration.
///
/// This file is typically read from a file named `calcmem.json`. Every field
/// is optional, and any of them may be overridden from the command line.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    /// The transcription file to analyze.
    #[serde(default)]
    image: Option<String>,

    /// The calculator model the transcription must be for.
    #[serde(default)]
    model: Option<String>,

    /// Offset from UTC, in seconds, to display alarm times in.
    #[serde(default)]
    tz_offset: Option<i64>,
}

fn validate_offset(value: String) -> Result<(), String> {
    value
        .parse::<i64>()
        .map(|_| ())
        .map_err(|e| format!("{} is not a number of seconds: {}", value, e))
}

impl Project {
    pub fn configure_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.arg(
            Arg::with_name("image")
                .long("image")
                .value_name("memory.txt")
                .help("The memory transcription to analyze.")
                .takes_value(true)
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("tz_offset")
                .long("tz-offset")
                .value_name("SECONDS")
                .help("Offset from UTC to show alarm times in. Defaults to the local time zone.")
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(validate_offset)
                .set(ArgSettings::Global),
        )
    }

    /// Construct a Project from clap ArgMatches
    pub fn from_arg_matches(args: &ArgMatches) -> Project {
        Project {
            image: args.value_of("image").map(|s| s.to_string()),
            model: None,
            tz_offset: args.value_of("tz_offset").and_then(|s| s.parse().ok()),
        }
    }

    /// Read the project file at `filename`.
    ///
    /// A missing project file yields the default configuration.
    pub fn read<P: AsRef<Path>>(filename: P) -> io::Result<Self> {
        let filename = filename.as_ref();

        match fs::File::open(filename) {
            Ok(file) => {
                tracing::debug!("Reading project file {}", filename.display());

                Ok(serde_json::from_reader(io::BufReader::new(file))?)
            }
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No project file at {}", filename.display());

                Ok(Project::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    #[cfg(test)]
    pub fn set_image(&mut self, image: &str) {
        self.image = Some(image.to_string());
    }

    /// The calculator model to expect.
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(MODEL_ID)
    }

    /// The time zone offset to show alarms in, falling back to the host's.
    pub fn tz_offset(&self) -> i64 {
        self.tz_offset.unwrap_or_else(alarm::local_tz_offset)
    }

    #[cfg(test)]
    pub fn set_tz_offset(&mut self, tz_offset: i64) {
        self.tz_offset = Some(tz_offset);
    }

    pub fn apply_override(&self, other: &Project) -> Project {
        Project {
            image: other.image.clone().or_else(|| self.image.clone()),
            model: other.model.clone().or_else(|| self.model.clone()),
            tz_offset: other.tz_offset.or(self.tz_offset),
        }
    }
}
