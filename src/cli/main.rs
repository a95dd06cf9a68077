//! CLI support for non-command bits

use crate::cli::common::Command;
use crate::{cli, project};
use clap::{App, AppSettings, Arg, ArgSettings};
use std::io;
use std::str::FromStr;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the full command line parser.
pub fn app<'a, 'b>() -> App<'a, 'b> {
    let mut app = app_from_crate!().setting(AppSettings::SubcommandRequiredElseHelp);
    app = project::Project::configure_app(app);
    app = app
        .arg(
            Arg::with_name("project")
                .long("project")
                .value_name("calcmem.json")
                .takes_value(true)
                .help("The project file to load")
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Print results as JSON")
                .set(ArgSettings::Global),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .multiple(true)
                .help("Log more detail, may be given more than once")
                .set(ArgSettings::Global),
        );

    for cmd in Command::enumerate().iter() {
        app = app.subcommand(cmd.into_clap_subcommand());
    }

    app
}

/// Default log level for the number of `-v` flags given.
pub fn log_level(verbosity: u64) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbosity: u64) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbosity)));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

pub fn main() -> io::Result<()> {
    let matches = app().get_matches();

    let (command, submatches) = matches.subcommand();
    let submatches = submatches.unwrap_or(&matches);
    init_logging(submatches.occurrences_of("verbose"));

    let project_filename = submatches.value_of("project").unwrap_or("calcmem.json");
    let project = project::Project::read(project_filename)?;
    let project = project.apply_override(&project::Project::from_arg_matches(submatches));

    let command = cli::Command::from_str(command).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Unknown command {}", command),
        )
    })?;

    tracing::debug!("Running {:?} with {:?}", command, project);

    match command {
        cli::Command::Summary => cli::summary(&project, submatches),
        cli::Command::Catalog => cli::catalog(&project, submatches),
        cli::Command::Disassemble => cli::dis(&project, submatches),
        cli::Command::Alarms => cli::alarms(&project, submatches),
        cli::Command::Inject => cli::inject(&project, submatches),
        cli::Command::Print => cli::print(&project, submatches),
    }
}
