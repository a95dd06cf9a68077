//! Memory usage summary command

use crate::analysis::summary;
use crate::cli::common::{load_image, print_json, wants_json};
use crate::project::Project;
use clap::ArgMatches;
use std::io;

pub fn summary(project: &Project, args: &ArgMatches) -> io::Result<()> {
    let image = load_image(project)?;
    let summary = summary::summarize(&image)?;

    if wants_json(args) {
        return print_json(&summary);
    }

    let status = &summary.status;
    let watchdog = if summary.well_formed { "ok" } else { "BAD" };

    println!("Watchdog:            {:03X} ({})", status.watchdog, watchdog);
    println!(
        "Program space:       {:03X} down to {:03X}",
        status.program_top, status.program_limit
    );
    println!("Labels:              {}", summary.labels);
    println!("Programs:            {}", summary.programs);
    println!("Alarms:              {}", summary.alarms);
    println!("Program registers:   {}", summary.program_registers);
    println!(
        "Free registers:      {} ({:03X} up to the limit, partition terminator excluded)",
        summary.free_registers, summary.program_bottom
    );
    println!("Partition registers: {}", summary.partition_registers);

    Ok(())
}
