//! Alarm listing command

use crate::analysis::alarm;
use crate::cli::common::{load_image, print_json, wants_json};
use crate::project::Project;
use clap::ArgMatches;
use std::io;

pub fn alarms(project: &Project, args: &ArgMatches) -> io::Result<()> {
    let image = load_image(project)?;
    let alarms = alarm::index(&image, project.tz_offset());

    if wants_json(args) {
        return print_json(&alarms);
    }

    if alarms.is_empty() {
        println!("No alarms");
    }

    for alarm in alarms.iter() {
        let when = match alarm.local_time() {
            Some(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => format!("@{}", alarm.time),
        };

        if alarm.repeating {
            println!("{}  {} (every {}s)", when, alarm.name, alarm.interval);
        } else {
            println!("{}  {}", when, alarm.name);
        }
    }

    Ok(())
}
