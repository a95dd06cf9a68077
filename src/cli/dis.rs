//! Disassembly command

use crate::analysis::{listing, Row};
use crate::cli::common::{load_image, print_json, wants_json};
use crate::project::Project;
use clap::ArgMatches;
use std::io;

fn print_rows(rows: &[Row]) {
    for row in rows {
        println!("{:03} {:<24} {}", row.sequence, row.mnemonic, row.hex);
    }
}

pub fn dis(project: &Project, args: &ArgMatches) -> io::Result<()> {
    let image = load_image(project)?;

    if args.is_present("all") {
        let rows = listing::disassemble_all(&image)?;
        if wants_json(args) {
            return print_json(&rows);
        }

        print_rows(&rows);
        return Ok(());
    }

    let name = args.value_of("label").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "Must specify a label or --all to disassemble",
        )
    })?;

    let program = match listing::disassemble(&image, name)? {
        Some(program) => program,
        None => {
            eprintln!("No program labeled \"{}\"", name);
            return Ok(());
        }
    };

    if wants_json(args) {
        return print_json(&program);
    }

    println!("LBL \"{}\"", program.label.name);
    print_rows(&program.rows);
    println!("{} bytes: {}", program.size(), program.hex);

    Ok(())
}
