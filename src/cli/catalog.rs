//! Program catalog command

use crate::analysis::{catalog, CatalogEntry};
use crate::cli::common::{load_image, print_json, wants_json};
use crate::project::Project;
use clap::ArgMatches;
use std::io;

pub fn catalog(project: &Project, args: &ArgMatches) -> io::Result<()> {
    let image = load_image(project)?;
    let catalog = catalog::index(&image)?;

    if wants_json(args) {
        return print_json(&catalog);
    }

    for entry in catalog.entries.iter() {
        match entry {
            CatalogEntry::Label(label) => match label.key {
                Some(key) => println!("LBL \"{}\" (key {:02X})", label.name, key),
                None => println!("LBL \"{}\"", label.name),
            },
            CatalogEntry::Size(size) => println!("END {} bytes", size),
        }
    }

    println!("{} labels, {} programs", catalog.labels, catalog.programs);

    Ok(())
}
