#[macro_use]
extern crate clap;

#[macro_use]
extern crate lazy_static;

mod analysis;
mod arch;
mod cli;
mod input;
mod memory;
mod project;
mod transcript;

use std::process;

fn main() {
    if let Err(e) = cli::main() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
