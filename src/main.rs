use clap::Parser;
use csv_tidy::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments; clap reports missing flags with
    // usage text on stderr and a non-zero exit
    let args = Args::parse();

    match commands::run(args) {
        Ok(_stats) => {
            process::exit(0);
        }
        Err(error) => {
            // Route through anyhow so the source chain prints
            eprintln!("Error: {:#}", anyhow::Error::from(error));
            process::exit(1);
        }
    }
}
