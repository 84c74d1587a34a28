use bs_cli::{logging, run, CliArgs};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init_tracing();

    match run(&args) {
        Ok(excerpt) => {
            println!("{excerpt}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERR: {err:#}. Exiting...");
            ExitCode::FAILURE
        }
    }
}
