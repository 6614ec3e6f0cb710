mod analysis;
mod app;
mod args;
mod config;
mod entry;
mod error;
mod input;
mod metrics;
mod monitor;
mod system;

use std::process::ExitCode;

fn main() -> ExitCode {
    match entry::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
