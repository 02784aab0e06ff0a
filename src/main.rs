use clap::Parser;
use std::process::ExitCode;

mod app;
mod cli;
mod config;
mod ui;

fn main() -> ExitCode {
    match cli::Cli::parse().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
