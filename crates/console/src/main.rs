//! IndustrialERP console.

use std::process::ExitCode;

use clap::Parser;

use industrialerp_console::cli::Cli;
use industrialerp_console::commands;
use industrialerp_console::config::AppConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli);
    industrialerp_observability::init(&config.log);

    match commands::run(&cli.command, &config) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
