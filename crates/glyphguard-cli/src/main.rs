mod cli;
mod commands;
mod config_loader;
mod output;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;

use std::process::exit;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout carries the annotation stream; logs go to stderr.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // Usage problems are reported on stdout with exit code 2.
                print!("{}", e.render());
                exit(2);
            }
        },
    };

    let result = commands::scan::scan(&cli.directory, cli.config.as_ref());

    match result {
        Ok(found) => {
            if found {
                exit(1);
            } else {
                exit(0);
            }
        }
        Err(e) => {
            println!("Error: {:#}", e);
            exit(2);
        }
    }
}
