mod commands;
mod logging;
mod ops;
mod options;
mod reports;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.diagnostics);

    // Exit status is the number of error diagnostics.
    match cli.run()? {
        0 => Ok(()),
        code => std::process::exit(code),
    }
}
