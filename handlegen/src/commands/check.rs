use clap::Args;
use eyre::Result;

use crate::{
    ops,
    options::InputArgs,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Also classify exported functions
    #[arg(long)]
    pub exports: bool,
}

impl CheckCommand {
    /// Run the check command, returning the error count.
    pub fn run(&self) -> Result<i32> {
        let inputs = self.inputs.load()?;
        let report = ops::check(&inputs, self.exports)?;

        report.render(&mut TerminalOutput::new());
        Ok(report.summary.exit_code())
    }
}
