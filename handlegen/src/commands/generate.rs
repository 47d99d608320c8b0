use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops::{self, GenerateOptions},
    options::{self, InputArgs},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Output root for handle wrappers (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Write the exports (.def) file here; not generated when omitted
    #[arg(short = 'd', long = "def")]
    pub exports_def: Option<PathBuf>,

    /// Skip handle wrapper generation
    #[arg(long)]
    pub no_handles: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command, returning the error count.
    pub fn run(&self) -> Result<i32> {
        let exports_def = self
            .exports_def
            .as_deref()
            .map(options::exports_path)
            .transpose()?;
        let inputs = self.inputs.load()?;

        let report = ops::generate(
            &inputs,
            GenerateOptions {
                output_dir: &self.output,
                exports_def,
                no_handles: self.no_handles,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(report.summary.exit_code())
    }
}
