mod check;
mod completions;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

use crate::logging::DiagnosticLevel;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for handlegen_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "handlegen")]
#[command(version)]
#[command(about = "Generate LLVM handle wrappers and the LibLLVM exports listing")]
pub(crate) struct Cli {
    /// Lowest diagnostic severity to print (overridden by RUST_LOG)
    #[arg(long, global = true, value_enum, default_value_t = DiagnosticLevel::Warning)]
    pub diagnostics: DiagnosticLevel,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Run the selected command, returning the process exit status.
    pub fn run(&self) -> Result<i32> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run().map(|()| 0),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate handle wrappers and, with -d, the exports listing
    Generate(GenerateCommand),

    /// Dispatch templates and report problems without writing anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "handlegen",
            "generate",
            "-l",
            "llvm",
            "-e",
            "libllvm",
            "--ast",
            "ast.json",
            "-d",
            "out/LibLLVM.def",
            "--diagnostics",
            "info",
        ])
        .unwrap();

        assert_eq!(cli.diagnostics, DiagnosticLevel::Info);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn test_generate_requires_roots() {
        assert!(Cli::try_parse_from(["handlegen", "generate", "--ast", "ast.json"]).is_err());
    }
}
