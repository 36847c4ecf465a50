use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use weft::commands::lint::{self, LintOptions};

#[derive(Parser)]
#[command(name = "weft")]
#[command(about = "Linter for CI configuration files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate configuration files against the schema and run the
    /// cross-file consistency checks
    Lint {
        /// File(s) or directories to lint
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Path to a JSON schema file (defaults to the bundled schema)
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Check that playbook paths referenced by jobs exist
        #[arg(short = 'c', long)]
        check_playbook_paths: bool,

        /// Ignore warnings
        #[arg(short, long)]
        ignore_warnings: bool,

        /// Handle warnings as errors
        #[arg(long)]
        warnings_as_errors: bool,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lint {
            paths,
            schema,
            check_playbook_paths,
            ignore_warnings,
            warnings_as_errors,
        } => {
            let passed = lint::execute(LintOptions {
                paths,
                schema,
                check_playbook_paths,
                ignore_warnings,
                warnings_as_errors,
            })?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}
