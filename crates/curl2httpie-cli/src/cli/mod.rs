//! CLI for curl2httpie.

mod clipboard;
mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use curl2httpie_core::config::{self, Curl2HttpieConfig};

use commands::{run_completions, run_convert, run_man};

/// Top-level CLI. Without a subcommand, converts the curl command on the clipboard.
#[derive(Debug, Parser)]
#[command(name = "curl2httpie", version)]
#[command(about = "Convert curl commands to HTTPie syntax", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub convert: ConvertArgs,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ConvertArgs {
    /// Read the curl command from standard input instead of the clipboard.
    #[arg(long)]
    pub stdin: bool,

    /// Do not write the converted command to the clipboard.
    #[arg(long)]
    pub no_copy: bool,

    /// Print only the converted command.
    #[arg(short, long)]
    pub quiet: bool,

    /// Program name to start the converted command with (default: `http`).
    #[arg(long, value_name = "NAME")]
    pub program: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print shell completions for the given shell.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            Some(CliCommand::Completions { shell }) => run_completions(shell),
            Some(CliCommand::Man) => run_man(),
            None => {
                let cfg = load_config();
                run_convert(&cli.convert, &cfg)
            }
        }
    }
}

/// A missing or broken config file falls back to defaults.
fn load_config() -> Curl2HttpieConfig {
    match config::load_or_init() {
        Ok(cfg) => {
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        }
        Err(err) => {
            tracing::warn!("using default config: {:#}", err);
            Curl2HttpieConfig::default()
        }
    }
}

#[cfg(test)]
mod tests;
