//! `curl2httpie` – convert the curl command on the clipboard (or stdin).

use anyhow::Result;
use curl2httpie_core::config::Curl2HttpieConfig;
use curl2httpie_core::io::NullSink;
use curl2httpie_core::{run, run_clipboard, ConvertOptions};
use std::io;

use crate::cli::clipboard::{StdinSource, SystemClipboard};
use crate::cli::ConvertArgs;

/// Effective settings once CLI flags are applied over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub program: String,
    pub copy: bool,
    pub quiet: bool,
    pub stdin: bool,
}

pub fn resolve_settings(args: &ConvertArgs, cfg: &Curl2HttpieConfig) -> Settings {
    Settings {
        program: args.program.clone().unwrap_or_else(|| cfg.program.clone()),
        copy: cfg.copy_to_clipboard && !args.no_copy,
        quiet: cfg.quiet || args.quiet,
        stdin: args.stdin,
    }
}

pub fn run_convert(args: &ConvertArgs, cfg: &Curl2HttpieConfig) -> Result<()> {
    let settings = resolve_settings(args, cfg);
    tracing::debug!("convert settings: {:?}", settings);

    let options = ConvertOptions {
        program: &settings.program,
        quiet: settings.quiet,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match (settings.stdin, settings.copy) {
        (false, true) => {
            let mut clipboard = SystemClipboard::open()?;
            run_clipboard(&mut clipboard, &mut out, options)?;
        }
        (false, false) => {
            let mut clipboard = SystemClipboard::open()?;
            run(&mut clipboard, &mut NullSink, &mut out, options)?;
        }
        (true, true) => {
            let mut clipboard = SystemClipboard::open()?;
            run(&mut StdinSource, &mut clipboard, &mut out, options)?;
        }
        (true, false) => {
            run(&mut StdinSource, &mut NullSink, &mut out, options)?;
        }
    }
    Ok(())
}
