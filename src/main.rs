//! Entry point: wires CLI → path resolution → conversion → clipboard → pause.
//!
//! The real stdin, stdout, clipboard and launch detector are created here
//! and handed to `app`, which owns the flow.

mod app;
mod cli;
mod clipboard;
mod convert;
mod launch;

use std::io::{self, Write};

use clap::Parser;

use crate::cli::Cli;
use crate::clipboard::SystemClipboard;
use crate::launch::ConsoleLaunchDetector;

fn main() -> color_eyre::Result<()> {
    // Install color_eyre error/panic hooks for pretty backtraces.
    color_eyre::install()?;
    env_logger::init();

    let cli = Cli::parse();

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    let outcome = app::run(&cli.paths, &mut input, &mut out, &mut SystemClipboard)?;
    log::debug!("run finished: {outcome:?}");

    // Keep a double-clicked console window open until ENTER.
    app::pause_if_needed(&ConsoleLaunchDetector, &mut input, &mut out)?;
    out.flush()?;

    Ok(())
}
