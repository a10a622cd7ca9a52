//! Command-line interface for Piton.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the top-level run sequence.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Bootstrap-then-demo sequence, returning an exit code

pub mod args;

pub use args::Cli;

use crate::config::Config;
use crate::demo::run_demo;
use crate::error::Result;
use crate::requirements::{
    ensure_dependencies, BootstrapOptions, BootstrapOutcome, SystemInterpreter,
};
use crate::ui::UserInterface;

/// Run the full sequence: load config, probe, bootstrap, demo.
///
/// Returns the process exit code. Missing dependencies always yield 1,
/// even after a successful install; demo faults never change the code.
pub fn run(cli: &Cli, ui: &mut dyn UserInterface) -> Result<u8> {
    let config = Config::load(cli.config.as_deref())?;

    let python = cli.python.clone().or(config.python.clone());
    let interpreter = SystemInterpreter::discover(python)?;
    let spec = config.requirement_spec()?;

    let options = BootstrapOptions {
        allow_install: !cli.no_install,
    };

    let outcome = ensure_dependencies(&spec, &interpreter, ui, &options)?;
    if let BootstrapOutcome::Ready = outcome {
        run_demo(ui, &cli.url);
    }
    Ok(outcome.exit_code())
}
