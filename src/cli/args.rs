//! CLI argument definitions.
//!
//! All arguments are defined with clap's derive macros. There are no
//! subcommands: piton does one thing per invocation.

use clap::Parser;
use std::path::PathBuf;

use crate::demo::DEFAULT_DEMO_URL;

/// Piton - Dependency bootstrap for single-file Python scripts.
#[derive(Debug, Parser)]
#[command(name = "piton")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Report missing dependencies but never offer to install them
    #[arg(long)]
    pub no_install: bool,

    /// Never prompt; behave as if no terminal were attached
    #[arg(long)]
    pub non_interactive: bool,

    /// Python interpreter to probe (default: python3, then python)
    #[arg(long, env = "PITON_PYTHON")]
    pub python: Option<PathBuf>,

    /// Path to config file (overrides default piton.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// URL for the post-bootstrap demo request
    #[arg(long, hide = true, default_value = DEFAULT_DEMO_URL)]
    pub url: String,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
