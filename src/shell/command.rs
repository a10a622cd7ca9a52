//! Subprocess execution.
//!
//! Unlike a shell runner, commands here are spawned directly from a program
//! path and an argument vector. Package descriptors like `rich-argparse>=1.0.0`
//! contain shell metacharacters, so nothing in Piton is ever routed through
//! `sh -c`.

use crate::error::{PitonError, Result};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a subprocess.
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl ExecResult {
    /// Stdout followed by stderr, the way pip failures are reported.
    pub fn combined_output(&self) -> String {
        let mut out = self.stdout.clone();
        out.push_str(&self.stderr);
        out
    }
}

/// Options for subprocess execution.
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// Working directory.
    pub cwd: Option<std::path::PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,
}

/// Render a program + args as a human-readable command line.
pub fn render_command(program: &Path, args: &[String]) -> String {
    let mut parts = vec![program.display().to_string()];
    parts.extend(args.iter().cloned());
    parts.join(" ")
}

/// Execute a program with arguments, capturing stdout and stderr.
///
/// Blocks until the child exits. No timeout is applied; installer runtime
/// is bounded only by the installer itself.
pub fn run<S: AsRef<OsStr>>(program: &Path, args: &[S], options: &ExecOptions) -> Result<ExecResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    let rendered = render_command(
        program,
        &args
            .iter()
            .map(|a| a.as_ref().to_string_lossy().to_string())
            .collect::<Vec<_>>(),
    );

    tracing::debug!("Executing: {}", rendered);

    let output = cmd.output().map_err(|_| PitonError::CommandFailed {
        command: rendered,
        code: None,
    })?;

    let duration = start.elapsed();

    Ok(ExecResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration,
        success: output.status.success(),
    })
}

/// Execute a program and return success/failure only.
pub fn run_check<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> bool {
    run(program, args, &ExecOptions::default())
        .map(|r| r.success)
        .unwrap_or(false)
}
