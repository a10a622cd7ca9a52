//! The report / advisory / confirm / install sequence.
//!
//! [`ensure_dependencies`] is the single entry point: it scans the
//! requirement spec, reports anything missing together with the exact
//! manual install command, and optionally runs pip after an explicit
//! confirmation. It never terminates the process itself; the caller maps
//! the returned [`BootstrapOutcome`] to an exit code.

use crate::error::{PitonError, Result};
use crate::shell::command::render_command;
use crate::ui::{ConfirmPrompt, UserInterface};

use super::checker::scan;
use super::probe::PythonInterpreter;
use super::spec::{Requirement, RequirementSpec};

const VENV_DOCS_URL: &str = "https://docs.python.org/3/library/venv.html";

/// Result of one missing-dependency episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// pip reported success.
    Success,
    /// pip ran and failed; `output` is its combined stdout and stderr.
    Failure {
        exit_code: Option<i32>,
        output: String,
    },
    /// Installation was disabled by the caller.
    Skipped,
    /// The user answered no.
    Declined,
    /// No interactive input was available to ask.
    NoTty,
    /// pip itself is not invocable through this interpreter.
    NoInstaller,
}

/// Why the program cannot proceed to its real work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FatalReason {
    /// Missing dependencies and installation disabled.
    InstallRefused,
    /// Missing dependencies and no terminal to ask on.
    NoInteractiveInput,
    /// The user declined the install offer.
    Declined,
    /// pip is unavailable for this interpreter.
    InstallerUnavailable,
    /// pip ran and failed.
    InstallFailed {
        exit_code: Option<i32>,
        output: String,
    },
    /// Installation succeeded; a fresh process is needed to pick the new
    /// packages up.
    RestartRequired,
}

/// Whether the environment is ready for the program's real work.
///
/// Every missing-dependency path is fatal for this run, including a
/// successful install: the outcome carries why, the caller decides how
/// loudly to say it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// All requirements resolve; proceed.
    Ready,
    /// The run must stop; exit code 1.
    Fatal(FatalReason),
}

impl BootstrapOutcome {
    /// The process exit code this outcome maps to.
    pub fn exit_code(&self) -> u8 {
        match self {
            BootstrapOutcome::Ready => 0,
            BootstrapOutcome::Fatal(_) => 1,
        }
    }
}

/// Caller-side knobs for the bootstrap flow.
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// When false, report missing dependencies but never offer to install.
    pub allow_install: bool,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            allow_install: true,
        }
    }
}

/// Check the spec and, if anything is missing, walk the report/install flow.
pub fn ensure_dependencies(
    spec: &RequirementSpec,
    interpreter: &dyn PythonInterpreter,
    ui: &mut dyn UserInterface,
    options: &BootstrapOptions,
) -> Result<BootstrapOutcome> {
    let missing = scan(spec, interpreter)?;
    if missing.is_empty() {
        tracing::debug!("all {} requirements resolve", spec.len());
        ui.success("All dependencies are present.");
        return Ok(BootstrapOutcome::Ready);
    }

    let user_install = !interpreter.in_virtualenv()?;
    report_missing(&missing, interpreter, user_install, ui);

    let outcome = offer_install(&missing, interpreter, user_install, ui, options)?;
    tracing::debug!(?outcome, "bootstrap finished with missing dependencies");

    let reason = match outcome {
        InstallOutcome::Success => FatalReason::RestartRequired,
        InstallOutcome::Failure { exit_code, output } => {
            FatalReason::InstallFailed { exit_code, output }
        }
        InstallOutcome::Skipped => FatalReason::InstallRefused,
        InstallOutcome::Declined => FatalReason::Declined,
        InstallOutcome::NoTty => FatalReason::NoInteractiveInput,
        InstallOutcome::NoInstaller => FatalReason::InstallerUnavailable,
    };
    Ok(BootstrapOutcome::Fatal(reason))
}

/// The install command line, exactly as the user would type it.
fn install_command(
    interpreter: &dyn PythonInterpreter,
    missing: &[Requirement],
    user_install: bool,
) -> String {
    render_command(interpreter.executable(), &install_args(missing, user_install))
}

fn install_args(missing: &[Requirement], user_install: bool) -> Vec<String> {
    let mut args = vec!["-m".to_string(), "pip".to_string(), "install".to_string()];
    if user_install {
        args.push("--user".to_string());
    }
    args.extend(missing.iter().map(|r| r.package.clone()));
    args
}

fn report_missing(
    missing: &[Requirement],
    interpreter: &dyn PythonInterpreter,
    user_install: bool,
    ui: &mut dyn UserInterface,
) {
    ui.error("Missing dependencies required to run this program.");
    for requirement in missing {
        ui.message(&format!(
            "  - {} (module '{}')",
            requirement.package, requirement.module
        ));
    }

    ui.message("To install them manually, run:");
    ui.show_command(&install_command(interpreter, missing, user_install));

    ui.warning(
        "Installing fetches and runs code from PyPI. \
         Review the packages above before proceeding.",
    );
    ui.hint(&format!(
        "Consider a virtual environment. For more info: {}",
        VENV_DOCS_URL
    ));
}

fn offer_install(
    missing: &[Requirement],
    interpreter: &dyn PythonInterpreter,
    user_install: bool,
    ui: &mut dyn UserInterface,
    options: &BootstrapOptions,
) -> Result<InstallOutcome> {
    if !options.allow_install {
        ui.message("Skipping installation due to --no-install flag.");
        return Ok(InstallOutcome::Skipped);
    }

    if !ui.is_interactive() {
        ui.message("No interactive terminal; run the command above manually.");
        return Ok(InstallOutcome::NoTty);
    }

    let prompt = ConfirmPrompt::new("install_now", "Would you like to install them now?", false);
    match ui.confirm(&prompt) {
        Ok(true) => {}
        Ok(false) => return Ok(InstallOutcome::Declined),
        Err(PitonError::PromptUnavailable { .. }) => return Ok(InstallOutcome::NoTty),
        Err(e) => return Err(e),
    }

    if !interpreter.pip_available()? {
        ui.error("pip is not available for this interpreter.");
        ui.hint("Install pip first, e.g. `python3 -m ensurepip --upgrade`.");
        return Ok(InstallOutcome::NoInstaller);
    }

    let descriptors: Vec<String> = missing.iter().map(|r| r.package.clone()).collect();
    let mut spinner = ui.start_spinner("Installing dependencies...");
    let result = interpreter.install(&descriptors, user_install)?;

    if result.success {
        spinner.finish_success("Installation complete");
        ui.success("Dependencies installed successfully. Please re-run the program.");
        Ok(InstallOutcome::Success)
    } else {
        spinner.finish_error("Installation failed");
        ui.show_output_block("Installer output", &result.combined_output());
        ui.message("Please run the command above manually.");
        Ok(InstallOutcome::Failure {
            exit_code: result.exit_code,
            output: result.combined_output(),
        })
    }
}
