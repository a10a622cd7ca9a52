//! Interpreter abstraction.
//!
//! The checker and installer never talk to a Python process directly; they
//! go through [`PythonInterpreter`] so tests can substitute a scripted
//! implementation. [`SystemInterpreter`] is the real one.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::error::{PitonError, Result};
use crate::shell::{run, ExecOptions, ExecResult};

/// The `-c` snippet for a side-effect-free existence check.
///
/// `find_spec` resolves the module without executing it, so a package with
/// a broken top-level import still counts as present. `find_spec` itself
/// raises for dotted names whose parent is absent, hence the try/except.
fn find_spec_snippet(module: &str) -> String {
    format!(
        "import importlib.util, sys\n\
         try:\n\
         \x20   found = importlib.util.find_spec('{}') is not None\n\
         except ImportError:\n\
         \x20   found = False\n\
         sys.exit(0 if found else 1)",
        module
    )
}

const VENV_SNIPPET: &str = "import sys\nsys.exit(0 if sys.prefix != sys.base_prefix else 1)";

/// Abstraction over the target Python interpreter.
pub trait PythonInterpreter {
    /// Path to the interpreter executable (for rendering manual commands).
    fn executable(&self) -> &Path;

    /// Whether `module` resolves in the interpreter's environment.
    ///
    /// Must not execute the module: existence lookup only.
    fn module_available(&self, module: &str) -> Result<bool>;

    /// Whether the interpreter is running inside a virtual environment.
    fn in_virtualenv(&self) -> Result<bool>;

    /// Whether `{python} -m pip` is invocable.
    fn pip_available(&self) -> Result<bool>;

    /// Run `{python} -m pip install [--user] {descriptors…}`, capturing output.
    fn install(&self, descriptors: &[String], user_install: bool) -> Result<ExecResult>;
}

/// The real interpreter, driven via subprocesses.
#[derive(Debug, Clone)]
pub struct SystemInterpreter {
    executable: PathBuf,
}

impl SystemInterpreter {
    /// Use a specific interpreter executable.
    pub fn new(executable: PathBuf) -> Self {
        Self { executable }
    }

    /// Discover a usable interpreter.
    ///
    /// An explicit override (from `--python` or `PITON_PYTHON`) is trusted
    /// but verified; otherwise `python3` then `python` are tried on PATH.
    pub fn discover(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            let candidate = Self::new(path.clone());
            if candidate.responds() {
                return Ok(candidate);
            }
            return Err(PitonError::InterpreterNotFound {
                hint: format!("'{}' is not a runnable Python interpreter", path.display()),
            });
        }

        for name in ["python3", "python"] {
            let candidate = Self::new(PathBuf::from(name));
            if candidate.responds() {
                tracing::debug!("Using interpreter: {}", name);
                return Ok(candidate);
            }
        }

        Err(PitonError::InterpreterNotFound {
            hint: "tried python3, python; use --python to point at one".to_string(),
        })
    }

    fn responds(&self) -> bool {
        crate::shell::run_check(&self.executable, &["--version"])
    }

    fn run_snippet(&self, snippet: &str) -> Result<ExecResult> {
        run(&self.executable, &["-c", snippet], &ExecOptions::default())
    }
}

impl PythonInterpreter for SystemInterpreter {
    fn executable(&self) -> &Path {
        &self.executable
    }

    fn module_available(&self, module: &str) -> Result<bool> {
        let result = self.run_snippet(&find_spec_snippet(module))?;
        match result.exit_code {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => Err(PitonError::ProbeFailed {
                module: module.to_string(),
                message: result.combined_output().trim().to_string(),
            }),
        }
    }

    fn in_virtualenv(&self) -> Result<bool> {
        // The shell's VIRTUAL_ENV can describe a different interpreter than
        // the one being probed, so only the prefix check answers.
        let result = self.run_snippet(VENV_SNIPPET)?;
        match result.exit_code {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => Err(PitonError::ProbeFailed {
                module: "sys".to_string(),
                message: result.combined_output().trim().to_string(),
            }),
        }
    }

    fn pip_available(&self) -> Result<bool> {
        let result = run(
            &self.executable,
            &["-m", "pip", "--version"],
            &ExecOptions::default(),
        )?;
        Ok(result.success)
    }

    fn install(&self, descriptors: &[String], user_install: bool) -> Result<ExecResult> {
        let mut args = vec!["-m".to_string(), "pip".to_string(), "install".to_string()];
        if user_install {
            args.push("--user".to_string());
        }
        args.extend(descriptors.iter().cloned());

        run(&self.executable, &args, &ExecOptions::default())
    }
}

/// Scripted interpreter for tests.
///
/// Records install invocations so assertions can verify that declined or
/// refused paths never spawn pip.
#[derive(Debug)]
pub struct MockInterpreter {
    executable: PathBuf,
    available: Vec<String>,
    venv: bool,
    pip: bool,
    install_exit_code: i32,
    install_output: String,
    install_calls: RefCell<Vec<Vec<String>>>,
}

impl Default for MockInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl MockInterpreter {
    /// Create a mock with no modules available, pip present, no venv,
    /// and installs succeeding.
    pub fn new() -> Self {
        Self {
            executable: PathBuf::from("/usr/bin/python3"),
            available: Vec::new(),
            venv: false,
            pip: true,
            install_exit_code: 0,
            install_output: String::new(),
            install_calls: RefCell::new(Vec::new()),
        }
    }

    /// Mark a module as importable.
    pub fn with_module(mut self, module: &str) -> Self {
        self.available.push(module.to_string());
        self
    }

    /// Set virtualenv membership.
    pub fn with_venv(mut self, venv: bool) -> Self {
        self.venv = venv;
        self
    }

    /// Set pip availability.
    pub fn with_pip(mut self, pip: bool) -> Self {
        self.pip = pip;
        self
    }

    /// Script the install result.
    pub fn with_install_result(mut self, exit_code: i32, output: &str) -> Self {
        self.install_exit_code = exit_code;
        self.install_output = output.to_string();
        self
    }

    /// The descriptor lists passed to `install`, in call order.
    pub fn install_calls(&self) -> Vec<Vec<String>> {
        self.install_calls.borrow().clone()
    }
}

impl PythonInterpreter for MockInterpreter {
    fn executable(&self) -> &Path {
        &self.executable
    }

    fn module_available(&self, module: &str) -> Result<bool> {
        Ok(self.available.iter().any(|m| m == module))
    }

    fn in_virtualenv(&self) -> Result<bool> {
        Ok(self.venv)
    }

    fn pip_available(&self) -> Result<bool> {
        Ok(self.pip)
    }

    fn install(&self, descriptors: &[String], _user_install: bool) -> Result<ExecResult> {
        self.install_calls.borrow_mut().push(descriptors.to_vec());
        Ok(ExecResult {
            exit_code: Some(self.install_exit_code),
            stdout: self.install_output.clone(),
            stderr: String::new(),
            duration: std::time::Duration::from_millis(1),
            success: self.install_exit_code == 0,
        })
    }
}
