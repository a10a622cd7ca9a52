//! Dependency detection and bootstrap.
//!
//! This module decides whether the target Python script's third-party
//! dependencies are importable, and offers to install the missing ones.
//!
//! # Modules
//!
//! - [`spec`] - The ordered module-to-descriptor requirement mapping
//! - [`probe`] - Interpreter abstraction for existence checks and pip
//! - [`checker`] - Scans a spec against an interpreter
//! - [`installer`] - The report / advisory / confirm / install sequence

pub mod checker;
pub mod installer;
pub mod probe;
pub mod spec;

pub use checker::scan;
pub use installer::{
    ensure_dependencies, BootstrapOptions, BootstrapOutcome, FatalReason, InstallOutcome,
};
pub use probe::{MockInterpreter, PythonInterpreter, SystemInterpreter};
pub use spec::{Requirement, RequirementSpec};
