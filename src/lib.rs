//! Piton - Dependency bootstrap for single-file Python scripts.
//!
//! Piton checks that a script's third-party Python dependencies are
//! importable before the script runs, reports exactly what is missing with
//! the pip command to fix it, and optionally performs the install after an
//! explicit confirmation. It is the compiled equivalent of the
//! check-and-offer preamble often pasted at the top of standalone scripts.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the top-level run sequence
//! - [`config`] - Optional `piton.yml` loading and validation
//! - [`demo`] - The post-bootstrap HTTP demo action
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Dependency detection, reporting, and installation
//! - [`shell`] - Subprocess execution
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use piton::requirements::{scan, MockInterpreter, RequirementSpec};
//!
//! let interpreter = MockInterpreter::new().with_module("requests");
//! let missing = scan(&RequirementSpec::default(), &interpreter).unwrap();
//!
//! // Everything but `requests` is absent in this mock environment.
//! assert_eq!(missing.len(), 3);
//! ```

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{PitonError, Result};
