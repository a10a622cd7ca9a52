//! Optional project configuration.
//!
//! A `piton.yml` next to the target script can override the interpreter and
//! the requirement list. Absence of the default file is not an error; the
//! built-in requirement set applies. An explicitly requested file that does
//! not exist is an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PitonError, Result};
use crate::requirements::{Requirement, RequirementSpec};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "piton.yml";

/// On-disk configuration shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Interpreter override, same meaning as `--python`.
    #[serde(default)]
    pub python: Option<PathBuf>,
    /// Requirement list override. Empty means "use the built-in set".
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist and parse. Without one,
    /// `piton.yml` in the working directory is used if present, otherwise
    /// an empty config.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(PitonError::ConfigNotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::from_file(path)
            }
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config =
            serde_yaml::from_str(&contents).map_err(|e| PitonError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// The requirement spec this config selects.
    pub fn requirement_spec(&self) -> Result<RequirementSpec> {
        if self.requirements.is_empty() {
            Ok(RequirementSpec::default())
        } else {
            RequirementSpec::new(self.requirements.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/piton.yml")));
        assert!(matches!(result, Err(PitonError::ConfigNotFound { .. })));
    }

    #[test]
    fn parses_full_config() {
        let file = write_config(
            "python: /opt/python3.12/bin/python3\n\
             requirements:\n\
             \x20 - module: alpha\n\
             \x20   package: alpha>=1.0\n\
             \x20 - module: beta\n\
             \x20   package: beta>=2.0\n",
        );

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(
            config.python,
            Some(PathBuf::from("/opt/python3.12/bin/python3"))
        );

        let spec = config.requirement_spec().unwrap();
        assert_eq!(spec.entries()[0], Requirement::new("alpha", "alpha>=1.0"));
        assert_eq!(spec.len(), 2);
    }

    #[test]
    fn empty_requirements_falls_back_to_builtin_set() {
        let file = write_config("python: python3\n");
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.requirement_spec().unwrap(), RequirementSpec::default());
    }

    #[test]
    fn invalid_yaml_reports_parse_error() {
        let file = write_config("requirements: [not, a, mapping]\n");
        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(PitonError::ConfigParseError { .. })));
    }

    #[test]
    fn unknown_fields_rejected() {
        let file = write_config("pyhton: python3\n");
        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(PitonError::ConfigParseError { .. })));
    }

    #[test]
    fn invalid_module_name_rejected_at_spec_build() {
        let file = write_config(
            "requirements:\n\
             \x20 - module: \"os; import evil\"\n\
             \x20   package: evil>=1.0\n",
        );
        let config = Config::from_file(file.path()).unwrap();
        assert!(matches!(
            config.requirement_spec(),
            Err(PitonError::InvalidModuleName { .. })
        ));
    }
}
