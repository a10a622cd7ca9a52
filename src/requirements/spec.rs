//! The requirement mapping: importable module name to pip descriptor.

use serde::Deserialize;

use crate::error::{PitonError, Result};

/// One required capability.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Requirement {
    /// The importable module name, e.g. `rich_argparse`.
    pub module: String,
    /// The pip package descriptor, e.g. `rich-argparse>=1.0.0`.
    pub package: String,
}

impl Requirement {
    /// Create a requirement.
    pub fn new(module: &str, package: &str) -> Self {
        Self {
            module: module.to_string(),
            package: package.to_string(),
        }
    }

    /// Validate the module name as a dotted Python identifier.
    ///
    /// The name is spliced into a `-c` snippet handed to the interpreter,
    /// so anything that isn't a plain dotted identifier is rejected.
    pub fn validate(&self) -> Result<()> {
        if is_dotted_identifier(&self.module) {
            Ok(())
        } else {
            Err(PitonError::InvalidModuleName {
                module: self.module.clone(),
            })
        }
    }
}

fn is_dotted_identifier(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    name.split('.').all(|part| {
        let mut chars = part.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

/// The ordered set of requirements for one invocation.
///
/// Defined once at startup and injected into the checker and installer;
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementSpec {
    entries: Vec<Requirement>,
}

impl RequirementSpec {
    /// Build a spec from an ordered list of requirements.
    pub fn new(entries: Vec<Requirement>) -> Result<Self> {
        if entries.is_empty() {
            return Err(PitonError::ConfigValidationError {
                message: "requirements list is empty".to_string(),
            });
        }
        for entry in &entries {
            entry.validate()?;
            if entry.package.trim().is_empty() {
                return Err(PitonError::ConfigValidationError {
                    message: format!("empty package descriptor for module '{}'", entry.module),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Iterate the requirements in declaration order.
    pub fn entries(&self) -> &[Requirement] {
        &self.entries
    }

    /// Number of requirements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the spec is empty (never true for a validated spec).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RequirementSpec {
    /// The template's built-in requirement set.
    fn default() -> Self {
        Self {
            entries: vec![
                Requirement::new("requests", "requests>=2.31.0"),
                Requirement::new("tomli", "tomli>=2.0.0"),
                Requirement::new("rich", "rich>=13.0.0"),
                Requirement::new("rich_argparse", "rich-argparse>=1.0.0"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_preserves_template_order() {
        let spec = RequirementSpec::default();
        let modules: Vec<&str> = spec.entries().iter().map(|r| r.module.as_str()).collect();
        assert_eq!(modules, ["requests", "tomli", "rich", "rich_argparse"]);
    }

    #[test]
    fn valid_module_names_accepted() {
        for name in ["requests", "rich_argparse", "importlib.util", "_private"] {
            let req = Requirement::new(name, "pkg>=1.0");
            assert!(req.validate().is_ok(), "{} should be valid", name);
        }
    }

    #[test]
    fn invalid_module_names_rejected() {
        for name in [
            "",
            "os; import evil",
            "1starts_with_digit",
            "has-dash",
            "trailing.",
            "a..b",
            "spaces here",
        ] {
            let req = Requirement::new(name, "pkg>=1.0");
            assert!(req.validate().is_err(), "{:?} should be invalid", name);
        }
    }

    #[test]
    fn empty_spec_rejected() {
        let result = RequirementSpec::new(vec![]);
        assert!(matches!(
            result,
            Err(PitonError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn spec_rejects_invalid_entry() {
        let result = RequirementSpec::new(vec![Requirement::new("bad name", "pkg>=1.0")]);
        assert!(matches!(result, Err(PitonError::InvalidModuleName { .. })));
    }

    #[test]
    fn spec_rejects_empty_descriptor() {
        let result = RequirementSpec::new(vec![Requirement::new("alpha", "  ")]);
        assert!(matches!(
            result,
            Err(PitonError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn spec_len_and_entries() {
        let spec = RequirementSpec::new(vec![
            Requirement::new("alpha", "alpha>=1.0"),
            Requirement::new("beta", "beta>=2.0"),
        ])
        .unwrap();
        assert_eq!(spec.len(), 2);
        assert!(!spec.is_empty());
        assert_eq!(spec.entries()[1].package, "beta>=2.0");
    }

    #[test]
    fn requirement_deserializes_from_yaml() {
        let req: Requirement =
            serde_yaml::from_str("module: requests\npackage: requests>=2.31.0\n").unwrap();
        assert_eq!(req, Requirement::new("requests", "requests>=2.31.0"));
    }
}
