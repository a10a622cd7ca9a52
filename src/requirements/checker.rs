//! Scans a requirement spec against an interpreter.

use crate::error::Result;

use super::probe::PythonInterpreter;
use super::spec::{Requirement, RequirementSpec};

/// Return the requirements whose modules do not resolve, in spec order.
///
/// A probe that cannot deliver a verdict propagates as an error; it is
/// never collapsed into "missing", which would trigger a pointless
/// reinstall of a package that is actually present.
pub fn scan(
    spec: &RequirementSpec,
    interpreter: &dyn PythonInterpreter,
) -> Result<Vec<Requirement>> {
    let mut missing = Vec::new();

    for requirement in spec.entries() {
        if interpreter.module_available(&requirement.module)? {
            tracing::debug!(module = %requirement.module, "module present");
        } else {
            tracing::debug!(module = %requirement.module, "module missing");
            missing.push(requirement.clone());
        }
    }

    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::probe::MockInterpreter;

    fn two_requirement_spec() -> RequirementSpec {
        RequirementSpec::new(vec![
            Requirement::new("alpha", "alpha>=1.0"),
            Requirement::new("beta", "beta>=2.0"),
        ])
        .unwrap()
    }

    #[test]
    fn scan_reports_nothing_when_all_present() {
        let interp = MockInterpreter::new().with_module("alpha").with_module("beta");
        let missing = scan(&two_requirement_spec(), &interp).unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn scan_reports_only_absent_modules() {
        let interp = MockInterpreter::new().with_module("alpha");
        let missing = scan(&two_requirement_spec(), &interp).unwrap();
        assert_eq!(missing, vec![Requirement::new("beta", "beta>=2.0")]);
    }

    #[test]
    fn scan_preserves_spec_order() {
        let spec = RequirementSpec::new(vec![
            Requirement::new("zeta", "zeta>=1.0"),
            Requirement::new("alpha", "alpha>=1.0"),
            Requirement::new("mike", "mike>=1.0"),
        ])
        .unwrap();
        let interp = MockInterpreter::new();

        let missing = scan(&spec, &interp).unwrap();
        let modules: Vec<&str> = missing.iter().map(|r| r.module.as_str()).collect();
        assert_eq!(modules, ["zeta", "alpha", "mike"]);
    }

    #[test]
    fn scan_with_default_spec() {
        let interp = MockInterpreter::new()
            .with_module("requests")
            .with_module("tomli")
            .with_module("rich")
            .with_module("rich_argparse");
        let missing = scan(&RequirementSpec::default(), &interp).unwrap();
        assert!(missing.is_empty());
    }
}
