//! Script catalogue with dependency assertions.
//!
//! # Invariants
//! - Catalogue keys are unique; the last `enter` for a name wins.
//! - Every catalogue entry has a mirrored import-table key.
//! - A name is marked satisfied only after it was checked against an entry
//!   whose version met the requirement at that time.
//! - The satisfied mark remembers the highest version verified for a name;
//!   `require` skips only requirements at or below it.

use crate::naming::Symbol;
use crate::registry::criteria::Criterion;
use crate::registry::imports::ImportTable;
use crate::script::{ScriptDescriptor, ScriptVersion};
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Dependency resolution errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    MissingDependency {
        name: Symbol,
        required: ScriptVersion,
    },
    VersionTooLow {
        name: Symbol,
        required: ScriptVersion,
        installed: ScriptVersion,
    },
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDependency { name, required } => {
                write!(f, "missing dependency: {name} (version {required} or higher)")
            }
            Self::VersionTooLow {
                name,
                required,
                installed,
            } => write!(
                f,
                "dependency version too low: {name} {installed} installed, {required} required"
            ),
        }
    }
}

impl Error for RegistryError {}

/// Process-scoped script catalogue.
#[derive(Debug, Default)]
pub struct ScriptRegistry {
    scripts: BTreeMap<Symbol, ScriptDescriptor>,
    imports: ImportTable,
    satisfied: BTreeMap<Symbol, ScriptVersion>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry whose import keys use `prefix`.
    pub fn with_import_prefix(prefix: impl Into<String>) -> Self {
        Self {
            imports: ImportTable::with_prefix(prefix),
            ..Self::default()
        }
    }

    /// Enters one script, replacing any prior entry with the same name.
    ///
    /// Returns the replaced descriptor, if any.
    pub fn enter(&mut self, script: ScriptDescriptor) -> Option<ScriptDescriptor> {
        let key = self.imports.record(script.name().as_str(), script.version());
        info!(
            "event=script_enter module=registry status=ok name={} version={} import_key={}",
            script.name(),
            script.version(),
            key
        );
        self.scripts.insert(script.name().clone(), script)
    }

    /// Returns whether the catalogue has an exact entry for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ScriptDescriptor> {
        self.scripts.get(name)
    }

    /// Returns every entry matching all `criteria`, ordered by name.
    ///
    /// An empty criteria list matches every entry.
    pub fn entries_for(&self, criteria: &[Criterion]) -> Vec<&ScriptDescriptor> {
        self.scripts
            .values()
            .filter(|script| criteria.iter().all(|criterion| criterion.matches(script)))
            .collect()
    }

    /// Asserts minimum versions for a set of dependencies.
    ///
    /// Returns `Ok(true)` when at least one requirement was newly satisfied,
    /// `Ok(false)` when every requirement was covered by an earlier check at
    /// the same or a higher version.
    ///
    /// # Errors
    /// - `MissingDependency` when a required name has no entry.
    /// - `VersionTooLow` when the entry is older than required.
    ///
    /// The first failure aborts the call. Requirements satisfied earlier in
    /// the same call stay marked.
    pub fn require<I, N>(&mut self, requirements: I) -> Result<bool, RegistryError>
    where
        I: IntoIterator<Item = (N, ScriptVersion)>,
        N: Into<Symbol>,
    {
        let mut newly_satisfied = false;
        for (name, required) in requirements {
            let name = name.into();
            if self
                .satisfied
                .get(&name)
                .is_some_and(|verified| verified.satisfies(required))
            {
                continue;
            }
            let installed = match self.scripts.get(&name) {
                Some(script) => script.version(),
                None => {
                    warn!(
                        "event=require module=registry status=error reason=missing name={} required={}",
                        name, required
                    );
                    return Err(RegistryError::MissingDependency { name, required });
                }
            };
            if !installed.satisfies(required) {
                warn!(
                    "event=require module=registry status=error reason=version_too_low name={} required={} installed={}",
                    name, required, installed
                );
                return Err(RegistryError::VersionTooLow {
                    name,
                    required,
                    installed,
                });
            }
            info!(
                "event=require module=registry status=ok name={} required={} installed={}",
                name, required, installed
            );
            self.satisfied.insert(name, required);
            newly_satisfied = true;
        }
        Ok(newly_satisfied)
    }

    pub fn is_satisfied(&self, name: &str) -> bool {
        self.satisfied.contains_key(name)
    }

    /// Highest minimum version already verified for `name`.
    pub fn satisfied_version(&self, name: &str) -> Option<ScriptVersion> {
        self.satisfied.get(name).copied()
    }

    /// Removes one entry together with its import key and satisfied mark.
    pub fn remove(&mut self, name: &str) -> Option<ScriptDescriptor> {
        let removed = self.scripts.remove(name)?;
        self.imports.forget(name);
        self.satisfied.remove(name);
        info!(
            "event=script_remove module=registry status=ok name={} version={}",
            removed.name(),
            removed.version()
        );
        Some(removed)
    }

    /// Drops every entry, import key and satisfied mark.
    pub fn clear(&mut self) {
        self.scripts.clear();
        self.imports.clear();
        self.satisfied.clear();
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Live catalogue view.
    pub fn scripts(&self) -> &BTreeMap<Symbol, ScriptDescriptor> {
        &self.scripts
    }

    /// Live import table view.
    pub fn imports(&self) -> &ImportTable {
        &self.imports
    }
}

#[cfg(test)]
mod tests {
    use super::{RegistryError, ScriptRegistry};
    use crate::naming::Symbol;
    use crate::registry::criteria::Criterion;
    use crate::script::{ScriptDescriptor, ScriptVersion};

    fn v(value: f64) -> ScriptVersion {
        ScriptVersion::new(value)
    }

    #[test]
    fn enter_replaces_existing_entry_and_import_version() {
        let mut registry = ScriptRegistry::new();
        assert!(registry.enter(ScriptDescriptor::new("Example", 1.0)).is_none());
        let replaced = registry
            .enter(ScriptDescriptor::new("Example", 1.3))
            .expect("prior entry should be returned");

        assert_eq!(replaced.version(), v(1.0));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.imports().get("SES_Example"), Some(v(1.3)));
    }

    #[test]
    fn failing_requirement_keeps_earlier_marks_only() {
        let mut registry = ScriptRegistry::new();
        registry.enter(ScriptDescriptor::new("Core", 1.0));
        registry.enter(ScriptDescriptor::new("Hud", 1.0));

        let err = registry
            .require([("Core", v(1.0)), ("Missing", v(1.0)), ("Hud", v(1.0))])
            .expect_err("missing dependency must fail");
        assert_eq!(
            err,
            RegistryError::MissingDependency {
                name: Symbol::from("Missing"),
                required: v(1.0),
            }
        );
        assert!(registry.is_satisfied("Core"));
        assert!(!registry.is_satisfied("Missing"));
        assert!(!registry.is_satisfied("Hud"));
    }

    #[test]
    fn remove_clears_import_key_and_satisfied_mark() {
        let mut registry = ScriptRegistry::new();
        registry.enter(ScriptDescriptor::new("Example", 1.0));
        registry
            .require([("Example", v(1.0))])
            .expect("requirement should pass");

        let removed = registry.remove("Example").expect("entry should be removed");
        assert_eq!(removed.name(), &Symbol::from("Example"));
        assert!(!registry.contains("Example"));
        assert!(registry.imports().get("SES_Example").is_none());
        assert!(!registry.is_satisfied("Example"));
        assert!(registry.remove("Example").is_none());
    }

    #[test]
    fn custom_prefix_is_used_for_import_keys() {
        let mut registry = ScriptRegistry::with_import_prefix("MOD_");
        registry.enter(ScriptDescriptor::new("Battle_Core", 2.0));
        assert_eq!(registry.imports().get("MOD_Battle Core"), Some(v(2.0)));
    }

    #[test]
    fn empty_criteria_match_everything_in_name_order() {
        let mut registry = ScriptRegistry::new();
        registry.enter(ScriptDescriptor::new("Zeta", 1.0));
        registry.enter(ScriptDescriptor::new("Alpha", 1.0));

        let names: Vec<&str> = registry
            .entries_for(&[])
            .into_iter()
            .map(|script| script.name().as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
        assert_eq!(registry.entries_for(&[Criterion::from(2.0)]).len(), 0);
    }
}
