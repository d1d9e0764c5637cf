//! Discovery import table.
//!
//! Other software checks `imports[key] >= version` to detect an installed
//! script without depending on the registry type. Keys are the configured
//! prefix followed by the descriptive-style script name.

use crate::config::DEFAULT_IMPORT_PREFIX;
use crate::naming::{descriptive_name, Symbol};
use crate::script::ScriptVersion;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportTable {
    #[serde(skip)]
    prefix: String,
    #[serde(flatten)]
    entries: BTreeMap<Symbol, ScriptVersion>,
}

impl Default for ImportTable {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_IMPORT_PREFIX)
    }
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Builds the discovery key for a script name.
    pub fn key_for(&self, script_name: &str) -> Symbol {
        Symbol::new(format!("{}{}", self.prefix, descriptive_name(script_name)))
    }

    pub(crate) fn record(&mut self, script_name: &str, version: ScriptVersion) -> Symbol {
        let key = self.key_for(script_name);
        self.entries.insert(key.clone(), version);
        key
    }

    pub(crate) fn forget(&mut self, script_name: &str) -> Option<ScriptVersion> {
        let key = self.key_for(script_name);
        self.entries.remove(key.as_str())
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Looks up a raw discovery key such as `SES_Example`.
    pub fn get(&self, key: &str) -> Option<ScriptVersion> {
        self.entries.get(key).copied()
    }

    /// Returns the recorded version for a script name.
    pub fn version_of(&self, script_name: &str) -> Option<ScriptVersion> {
        self.get(self.key_for(script_name).as_str())
    }

    /// Returns whether a script with at least `minimum` is recorded.
    pub fn has_at_least(&self, script_name: &str, minimum: ScriptVersion) -> bool {
        self.version_of(script_name)
            .is_some_and(|version| version.satisfies(minimum))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &BTreeMap<Symbol, ScriptVersion> {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::ImportTable;
    use crate::naming::Symbol;
    use crate::script::ScriptVersion;

    #[test]
    fn builds_prefixed_descriptive_keys() {
        let table = ImportTable::new();
        assert_eq!(table.key_for("Example"), Symbol::from("SES_Example"));
        assert_eq!(table.key_for("Battle_Core"), Symbol::from("SES_Battle Core"));
        assert_eq!(table.key_for("Battle Core"), Symbol::from("SES_Battle Core"));
    }

    #[test]
    fn records_and_forgets_versions() {
        let mut table = ImportTable::with_prefix("MOD_");
        table.record("Example", ScriptVersion::new(1.5));
        assert_eq!(table.get("MOD_Example"), Some(ScriptVersion::new(1.5)));
        assert!(table.has_at_least("Example", ScriptVersion::new(1.0)));
        assert!(!table.has_at_least("Example", ScriptVersion::new(2.0)));

        assert_eq!(table.forget("Example"), Some(ScriptVersion::new(1.5)));
        assert!(table.is_empty());
    }
}
