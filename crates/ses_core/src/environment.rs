//! Process-scoped script environment.
//!
//! # Responsibility
//! - Own the script registry and patch ledger for one host process.
//! - Seed the catalogue with the `Core` entry.
//! - Render serializable snapshots for diagnostics tooling.
//!
//! # Invariants
//! - A fresh or reset environment holds exactly the `Core` entry and an
//!   empty ledger.
//! - State is not synchronized; multi-threaded hosts wrap the environment
//!   in their own lock.

use crate::config::{CoreConfig, CORE_SCRIPT_NAME};
use crate::ledger::conflict::PatchConflict;
use crate::ledger::hook::HostHook;
use crate::ledger::owner::MethodHost;
use crate::ledger::patch_ledger::{AliasMap, PatchLedger};
use crate::naming::Symbol;
use crate::registry::imports::ImportTable;
use crate::registry::script_registry::ScriptRegistry;
use crate::script::ScriptDescriptor;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug)]
pub struct ScriptEnvironment {
    config: CoreConfig,
    registry: ScriptRegistry,
    ledger: PatchLedger,
}

impl Default for ScriptEnvironment {
    fn default() -> Self {
        Self::with_config(CoreConfig::default())
    }
}

impl ScriptEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CoreConfig) -> Self {
        let mut environment = Self {
            registry: ScriptRegistry::with_import_prefix(config.import_prefix.clone()),
            ledger: PatchLedger::new(),
            config,
        };
        environment.seed_core();
        environment
    }

    /// Clears all catalogue and ledger state, then re-seeds `Core`.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.ledger.clear();
        self.seed_core();
    }

    fn seed_core(&mut self) {
        self.registry.enter(ScriptDescriptor::with_authors(
            CORE_SCRIPT_NAME,
            self.config.core_version,
            self.config.default_authors.iter().cloned(),
        ));
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn registry(&self) -> &ScriptRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ScriptRegistry {
        &mut self.registry
    }

    pub fn ledger(&self) -> &PatchLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut PatchLedger {
        &mut self.ledger
    }

    /// Builds a script descriptor credited to the configured default authors.
    pub fn describe(&self, name: impl Into<Symbol>, version: f64) -> ScriptDescriptor {
        let authors = self.config.default_authors.iter().cloned();
        ScriptDescriptor::with_authors(name, version, authors)
    }

    /// Borrows the ledger as a host hook over `host`.
    pub fn hook<'a, H: MethodHost>(&'a mut self, host: &'a H) -> HostHook<'a, H> {
        HostHook::new(host, &mut self.ledger)
    }

    pub fn snapshot(&self) -> EnvironmentSnapshot<'_> {
        EnvironmentSnapshot {
            scripts: self.registry.entries_for(&[]),
            imports: self.registry.imports(),
            aliases: self.ledger.aliases(),
            overwrites: self.ledger.overwrites(),
            conflicts: self.ledger.conflicts(),
        }
    }

    /// Renders `snapshot()` as pretty-printed JSON.
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}

/// Read-only view of an environment for diagnostics output.
#[derive(Debug, Serialize)]
pub struct EnvironmentSnapshot<'a> {
    pub scripts: Vec<&'a ScriptDescriptor>,
    pub imports: &'a ImportTable,
    pub aliases: &'a BTreeMap<Symbol, AliasMap>,
    pub overwrites: &'a BTreeMap<Symbol, BTreeSet<Symbol>>,
    pub conflicts: Vec<PatchConflict>,
}

#[cfg(test)]
mod tests {
    use super::ScriptEnvironment;
    use crate::config::CoreConfig;
    use crate::ledger::owner::Owner;
    use crate::script::ScriptVersion;

    #[test]
    fn new_environment_is_seeded_with_core() {
        let environment = ScriptEnvironment::new();
        assert_eq!(environment.registry().len(), 1);
        assert!(environment.registry().contains("Core"));
        assert_eq!(
            environment.registry().imports().get("SES_Core"),
            Some(ScriptVersion::new(1.0))
        );
    }

    #[test]
    fn reset_restores_seeded_state() {
        let mut environment = ScriptEnvironment::new();
        let script = environment.describe("Example", 1.0);
        environment.registry_mut().enter(script);
        environment
            .ledger_mut()
            .register_alias(&Owner::named("Game_Map"), "ses_setup", "setup");

        environment.reset();
        assert_eq!(environment.registry().len(), 1);
        assert!(environment.ledger().aliases().is_empty());
    }

    #[test]
    fn config_controls_prefix_and_core_version() {
        let config = CoreConfig {
            import_prefix: "MOD_".to_string(),
            core_version: ScriptVersion::new(2.0),
            ..CoreConfig::default()
        };
        let environment = ScriptEnvironment::with_config(config);
        assert_eq!(
            environment.registry().imports().get("MOD_Core"),
            Some(ScriptVersion::new(2.0))
        );
    }
}
