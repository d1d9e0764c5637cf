//! Owner identity and host method queries.

use crate::naming::Symbol;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Identity of a class or module in the host environment.
///
/// Ledger records are keyed by `name` only, so an ephemeral owner shares a
/// key with a real owner of the same name. The ledger therefore never
/// records aliases or arms pending overwrites for ephemeral owners.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Owner {
    name: Symbol,
    ephemeral: bool,
}

impl Owner {
    pub fn named(name: impl Into<Symbol>) -> Self {
        Self {
            name: name.into(),
            ephemeral: false,
        }
    }

    /// Throwaway owner created by test doubles.
    pub fn ephemeral(name: impl Into<Symbol>) -> Self {
        Self {
            name: name.into(),
            ephemeral: true,
        }
    }

    pub fn name(&self) -> &Symbol {
        &self.name
    }

    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }
}

/// Host query used to validate overwrite declarations.
pub trait MethodHost {
    /// Returns whether `owner` currently defines `method`.
    fn defines(&self, owner: &Owner, method: &str) -> bool;
}

impl<F> MethodHost for F
where
    F: Fn(&Owner, &str) -> bool,
{
    fn defines(&self, owner: &Owner, method: &str) -> bool {
        self(owner, method)
    }
}

/// In-memory method table.
///
/// Useful for hosts that mirror their definitions into Rust and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodTable {
    methods: BTreeMap<Symbol, BTreeSet<Symbol>>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `owner` defines `method`.
    pub fn define(&mut self, owner: &Owner, method: impl Into<Symbol>) {
        self.methods
            .entry(owner.name().clone())
            .or_default()
            .insert(method.into());
    }

    /// Forgets one definition; drops the owner once it has none left.
    pub fn undefine(&mut self, owner: &Owner, method: &str) -> bool {
        let Some(methods) = self.methods.get_mut(owner.name().as_str()) else {
            return false;
        };
        let removed = methods.remove(method);
        if methods.is_empty() {
            self.methods.remove(owner.name().as_str());
        }
        removed
    }
}

impl MethodHost for MethodTable {
    fn defines(&self, owner: &Owner, method: &str) -> bool {
        self.methods
            .get(owner.name().as_str())
            .is_some_and(|methods| methods.contains(method))
    }
}

#[cfg(test)]
mod tests {
    use super::{MethodHost, MethodTable, Owner};

    #[test]
    fn method_table_tracks_definitions() {
        let owner = Owner::named("Game_Map");
        let mut table = MethodTable::new();
        assert!(!table.defines(&owner, "setup"));

        table.define(&owner, "setup");
        assert!(table.defines(&owner, "setup"));
        assert!(!table.defines(&Owner::named("Game_Party"), "setup"));

        assert!(table.undefine(&owner, "setup"));
        assert!(!table.undefine(&owner, "setup"));
        assert_eq!(table, MethodTable::new());
    }

    #[test]
    fn closures_act_as_method_hosts() {
        let host = |owner: &Owner, method: &str| owner.name() == "Game_Map" && method == "update";
        assert!(host.defines(&Owner::named("Game_Map"), "update"));
        assert!(!host.defines(&Owner::named("Game_Map"), "refresh"));
    }

    #[test]
    fn ephemeral_marker_is_explicit() {
        assert!(!Owner::named("Game_Map").is_ephemeral());
        assert!(Owner::ephemeral("double").is_ephemeral());
    }
}
