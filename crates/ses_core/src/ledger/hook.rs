//! Host integration seam.
//!
//! # Responsibility
//! - Give host code one place to report alias creation, method definition
//!   and overwrite directives.
//!
//! # Invariants
//! - Every alias the host creates must be reported through `alias_created`.
//! - `define` must be reported after the host has installed the method, so
//!   an armed overwrite can see it.

use crate::ledger::owner::{MethodHost, Owner};
use crate::ledger::patch_ledger::{LedgerError, PatchLedger};
use crate::naming::Symbol;

/// Borrowed pairing of a host method table with the ledger.
pub struct HostHook<'a, H: MethodHost> {
    host: &'a H,
    ledger: &'a mut PatchLedger,
}

impl<'a, H: MethodHost> HostHook<'a, H> {
    pub fn new(host: &'a H, ledger: &'a mut PatchLedger) -> Self {
        Self { host, ledger }
    }

    /// Reports an alias created by the host's aliasing primitive.
    pub fn alias_created(
        &mut self,
        owner: &Owner,
        new_name: impl Into<Symbol>,
        original_name: impl Into<Symbol>,
    ) -> bool {
        self.ledger.register_alias(owner, new_name, original_name)
    }

    /// Reports a method definition on `owner`.
    pub fn method_defined(
        &mut self,
        owner: &Owner,
        method: impl Into<Symbol>,
    ) -> Result<bool, LedgerError> {
        self.ledger.method_defined(self.host, owner, method)
    }

    /// Overwrite directive with zero or one method name.
    pub fn overwrite(
        &mut self,
        owner: &Owner,
        method: Option<&str>,
    ) -> Result<bool, LedgerError> {
        self.ledger
            .declare_overwrite(self.host, owner, method.map(Symbol::from))
    }

    pub fn ledger(&self) -> &PatchLedger {
        &*self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::HostHook;
    use crate::ledger::owner::{MethodTable, Owner};
    use crate::ledger::patch_ledger::PatchLedger;

    #[test]
    fn armed_overwrite_captures_next_definition_only() {
        let owner = Owner::named("Game_Map");
        let mut host = MethodTable::new();
        host.define(&owner, "m1");
        host.define(&owner, "m2");
        let mut ledger = PatchLedger::new();

        let mut hook = HostHook::new(&host, &mut ledger);
        assert!(!hook.overwrite(&owner, None).unwrap());
        assert!(hook.ledger().is_armed(&owner));
        assert!(hook.method_defined(&owner, "m1").unwrap());
        assert!(!hook.method_defined(&owner, "m2").unwrap());

        let overwrites = ledger.overwrites_for(&owner).expect("owner record");
        assert!(overwrites.contains("m1"));
        assert!(!overwrites.contains("m2"));
    }

    #[test]
    fn alias_events_flow_into_ledger() {
        let owner = Owner::named("Scene_Map");
        let host = MethodTable::new();
        let mut ledger = PatchLedger::new();
        {
            let mut hook = HostHook::new(&host, &mut ledger);
            assert!(hook.alias_created(&owner, "ses_start", "start"));
            assert!(!hook.alias_created(&owner, "ses_start", "start"));
        }
        assert_eq!(ledger.aliases_for(&owner).expect("owner record")["start"].len(), 1);
    }
}
