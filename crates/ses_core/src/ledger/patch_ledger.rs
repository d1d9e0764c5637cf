//! Alias and overwrite records.
//!
//! # Invariants
//! - Alias names per `(owner, original)` are unique and keep insertion order.
//! - No owner maps to an empty container; empty entries are removed.
//! - Aliases on ephemeral owners are never recorded, and ephemeral owners
//!   are never armed, so they cannot touch a real owner's records.
//! - A failed overwrite declaration records nothing.
//! - A pending overwrite mark captures exactly one subsequent definition.

use crate::ledger::conflict::{ConflictKind, PatchConflict};
use crate::ledger::owner::{MethodHost, Owner};
use crate::naming::Symbol;
use log::{debug, warn};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Alias names recorded per original method.
pub type AliasMap = BTreeMap<Symbol, Vec<Symbol>>;

/// Ledger recording errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    NoMethodDefined { owner: Symbol, method: Symbol },
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMethodDefined { owner, method } => {
                write!(f, "cannot overwrite undefined method: {owner}#{method}")
            }
        }
    }
}

impl Error for LedgerError {}

#[derive(Debug, Default)]
pub struct PatchLedger {
    aliases: BTreeMap<Symbol, AliasMap>,
    overwrites: BTreeMap<Symbol, BTreeSet<Symbol>>,
    pending: BTreeSet<Symbol>,
}

impl PatchLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `new_name` as an alias of `original_name` on `owner`.
    ///
    /// Returns `true` when newly recorded, `false` for duplicates and
    /// ephemeral owners.
    pub fn register_alias(
        &mut self,
        owner: &Owner,
        new_name: impl Into<Symbol>,
        original_name: impl Into<Symbol>,
    ) -> bool {
        if owner.is_ephemeral() {
            return false;
        }
        let new_name = new_name.into();
        let original_name = original_name.into();

        let names = self
            .aliases
            .entry(owner.name().clone())
            .or_default()
            .entry(original_name.clone())
            .or_default();
        if names.contains(&new_name) {
            return false;
        }
        debug!(
            "event=alias_record module=ledger status=ok owner={} original={} alias={}",
            owner.name(),
            original_name,
            new_name
        );
        names.push(new_name);
        true
    }

    /// Records a destructive redefinition of `method` on `owner`.
    ///
    /// Returns `Ok(true)` when newly recorded, `Ok(false)` for duplicates.
    ///
    /// # Errors
    /// - `NoMethodDefined` when `host` reports no such method on `owner`.
    pub fn register_overwrite(
        &mut self,
        host: &impl MethodHost,
        owner: &Owner,
        method: impl Into<Symbol>,
    ) -> Result<bool, LedgerError> {
        let method = method.into();
        if !host.defines(owner, method.as_str()) {
            warn!(
                "event=overwrite_record module=ledger status=error reason=no_method owner={} method={}",
                owner.name(),
                method
            );
            return Err(LedgerError::NoMethodDefined {
                owner: owner.name().clone(),
                method,
            });
        }

        let inserted = self
            .overwrites
            .entry(owner.name().clone())
            .or_default()
            .insert(method.clone());
        if inserted {
            debug!(
                "event=overwrite_record module=ledger status=ok owner={} method={}",
                owner.name(),
                method
            );
        }
        Ok(inserted)
    }

    /// Overwrite directive.
    ///
    /// `Some(method)` records immediately. `None` arms `owner` so the next
    /// method definition reported for it is recorded instead.
    pub fn declare_overwrite(
        &mut self,
        host: &impl MethodHost,
        owner: &Owner,
        method: Option<Symbol>,
    ) -> Result<bool, LedgerError> {
        match method {
            Some(method) => self.register_overwrite(host, owner, method),
            None if owner.is_ephemeral() => Ok(false),
            None => {
                self.pending.insert(owner.name().clone());
                debug!(
                    "event=overwrite_arm module=ledger status=ok owner={}",
                    owner.name()
                );
                Ok(false)
            }
        }
    }

    /// Handles one method definition on `owner`.
    ///
    /// When `owner` is armed, the mark is consumed and the definition is
    /// recorded as an overwrite. Otherwise returns `Ok(false)`. Ephemeral
    /// owners never consume a real owner's mark.
    pub fn method_defined(
        &mut self,
        host: &impl MethodHost,
        owner: &Owner,
        method: impl Into<Symbol>,
    ) -> Result<bool, LedgerError> {
        if owner.is_ephemeral() || !self.pending.remove(owner.name().as_str()) {
            return Ok(false);
        }
        self.register_overwrite(host, owner, method)
    }

    pub fn is_armed(&self, owner: &Owner) -> bool {
        !owner.is_ephemeral() && self.pending.contains(owner.name().as_str())
    }

    /// Live alias records.
    pub fn aliases(&self) -> &BTreeMap<Symbol, AliasMap> {
        &self.aliases
    }

    /// Live overwrite records.
    pub fn overwrites(&self) -> &BTreeMap<Symbol, BTreeSet<Symbol>> {
        &self.overwrites
    }

    pub fn aliases_for(&self, owner: &Owner) -> Option<&AliasMap> {
        self.aliases.get(owner.name().as_str())
    }

    pub fn overwrites_for(&self, owner: &Owner) -> Option<&BTreeSet<Symbol>> {
        self.overwrites.get(owner.name().as_str())
    }

    /// Drops every record and pending mark for `owner`.
    ///
    /// Returns whether anything was removed.
    pub fn remove_owner(&mut self, owner: &Owner) -> bool {
        let key = owner.name().as_str();
        let aliases = self.aliases.remove(key).is_some();
        let overwrites = self.overwrites.remove(key).is_some();
        let pending = self.pending.remove(key);
        aliases || overwrites || pending
    }

    pub fn clear(&mut self) {
        self.aliases.clear();
        self.overwrites.clear();
        self.pending.clear();
    }

    /// Reports methods patched in ways likely to collide.
    ///
    /// Ordered by owner, then method, then kind.
    pub fn conflicts(&self) -> Vec<PatchConflict> {
        let mut conflicts = Vec::new();
        for (owner, by_original) in &self.aliases {
            let overwritten = self.overwrites.get(owner);
            for (method, names) in by_original {
                if overwritten.is_some_and(|methods| methods.contains(method)) {
                    conflicts.push(PatchConflict {
                        owner: owner.clone(),
                        method: method.clone(),
                        kind: ConflictKind::OverwrittenWhileAliased,
                        aliases: names.clone(),
                    });
                }
                if names.len() > 1 {
                    conflicts.push(PatchConflict {
                        owner: owner.clone(),
                        method: method.clone(),
                        kind: ConflictKind::StackedAliases,
                        aliases: names.clone(),
                    });
                }
            }
        }
        conflicts
    }
}
