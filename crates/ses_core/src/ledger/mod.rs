//! Alias and overwrite bookkeeping.
//!
//! Every alias created in the host and every declared overwrite is recorded
//! here so collisions between independently written scripts can be
//! diagnosed. Host code reports events through `HostHook`; the ledger never
//! inspects the host itself beyond the `MethodHost` query.

pub mod conflict;
pub mod hook;
pub mod owner;
pub mod patch_ledger;
