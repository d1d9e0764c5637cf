//! Script registry and patch ledger for moddable hosts.
//! Scripts register identity and dependencies here; host code reports every
//! alias and overwrite so patch collisions can be diagnosed.

pub mod config;
pub mod environment;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod naming;
pub mod registry;
pub mod script;

pub use config::{ConfigError, CoreConfig};
pub use environment::{EnvironmentSnapshot, ScriptEnvironment};
pub use error::{CoreError, CoreResult};
pub use ledger::conflict::{ConflictKind, PatchConflict};
pub use ledger::hook::HostHook;
pub use ledger::owner::{MethodHost, MethodTable, Owner};
pub use ledger::patch_ledger::{AliasMap, LedgerError, PatchLedger};
pub use logging::{default_log_level, init_logging, init_logging_with_config, logging_status};
pub use naming::{descriptive_name, format_name, Symbol};
pub use registry::criteria::Criterion;
pub use registry::imports::ImportTable;
pub use registry::script_registry::{RegistryError, ScriptRegistry};
pub use script::{ScriptDescriptor, ScriptVersion};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
