//! Script catalogue and dependency resolution.
//!
//! The registry owns every entered `ScriptDescriptor`, mirrors versions into
//! the discovery import table and remembers which dependency requirements
//! have already been asserted.

pub mod criteria;
pub mod imports;
pub mod script_registry;
