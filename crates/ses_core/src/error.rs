//! Load-sequence error aggregate.

use crate::config::ConfigError;
use crate::ledger::patch_ledger::LedgerError;
use crate::registry::script_registry::RegistryError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Any failure a script load sequence can hit through this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    Registry(RegistryError),
    Ledger(LedgerError),
    Config(ConfigError),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Registry(err) => write!(f, "{err}"),
            Self::Ledger(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Registry(err) => Some(err),
            Self::Ledger(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<RegistryError> for CoreError {
    fn from(value: RegistryError) -> Self {
        Self::Registry(value)
    }
}

impl From<LedgerError> for CoreError {
    fn from(value: LedgerError) -> Self {
        Self::Ledger(value)
    }
}

impl From<ConfigError> for CoreError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
