//! Catalogue query criteria.

use crate::naming::Symbol;
use crate::script::{ScriptDescriptor, ScriptVersion};

/// One `entries_for` criterion.
///
/// Criteria combine with logical AND.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Matches entries whose version equals this value.
    Version(ScriptVersion),
    /// Matches entries with this name or crediting this author.
    Name(Symbol),
}

impl Criterion {
    pub fn matches(&self, script: &ScriptDescriptor) -> bool {
        match self {
            Self::Version(version) => script.version() == *version,
            Self::Name(value) => {
                script.name() == value || script.is_authored_by(value.as_str())
            }
        }
    }
}

impl From<ScriptVersion> for Criterion {
    fn from(value: ScriptVersion) -> Self {
        Self::Version(value)
    }
}

impl From<f64> for Criterion {
    fn from(value: f64) -> Self {
        Self::Version(ScriptVersion::new(value))
    }
}

impl From<Symbol> for Criterion {
    fn from(value: Symbol) -> Self {
        Self::Name(value)
    }
}

impl From<&Symbol> for Criterion {
    fn from(value: &Symbol) -> Self {
        Self::Name(value.clone())
    }
}

impl From<&str> for Criterion {
    fn from(value: &str) -> Self {
        Self::Name(Symbol::from(value))
    }
}
