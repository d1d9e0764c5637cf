//! Script identity model.
//!
//! # Responsibility
//! - Describe one installed script: name, version and authors.
//!
//! # Invariants
//! - A descriptor is immutable after construction.
//! - `authors` is never empty; an empty declaration falls back to the
//!   default author list.
//! - Name uniqueness is enforced by the registry, not here.

use crate::config::default_authors;
use crate::naming::Symbol;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Comparable script version number (`1.0`, `1.25`, ...).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScriptVersion(f64);

impl ScriptVersion {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns whether this version meets `minimum`.
    pub fn satisfies(self, minimum: ScriptVersion) -> bool {
        matches!(
            self.partial_cmp(&minimum),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }
}

impl Default for ScriptVersion {
    fn default() -> Self {
        Self(1.0)
    }
}

impl From<f64> for ScriptVersion {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Display for ScriptVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Immutable identity of one script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptDescriptor {
    name: Symbol,
    version: ScriptVersion,
    authors: Vec<Symbol>,
}

impl ScriptDescriptor {
    /// Creates a descriptor credited to the default authors.
    pub fn new(name: impl Into<Symbol>, version: impl Into<ScriptVersion>) -> Self {
        Self::with_authors(name, version, Vec::<Symbol>::new())
    }

    /// Creates a descriptor with explicit authors.
    ///
    /// An empty `authors` list falls back to the default authors.
    pub fn with_authors<A>(
        name: impl Into<Symbol>,
        version: impl Into<ScriptVersion>,
        authors: impl IntoIterator<Item = A>,
    ) -> Self
    where
        A: Into<Symbol>,
    {
        let mut authors: Vec<Symbol> = authors.into_iter().map(Into::into).collect();
        if authors.is_empty() {
            authors = default_authors();
        }
        Self {
            name: name.into(),
            version: version.into(),
            authors,
        }
    }

    pub fn name(&self) -> &Symbol {
        &self.name
    }

    pub fn version(&self) -> ScriptVersion {
        self.version
    }

    pub fn authors(&self) -> &[Symbol] {
        &self.authors
    }

    pub fn is_authored_by(&self, author: &str) -> bool {
        self.authors.iter().any(|value| value == author)
    }
}
