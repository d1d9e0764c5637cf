//! Patch collision report types.

use crate::naming::Symbol;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// The method was overwritten and also aliased; alias chains built by
    /// other scripts may no longer reach the code they expect.
    OverwrittenWhileAliased,
    /// More than one script aliased the same original method.
    StackedAliases,
}

/// One suspicious patch site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchConflict {
    pub owner: Symbol,
    pub method: Symbol,
    pub kind: ConflictKind,
    /// Aliases recorded for `method`, in creation order.
    pub aliases: Vec<Symbol>,
}
