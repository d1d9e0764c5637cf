//! Identifier tokens and name-style conversion.
//!
//! # Responsibility
//! - Provide the `Symbol` token used for script names, authors and keys.
//! - Toggle a token between identifier style (`Foo_Bar`) and descriptive
//!   style (`Foo Bar`).
//!
//! # Invariants
//! - `format_name` performs no case or punctuation normalization.
//! - `format_name(format_name(x)) == x` when the words of `x` contain no
//!   separators of the other style.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{Display, Formatter};

const DESCRIPTIVE_SEPARATOR: char = ' ';
const IDENTIFIER_SEPARATOR: char = '_';

/// Identifier token.
///
/// Compared by value; cloning is cheap enough for catalogue-sized data.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&Symbol> for Symbol {
    fn from(value: &Symbol) -> Self {
        value.clone()
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Converts a token to the other name style.
///
/// Descriptive input (contains a space) becomes underscore-joined; anything
/// else becomes space-joined. The result is always a `Symbol`.
pub fn format_name(value: impl AsRef<str>) -> Symbol {
    let value = value.as_ref();
    if is_descriptive(value) {
        Symbol(value.replace(DESCRIPTIVE_SEPARATOR, "_"))
    } else {
        Symbol(value.replace(IDENTIFIER_SEPARATOR, " "))
    }
}

/// Returns the descriptive-style form of `value`, leaving descriptive input
/// untouched.
pub fn descriptive_name(value: impl AsRef<str>) -> Symbol {
    let value = value.as_ref();
    if is_descriptive(value) {
        Symbol::from(value)
    } else {
        format_name(value)
    }
}

fn is_descriptive(value: &str) -> bool {
    value.contains(DESCRIPTIVE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::{descriptive_name, format_name, Symbol};

    #[test]
    fn converts_descriptive_to_identifier_style() {
        assert_eq!(format_name("Battle Core"), Symbol::from("Battle_Core"));
    }

    #[test]
    fn converts_identifier_to_descriptive_style() {
        assert_eq!(format_name("Battle_Core"), Symbol::from("Battle Core"));
        assert_eq!(format_name(Symbol::from("Core")), Symbol::from("Core"));
    }

    #[test]
    fn round_trips_plain_tokens() {
        for token in ["Core", "Battle_Core", "Event Trigger Extension", "a_b_c"] {
            assert_eq!(format_name(format_name(token)), Symbol::from(token));
        }
    }

    #[test]
    fn preserves_case_and_punctuation() {
        assert_eq!(format_name("Hud-Lite v2"), Symbol::from("Hud-Lite_v2"));
    }

    #[test]
    fn descriptive_name_keeps_descriptive_input() {
        assert_eq!(descriptive_name("Battle Core"), Symbol::from("Battle Core"));
        assert_eq!(descriptive_name("Battle_Core"), Symbol::from("Battle Core"));
    }
}
