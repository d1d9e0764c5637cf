//! Environment configuration.
//!
//! Defaults reproduce the conventions existing scripts rely on: discovery
//! keys prefixed with `SES_`, `[Solistra, Enelvon]` as default authors and
//! a `Core` entry at version `1.0`.

use crate::logging::default_log_level;
use crate::naming::Symbol;
use crate::script::ScriptVersion;
use serde::Deserialize;

/// Discovery key prefix for the import table.
pub const DEFAULT_IMPORT_PREFIX: &str = "SES_";
/// Name of the entry every environment is seeded with.
pub const CORE_SCRIPT_NAME: &str = "Core";
/// Authors assumed when a descriptor declares none.
pub const DEFAULT_AUTHORS: &[&str] = &["Solistra", "Enelvon"];

/// Returns `DEFAULT_AUTHORS` as owned symbols.
pub fn default_authors() -> Vec<Symbol> {
    DEFAULT_AUTHORS.iter().map(|value| Symbol::from(*value)).collect()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    pub import_prefix: String,
    pub default_authors: Vec<Symbol>,
    pub core_version: ScriptVersion,
    pub log_level: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            import_prefix: DEFAULT_IMPORT_PREFIX.to_string(),
            default_authors: default_authors(),
            core_version: ScriptVersion::default(),
            log_level: default_log_level().to_string(),
        }
    }
}

impl CoreConfig {
    /// Parses a JSON document; missing fields keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.import_prefix.trim().is_empty() {
            return Err(ConfigError::EmptyImportPrefix);
        }
        if self.default_authors.is_empty() {
            return Err(ConfigError::MissingDefaultAuthors);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    EmptyImportPrefix,
    MissingDefaultAuthors,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid core config: {message}"),
            Self::EmptyImportPrefix => write!(f, "import_prefix must not be empty"),
            Self::MissingDefaultAuthors => write!(f, "default_authors must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, DEFAULT_IMPORT_PREFIX};
    use crate::script::ScriptVersion;

    #[test]
    fn empty_document_yields_defaults() {
        let config = CoreConfig::from_json_str("{}").expect("empty config should parse");
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.import_prefix, DEFAULT_IMPORT_PREFIX);
        assert_eq!(config.default_authors.len(), 2);
    }

    #[test]
    fn overrides_selected_fields() {
        let config = CoreConfig::from_json_str(r#"{"import_prefix":"MOD_","core_version":1.5}"#)
            .expect("partial config should parse");
        assert_eq!(config.import_prefix, "MOD_");
        assert_eq!(config.core_version, ScriptVersion::new(1.5));
    }

    #[test]
    fn rejects_unknown_fields_and_blank_prefix() {
        let err = CoreConfig::from_json_str(r#"{"prefix":"X"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = CoreConfig::from_json_str(r#"{"import_prefix":"  "}"#).unwrap_err();
        assert_eq!(err, ConfigError::EmptyImportPrefix);

        let err = CoreConfig::from_json_str(r#"{"default_authors":[]}"#).unwrap_err();
        assert_eq!(err, ConfigError::MissingDefaultAuthors);
    }
}
