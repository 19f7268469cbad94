//! Generator configuration.
//!
//! # TOML Example
//!
//! ```toml
//! [shared]
//! log_level = "debug"
//! service_name = "unc-codegen"
//!
//! [codegen]
//! max_arity = 20
//! ```
//!
//! Both tables are optional; a missing file yields the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use unc_common::config::{ConfigError, ConfigLoader, SharedConfig};
use unc_common::consts::{DEFAULT_CONFIG_FILE, MAX_ARITY};

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodegenConfig {
    /// Logging and identity settings shared with other tools.
    #[serde(default)]
    pub shared: SharedConfig,

    /// Rendering settings.
    #[serde(default)]
    pub codegen: CodegenSection,
}

/// `[codegen]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodegenSection {
    /// Highest arity to render a procedure for.
    #[serde(default = "default_max_arity")]
    pub max_arity: usize,
}

fn default_max_arity() -> usize {
    MAX_ARITY
}

impl Default for CodegenSection {
    fn default() -> Self {
        Self {
            max_arity: default_max_arity(),
        }
    }
}

impl CodegenConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` for an empty service name or a
    /// zero arity ceiling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        if self.codegen.max_arity == 0 {
            return Err(ConfigError::ValidationError(
                "codegen.max_arity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load from `path` when given, otherwise from [`DEFAULT_CONFIG_FILE`] in
    /// the working directory if present, otherwise use defaults.
    ///
    /// An explicitly named file must exist.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)?
                } else {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use unc_common::config::LogLevel;

    #[test]
    fn empty_document_uses_defaults() {
        let config: CodegenConfig = toml::from_str("").unwrap();
        assert_eq!(config.codegen.max_arity, MAX_ARITY);
        assert_eq!(config.shared.log_level, LogLevel::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn explicit_values() {
        let config: CodegenConfig = toml::from_str(
            r#"
            [shared]
            log_level = "trace"
            service_name = "gen"

            [codegen]
            max_arity = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.codegen.max_arity, 8);
        assert_eq!(config.shared.log_level, LogLevel::Trace);
        assert_eq!(config.shared.service_name, "gen");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<CodegenConfig>("[codegen]\ntarget = \"x.rs\"\n").is_err());
    }

    #[test]
    fn zero_arity_fails_validation() {
        let mut config = CodegenConfig::default();
        config.codegen.max_arity = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn resolve_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[codegen]\nmax_arity = 3").unwrap();
        file.flush().unwrap();

        let config = CodegenConfig::resolve(Some(file.path())).unwrap();
        assert_eq!(config.codegen.max_arity, 3);
    }

    #[test]
    fn resolve_missing_explicit_file() {
        let result = CodegenConfig::resolve(Some(Path::new("/nonexistent/codegen.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound)));
    }
}
