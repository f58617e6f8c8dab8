// src/config/loader.rs
//! Specification loader for TOML design files
//!
//! Reads a `[filter]` table into a [`FilterSpecification`] and validates it
//! before handing it to the pipeline. Missing fields fall back to the
//! canonical classroom defaults.

use crate::config::FilterSpecification;
use crate::error::DesignError;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a specification file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file does not exist.
    #[error("specification file not found: {0}")]
    FileNotFound(String),

    /// The file is not valid TOML for a specification.
    #[error("specification parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Reading the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The parsed specification violates its structural constraints.
    #[error(transparent)]
    Invalid(#[from] DesignError),
}

#[derive(Debug, Deserialize)]
struct SpecFile {
    #[serde(default)]
    filter: FilterSpecification,
}

/// Load and validate a [`FilterSpecification`] from a TOML file.
pub fn load_specification<P: AsRef<Path>>(path: P) -> Result<FilterSpecification, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let file: SpecFile = toml::from_str(&content)?;
    file.filter.validate()?;
    Ok(file.filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrderSelection;
    use std::io::Write;

    fn write_spec_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_complete_specification() {
        let file = write_spec_file(
            r#"
[filter]
sample_rate_hz = 8000.0
passband_edge_hz = 800.0
stopband_edge_hz = 1200.0
passband_ripple_db = 0.5
stopband_atten_db = 30.0
order = { fixed = 4 }
"#,
        );
        let spec = load_specification(file.path()).unwrap();
        assert_eq!(spec.sample_rate_hz, 8000.0);
        assert_eq!(spec.order, OrderSelection::Fixed(4));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let file = write_spec_file("[filter]\nsample_rate_hz = 20000.0\n");
        let spec = load_specification(file.path()).unwrap();
        assert_eq!(spec.sample_rate_hz, 20_000.0);
        assert_eq!(spec.passband_edge_hz, 1000.0);
        assert_eq!(spec.order, OrderSelection::Auto);
    }

    #[test]
    fn test_empty_file_yields_default_specification() {
        let file = write_spec_file("");
        let spec = load_specification(file.path()).unwrap();
        assert_eq!(spec, FilterSpecification::default());
    }

    #[test]
    fn test_missing_file_is_distinguished_from_io() {
        let err = load_specification("/nonexistent/spec.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_invalid_specification_is_rejected_at_load() {
        let file = write_spec_file("[filter]\nstopband_edge_hz = 500.0\n");
        let err = load_specification(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let file = write_spec_file("[filter\nsample_rate_hz = oops");
        let err = load_specification(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
