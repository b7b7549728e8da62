//! Scenario parameters.
//!
//! Every field has a default matching the reference run, so an empty (or
//! missing) config file reproduces it exactly.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::fixtures::{Modulus, DEFAULT_COUNT, DEFAULT_QUERY, MAX_COUNT, MODULUS_A, MODULUS_B};
use crate::point::Vector2;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Number of points generated per sequence.
    pub count: u32,
    pub modulus_a: i32,
    pub modulus_b: i32,
    /// Point searched for by Step2.
    pub query: Vector2,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            modulus_a: MODULUS_A,
            modulus_b: MODULUS_B,
            query: DEFAULT_QUERY,
        }
    }
}

impl RunConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RunConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.count > MAX_COUNT {
            return Err(Error::InvalidCount {
                value: self.count,
                max: MAX_COUNT,
            });
        }
        self.modulus_a()?;
        self.modulus_b()?;
        Ok(())
    }

    pub fn modulus_a(&self) -> Result<Modulus> {
        checked_modulus("modulus_a", self.modulus_a)
    }

    pub fn modulus_b(&self) -> Result<Modulus> {
        checked_modulus("modulus_b", self.modulus_b)
    }
}

fn checked_modulus(field: &'static str, value: i32) -> Result<Modulus> {
    Modulus::new(value).ok_or(Error::InvalidModulus { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = RunConfig::default();
        assert_eq!(config.count, 100);
        assert_eq!(config.modulus_a, 50);
        assert_eq!(config.modulus_b, 75);
        assert_eq!(config.query, Vector2::new(1, 2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(RunConfig::from_toml_str("").unwrap(), RunConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = RunConfig::from_toml_str("modulus_b = 30\nquery = { x = 4, y = 8 }").unwrap();
        assert_eq!(config.modulus_b, 30);
        assert_eq!(config.query, Vector2::new(4, 8));
        assert_eq!(config.count, 100);
        assert_eq!(config.modulus_a, 50);
    }

    #[test]
    fn test_rejects_zero_modulus() {
        let err = RunConfig::from_toml_str("modulus_a = 0").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidModulus { field: "modulus_a", value: 0 }
        ));
    }

    #[test]
    fn test_rejects_negative_modulus() {
        let err = RunConfig::from_toml_str("modulus_b = -3").unwrap_err();
        assert!(matches!(err, Error::InvalidModulus { field: "modulus_b", .. }));
    }

    #[test]
    fn test_rejects_oversized_count() {
        let err = RunConfig::from_toml_str("count = 4294967295").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCount { value: 4_294_967_295, max: MAX_COUNT }
        ));

        let err = RunConfig::from_toml_str(&format!("count = {}", MAX_COUNT + 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidCount { .. }));
    }

    #[test]
    fn test_accepts_count_at_limit() {
        let config = RunConfig::from_toml_str(&format!("count = {MAX_COUNT}")).unwrap();
        assert_eq!(config.count, MAX_COUNT);
    }

    #[test]
    fn test_rejects_unknown_fields_and_bad_types() {
        assert!(matches!(
            RunConfig::from_toml_str("modulus = 5"),
            Err(Error::ConfigParse(_))
        ));
        assert!(matches!(
            RunConfig::from_toml_str("count = \"many\""),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "count = 10").unwrap();
        writeln!(file, "modulus_a = 5").unwrap();

        let config = RunConfig::from_file(file.path()).unwrap();
        assert_eq!(config.count, 10);
        assert_eq!(config.modulus_a().unwrap().get(), 5);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            RunConfig::from_file(&path),
            Err(Error::ConfigRead { .. })
        ));
    }
}
