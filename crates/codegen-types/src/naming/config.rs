// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Path resolver configuration.
//!
//! # Example YAML
//!
//! ```yaml
//! # resolver.yaml
//! path_separator: "/"
//! name_separator: "."
//! source_extensions: [".java", ".kt"]
//! ```
//!
//! Every key is optional and falls back to [`ResolverConfig::default`].

use serde::Deserialize;

#[cfg(feature = "config-loaders")]
use crate::error::TypeError;
#[cfg(feature = "config-loaders")]
use std::fs;
#[cfg(feature = "config-loaders")]
use std::path::Path;

/// How compilation unit paths map to qualified names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Separator between directories of a unit path.
    pub path_separator: char,
    /// Separator between segments of a qualified name.
    pub name_separator: String,
    /// Suffixes stripped from the unit path; the first match wins.
    pub source_extensions: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            path_separator: '/',
            name_separator: ".".to_string(),
            source_extensions: vec![".java".to_string()],
        }
    }
}

impl ResolverConfig {
    #[must_use]
    pub fn with_path_separator(mut self, separator: char) -> Self {
        self.path_separator = separator;
        self
    }

    #[must_use]
    pub fn with_name_separator(mut self, separator: impl Into<String>) -> Self {
        self.name_separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_source_extensions(mut self, extensions: Vec<String>) -> Self {
        self.source_extensions = extensions;
        self
    }

    /// Load the configuration from a YAML file.
    #[cfg(feature = "config-loaders")]
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, TypeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TypeError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        log::debug!("[ResolverConfig] loading {}", path.display());
        Self::from_yaml_str(&content)
    }

    /// Parse the configuration from YAML text.
    #[cfg(feature = "config-loaders")]
    pub fn from_yaml_str(content: &str) -> Result<Self, TypeError> {
        serde_yaml::from_str(content)
            .map_err(|e| TypeError::Config(format!("failed to parse YAML: {}", e)))
    }
}

#[cfg(all(test, feature = "config-loaders"))]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ResolverConfig::from_yaml_str("name_separator: \"::\"\n").unwrap();
        assert_eq!(config.name_separator, "::");
        assert_eq!(config.path_separator, '/');
        assert_eq!(config.source_extensions, vec![".java".to_string()]);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ResolverConfig::from_yaml_str("source_extensions: 12").unwrap_err();
        assert!(matches!(err, TypeError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "path_separator: \"\\\\\"").unwrap();
        writeln!(file, "source_extensions: [\".cs\"]").unwrap();

        let config = ResolverConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.path_separator, '\\');
        assert_eq!(config.source_extensions, vec![".cs".to_string()]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ResolverConfig::from_yaml_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, TypeError::Config(_)));
    }
}
