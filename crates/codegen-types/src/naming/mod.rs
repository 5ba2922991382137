// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Qualified names for declarations that have not been generated yet.
//!
//! A generated declaration is identified by the compilation unit it will be
//! written to and its own name. A [`NameResolver`] turns that pair into the
//! qualified name used by type descriptors.
//!
//! # Example
//!
//! ```ignore
//! use codegen_types::naming::{CompilationUnit, NameResolver, PathResolver};
//!
//! let unit = CompilationUnit::new("com/example/Foo.java")?;
//! let name = PathResolver::default().resolve(&unit, "Bar")?;
//! assert_eq!(name, "com.example.Bar");
//! ```

pub mod config;

pub use config::ResolverConfig;

use crate::error::TypeError;

/// A source file that generated declarations will be written to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompilationUnit {
    path: String,
}

impl CompilationUnit {
    /// Unit at `path`, relative to the source root (e.g. `com/example/Foo.java`).
    pub fn new(path: impl Into<String>) -> Result<Self, TypeError> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(TypeError::invalid("compilation unit", "path must not be empty"));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Computes the qualified name of a declaration inside a compilation unit.
pub trait NameResolver {
    fn resolve(&self, unit: &CompilationUnit, declaration: &str) -> Result<String, TypeError>;
}

impl<F> NameResolver for F
where
    F: Fn(&CompilationUnit, &str) -> Result<String, TypeError>,
{
    fn resolve(&self, unit: &CompilationUnit, declaration: &str) -> Result<String, TypeError> {
        self(unit, declaration)
    }
}

/// Resolver deriving the package from the directories of the unit path.
///
/// `com/example/Foo.java` + `Bar` resolves to `com.example.Bar`; a unit at
/// the source root resolves to the bare declaration name.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    config: ResolverConfig,
}

impl PathResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Package segments of `path`: its directories, without the file stem.
    fn package_segments<'a>(&self, path: &'a str) -> Vec<&'a str> {
        let stem = self
            .config
            .source_extensions
            .iter()
            .find_map(|ext| path.strip_suffix(ext.as_str()))
            .unwrap_or(path);

        let mut segments: Vec<&str> = stem
            .split(self.config.path_separator)
            .filter(|segment| !segment.is_empty())
            .collect();
        segments.pop();
        segments
    }
}

impl NameResolver for PathResolver {
    fn resolve(&self, unit: &CompilationUnit, declaration: &str) -> Result<String, TypeError> {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            log::debug!("[PathResolver] empty declaration name in {}", unit.path());
            return Err(TypeError::invalid("declaration name", "must not be empty"));
        }

        let mut segments = self.package_segments(unit.path());
        segments.push(declaration);
        let name = segments.join(self.config.name_separator.as_str());

        log::trace!(
            "[PathResolver] {} :: {} -> {}",
            unit.path(),
            declaration,
            name
        );
        Ok(name)
    }
}
