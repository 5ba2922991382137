// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::hash::name_hash;
use super::{ParameterizedType, Type};
use crate::error::TypeError;
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named type without type arguments, e.g. `java.util.Map` or a class that
/// will only exist once generated.
#[derive(Debug, Clone)]
pub struct SimpleType {
    qualified_name: String,
}

impl SimpleType {
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let qualified_name = name.into();
        if qualified_name.trim().is_empty() {
            log::debug!("[SimpleType] rejected empty qualified name");
            return Err(TypeError::invalid("qualified name", "must not be empty"));
        }
        Ok(Self { qualified_name })
    }

    /// Wrap a name that was already validated by another constructor.
    pub(super) fn from_validated(qualified_name: String) -> Self {
        Self { qualified_name }
    }

    pub fn type_name(&self) -> &str {
        &self.qualified_name
    }
}

impl Type for SimpleType {
    fn type_name(&self) -> &str {
        &self.qualified_name
    }

    fn as_parameterized(&self) -> Option<&dyn ParameterizedType> {
        None
    }

    fn structural_eq(&self, other: &dyn Type) -> bool {
        other.as_parameterized().is_none() && other.type_name() == self.qualified_name
    }

    fn structural_hash(&self) -> u32 {
        name_hash(&self.qualified_name)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl PartialEq for SimpleType {
    fn eq(&self, other: &Self) -> bool {
        self.qualified_name == other.qualified_name
    }
}

impl Eq for SimpleType {}

impl PartialEq<dyn Type> for SimpleType {
    fn eq(&self, other: &dyn Type) -> bool {
        self.structural_eq(other)
    }
}

impl Hash for SimpleType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.structural_hash());
    }
}

impl fmt::Display for SimpleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_name() {
        assert!(SimpleType::new("").unwrap_err().is_invalid_argument());
        assert!(SimpleType::new("   ").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_equality_by_name() {
        let a = SimpleType::new("java.lang.String").unwrap();
        let b = SimpleType::new("java.lang.String").unwrap();
        let c = SimpleType::new("java.lang.Object").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.structural_hash(), b.structural_hash());
        assert_eq!(a.to_string(), "java.lang.String");
    }
}
