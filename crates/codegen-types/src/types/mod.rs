// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type capability traits shared by generated and foreign type models.
//!
//! A code generator has to talk about types that may not exist yet. Rather
//! than forcing every producer onto one concrete struct, types are exposed
//! through the [`Type`] trait and compared structurally: two values are equal
//! when their data matches, regardless of which implementation built them.
//!
//! # Example
//!
//! ```ignore
//! use codegen_types::{parameterized, simple};
//!
//! let list = parameterized("java.util.List", vec![simple("java.lang.String")?])?;
//! assert_eq!(list.type_name(), "java.util.List");
//! ```

pub mod hash;
mod parameterized_type;
mod simple_type;

pub use parameterized_type::ParameterizedTypeDescriptor;
pub use simple_type::SimpleType;

use crate::error::TypeError;
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Shared, immutable handle to any type implementation.
pub type TypeRef = Arc<dyn Type>;

/// Base capability of every type reference.
///
/// Implementations must keep `structural_eq` and `structural_hash` coherent:
/// values that are structurally equal must return the same hash, using the
/// functions in [`hash`].
pub trait Type: fmt::Debug + Send + Sync + 'static {
    /// Fully qualified name, as used for display and identity.
    fn type_name(&self) -> &str;

    /// Parameterized view of this type.
    ///
    /// Every [`ParameterizedType`] implementation must return `Some(self)`.
    /// Equality only recognises the parameterized capability through this
    /// method, so returning `None` makes the value compare as a plain named
    /// type.
    fn as_parameterized(&self) -> Option<&dyn ParameterizedType>;

    /// Structural comparison against any other implementation.
    fn structural_eq(&self, other: &dyn Type) -> bool;

    /// Hash consistent with `structural_eq`.
    fn structural_hash(&self) -> u32;

    /// Downcast hook for renderers that need the concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// Capability of a generic type reference together with its arguments.
///
/// Implementors must return `Some(self)` from [`Type::as_parameterized`] and
/// hash with [`hash::parameterized_hash`].
pub trait ParameterizedType: Type {
    /// Copy of the type arguments, in declaration order.
    fn actual_type_arguments(&self) -> Vec<TypeRef>;

    /// The same type with all arguments stripped.
    fn raw_type(&self) -> TypeRef;

    /// Enclosing generic type, for implementations that model it.
    fn owner_type(&self) -> Result<TypeRef, TypeError>;
}

impl PartialEq for dyn Type {
    fn eq(&self, other: &dyn Type) -> bool {
        self.structural_eq(other)
    }
}

impl Eq for dyn Type {}

impl Hash for dyn Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.structural_hash());
    }
}

impl fmt::Display for dyn Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Shorthand for a shared [`SimpleType`].
pub fn simple(name: impl Into<String>) -> Result<TypeRef, TypeError> {
    Ok(Arc::new(SimpleType::new(name)?))
}

/// Shorthand for a shared [`ParameterizedTypeDescriptor`].
pub fn parameterized<I>(name: impl Into<String>, arguments: I) -> Result<TypeRef, TypeError>
where
    I: IntoIterator<Item = TypeRef>,
{
    Ok(Arc::new(ParameterizedTypeDescriptor::new(name, arguments)?))
}

/// Element-wise structural comparison of two argument lists.
pub(crate) fn arguments_eq(left: &[TypeRef], right: &[TypeRef]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(l, r)| l.structural_eq(&**r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_trait_object_equality() {
        let a = parameterized("java.util.List", vec![simple("java.lang.String").unwrap()]).unwrap();
        let b = parameterized("java.util.List", vec![simple("java.lang.String").unwrap()]).unwrap();
        let c = parameterized("java.util.List", vec![simple("java.lang.Long").unwrap()]).unwrap();

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(*a, *b);
        assert_ne!(*a, *c);
    }

    #[test]
    fn test_simple_and_parameterized_differ() {
        let raw = simple("java.util.List").unwrap();
        let generic = parameterized("java.util.List", Vec::new()).unwrap();

        assert_ne!(*raw, *generic);
        assert_ne!(*generic, *raw);
    }

    #[derive(Debug)]
    struct Imported {
        name: &'static str,
    }

    impl Type for Imported {
        fn type_name(&self) -> &str {
            self.name
        }

        fn as_parameterized(&self) -> Option<&dyn ParameterizedType> {
            Some(self)
        }

        fn structural_eq(&self, other: &dyn Type) -> bool {
            other.as_parameterized().is_some_and(|other| {
                other.type_name() == self.name && other.actual_type_arguments().is_empty()
            })
        }

        fn structural_hash(&self) -> u32 {
            hash::parameterized_hash(self.name, &[])
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    impl ParameterizedType for Imported {
        fn actual_type_arguments(&self) -> Vec<TypeRef> {
            Vec::new()
        }

        fn raw_type(&self) -> TypeRef {
            Arc::new(SimpleType::from_validated(self.name.to_string()))
        }

        fn owner_type(&self) -> Result<TypeRef, TypeError> {
            Err(TypeError::UnsupportedOperation {
                operation: "owner_type",
                reason: "not modeled",
            })
        }
    }

    #[test]
    fn test_foreign_parameterized_without_arguments() {
        let imported: TypeRef = Arc::new(Imported { name: "a.B" });
        let descriptor = parameterized("a.B", Vec::new()).unwrap();
        let named = simple("a.B").unwrap();

        assert_eq!(*imported, *descriptor);
        assert_eq!(*descriptor, *imported);
        assert_eq!(imported.structural_hash(), descriptor.structural_hash());
        assert_ne!(*named, *imported);
        assert_ne!(*imported, *named);
    }

    #[test]
    fn test_hash_set_deduplicates_structurally() {
        let mut set: HashSet<TypeRef> = HashSet::new();
        for _ in 0..3 {
            set.insert(parameterized("a.B", vec![simple("a.C").unwrap()]).unwrap());
        }
        set.insert(simple("a.B").unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_trait_object() {
        let map = parameterized(
            "java.util.Map",
            vec![simple("java.lang.String").unwrap(), simple("java.lang.Integer").unwrap()],
        )
        .unwrap();
        assert_eq!(map.to_string(), "java.util.Map");
    }
}
