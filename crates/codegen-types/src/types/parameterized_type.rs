// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Parameterized type descriptor for generated and forward-referenced types.
//!
//! `ParameterizedTypeDescriptor` pairs a qualified name with an ordered list
//! of type arguments, e.g. `java.util.Map<java.lang.String, com.acme.User>`,
//! without requiring the named type to exist. Equality and hashing only look
//! at that data, so descriptors mix freely with any other
//! [`ParameterizedType`] implementation.
//!
//! Owner types (`Outer<T>.Inner`) are not modeled: [`owner_type`] always
//! returns [`TypeError::UnsupportedOperation`].
//!
//! The number of arguments is never checked against the declared generic
//! parameters of the named type.
//!
//! [`owner_type`]: ParameterizedTypeDescriptor::owner_type

use super::hash::parameterized_hash;
use super::{arguments_eq, ParameterizedType, SimpleType, Type, TypeRef};
use crate::error::TypeError;
use crate::naming::{CompilationUnit, NameResolver};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Immutable generic type reference: qualified name plus type arguments.
#[derive(Debug, Clone)]
pub struct ParameterizedTypeDescriptor {
    qualified_name: String,
    arguments: Vec<TypeRef>,
}

impl ParameterizedTypeDescriptor {
    /// Descriptor for an explicit qualified name.
    ///
    /// The name is used verbatim, so it may point at a type that has not been
    /// generated yet.
    pub fn new<I>(name: impl Into<String>, arguments: I) -> Result<Self, TypeError>
    where
        I: IntoIterator<Item = TypeRef>,
    {
        Self::build(name.into(), arguments.into_iter().collect())
    }

    /// Descriptor named after the native Rust type `T`.
    ///
    /// The name is the canonical path reported by [`std::any::type_name`],
    /// with a trailing generic argument list of `T` itself dropped, so
    /// `from_native::<Vec<u8>>` is named `alloc::vec::Vec`. Only named path
    /// types qualify: tuples, references, pointers, slices, arrays, trait
    /// objects and function pointers are rejected with `InvalidArgument`.
    pub fn from_native<T, I>(arguments: I) -> Result<Self, TypeError>
    where
        T: ?Sized + 'static,
        I: IntoIterator<Item = TypeRef>,
    {
        Self::build(native_name::<T>()?.to_string(), arguments.into_iter().collect())
    }

    /// Descriptor for a declaration that will be generated into `unit`.
    ///
    /// The qualified name comes from `resolver` and is accepted as is.
    pub fn from_declaration<R, I>(
        resolver: &R,
        unit: &CompilationUnit,
        declaration: &str,
        arguments: I,
    ) -> Result<Self, TypeError>
    where
        R: NameResolver + ?Sized,
        I: IntoIterator<Item = TypeRef>,
    {
        let name = resolver.resolve(unit, declaration)?;
        Self::build(name, arguments.into_iter().collect())
    }

    fn build(qualified_name: String, arguments: Vec<TypeRef>) -> Result<Self, TypeError> {
        if qualified_name.trim().is_empty() {
            log::debug!("[ParameterizedTypeDescriptor] rejected empty qualified name");
            return Err(TypeError::invalid("qualified name", "must not be empty"));
        }
        if let Some(index) = arguments
            .iter()
            .position(|argument| argument.type_name().trim().is_empty())
        {
            log::debug!(
                "[ParameterizedTypeDescriptor] rejected unnamed argument {} of {}",
                index,
                qualified_name
            );
            return Err(TypeError::invalid(
                "type argument",
                format!("argument {index} of {qualified_name} has no name"),
            ));
        }

        log::trace!(
            "[ParameterizedTypeDescriptor] created {} with {} argument(s)",
            qualified_name,
            arguments.len()
        );
        Ok(Self {
            qualified_name,
            arguments,
        })
    }

    /// Copy of the type arguments. Changing the returned vector does not
    /// affect the descriptor.
    pub fn type_arguments(&self) -> Vec<TypeRef> {
        self.arguments.clone()
    }

    /// Borrowed view of the type arguments.
    pub fn arguments(&self) -> &[TypeRef] {
        &self.arguments
    }

    /// The named type without arguments. Built on every call.
    pub fn raw_type(&self) -> SimpleType {
        SimpleType::from_validated(self.qualified_name.clone())
    }

    /// Always fails: owner types are not modeled.
    pub fn owner_type(&self) -> Result<TypeRef, TypeError> {
        Err(TypeError::UnsupportedOperation {
            operation: "owner_type",
            reason: "owner types of parameterized types are not modeled",
        })
    }

    pub fn type_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn structural_hash(&self) -> u32 {
        parameterized_hash(&self.qualified_name, &self.arguments)
    }
}

/// Canonical path of `T` without its own generic arguments.
fn native_name<T: ?Sized + 'static>() -> Result<&'static str, TypeError> {
    path_of(std::any::type_name::<T>())
}

fn path_of(full: &str) -> Result<&str, TypeError> {
    let path = match full.find('<') {
        Some(start) if full.ends_with('>') => &full[..start],
        Some(_) => "",
        None => full,
    };
    let is_path = !path.is_empty()
        && !path.starts_with(':')
        && path
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == ':');
    if !is_path {
        log::debug!("[ParameterizedTypeDescriptor] rejected native type {}", full);
        return Err(TypeError::invalid(
            "native type",
            format!("{full} is not a named path type"),
        ));
    }
    Ok(path)
}

impl Type for ParameterizedTypeDescriptor {
    fn type_name(&self) -> &str {
        &self.qualified_name
    }

    fn as_parameterized(&self) -> Option<&dyn ParameterizedType> {
        Some(self)
    }

    fn structural_eq(&self, other: &dyn Type) -> bool {
        // Same concrete type: compare in place without copying arguments.
        if let Some(other) = other.as_any().downcast_ref::<Self>() {
            return self.qualified_name == other.qualified_name
                && arguments_eq(&self.arguments, &other.arguments);
        }
        match other.as_parameterized() {
            Some(other) => {
                other.type_name() == self.qualified_name
                    && arguments_eq(&self.arguments, &other.actual_type_arguments())
            }
            None => false,
        }
    }

    fn structural_hash(&self) -> u32 {
        parameterized_hash(&self.qualified_name, &self.arguments)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ParameterizedType for ParameterizedTypeDescriptor {
    fn actual_type_arguments(&self) -> Vec<TypeRef> {
        self.type_arguments()
    }

    fn raw_type(&self) -> TypeRef {
        Arc::new(ParameterizedTypeDescriptor::raw_type(self))
    }

    fn owner_type(&self) -> Result<TypeRef, TypeError> {
        ParameterizedTypeDescriptor::owner_type(self)
    }
}

impl PartialEq for ParameterizedTypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.qualified_name == other.qualified_name
            && arguments_eq(&self.arguments, &other.arguments)
    }
}

impl Eq for ParameterizedTypeDescriptor {}

impl PartialEq<dyn Type> for ParameterizedTypeDescriptor {
    fn eq(&self, other: &dyn Type) -> bool {
        self.structural_eq(other)
    }
}

impl Hash for ParameterizedTypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(ParameterizedTypeDescriptor::structural_hash(self));
    }
}

impl fmt::Display for ParameterizedTypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name)
    }
}
