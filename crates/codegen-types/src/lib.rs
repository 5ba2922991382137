// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Structural type descriptors for source code generators.
//!
//! Generators need to reference types that may not be compiled yet, and mix
//! them with types that come from elsewhere. This crate provides:
//!
//! - [`Type`] / [`ParameterizedType`]: the capability traits, compared
//!   structurally across implementations
//! - [`ParameterizedTypeDescriptor`]: an immutable `Name<Arg, ...>` value
//! - [`SimpleType`]: a named type without arguments (the raw view)
//! - [`naming`]: qualified names for declarations not generated yet
//!
//! # Quick Start
//!
//! ```ignore
//! use codegen_types::{simple, ParameterizedTypeDescriptor};
//!
//! let map = ParameterizedTypeDescriptor::new(
//!     "java.util.Map",
//!     vec![simple("java.lang.String")?, simple("java.lang.Integer")?],
//! )?;
//! assert_eq!(map.to_string(), "java.util.Map");
//! assert_eq!(map.raw_type().type_name(), "java.util.Map");
//! ```

pub mod error;
pub mod naming;
pub mod types;

pub use error::TypeError;
pub use naming::{CompilationUnit, NameResolver, PathResolver, ResolverConfig};
pub use types::{
    parameterized, simple, ParameterizedType, ParameterizedTypeDescriptor, SimpleType, Type,
    TypeRef,
};
