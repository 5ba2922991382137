// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Structural hash functions for the type capability.
//!
//! Every implementation of [`Type`](super::Type) must derive its
//! `structural_hash` from these functions, otherwise two values that compare
//! equal across implementations would land in different hash buckets.
//!
//! - named types hash as [`name_hash`] of their qualified name
//! - parameterized types hash as [`parameterized_hash`], and must also return
//!   `Some(self)` from `Type::as_parameterized` so that equality treats them
//!   as parameterized

use super::TypeRef;

const FNV_PRIME: u32 = 16_777_619;
const FNV_OFFSET: u32 = 2_166_136_261;

/// Initial value of [`parameterized_hash`].
pub const PARAMETERIZED_SEED: u32 = 5;
const PARAMETERIZED_MULTIPLIER: u32 = 29;

const ARGUMENTS_SEED: u32 = 1;
const ARGUMENTS_MULTIPLIER: u32 = 31;

/// 32-bit FNV-1a hash of a qualified type name.
///
/// Deterministic across runs and platforms.
#[must_use]
pub fn name_hash(name: &str) -> u32 {
    let mut hash = FNV_OFFSET;
    for byte in name.as_bytes() {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Order-sensitive hash of an argument list.
///
/// Recurses through nested parameterized arguments via their own
/// `structural_hash`. The empty list hashes to 1.
#[must_use]
pub fn arguments_hash(arguments: &[TypeRef]) -> u32 {
    arguments.iter().fold(ARGUMENTS_SEED, |hash, argument| {
        hash.wrapping_mul(ARGUMENTS_MULTIPLIER)
            .wrapping_add(argument.structural_hash())
    })
}

/// Hash of a parameterized type: `(5 * 29 + name) * 29 + arguments`, wrapping.
#[must_use]
pub fn parameterized_hash(name: &str, arguments: &[TypeRef]) -> u32 {
    let mut hash = PARAMETERIZED_SEED;
    hash = hash
        .wrapping_mul(PARAMETERIZED_MULTIPLIER)
        .wrapping_add(name_hash(name));
    hash.wrapping_mul(PARAMETERIZED_MULTIPLIER)
        .wrapping_add(arguments_hash(arguments))
}
