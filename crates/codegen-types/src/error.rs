// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error type shared by descriptors, name resolution and config loading.

use thiserror::Error;

/// Failure modes of the type model.
///
/// All variants are programmer-usage errors: nothing here is transient, so
/// callers should fix their input rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Required construction data was absent or empty.
    #[error("invalid {what}: {reason}")]
    InvalidArgument {
        /// Which input was rejected (e.g. "qualified name").
        what: &'static str,
        /// Human readable cause.
        reason: String,
    },

    /// The capability is not modeled by this implementation.
    #[error("{operation} is not supported: {reason}")]
    UnsupportedOperation {
        /// Name of the operation that was invoked.
        operation: &'static str,
        /// Why the capability is missing.
        reason: &'static str,
    },

    /// Resolver configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl TypeError {
    pub(crate) fn invalid(what: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            what,
            reason: reason.into(),
        }
    }

    /// True for [`TypeError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// True for [`TypeError::UnsupportedOperation`].
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = TypeError::invalid("qualified name", "must not be empty");
        assert_eq!(err.to_string(), "invalid qualified name: must not be empty");
        assert!(err.is_invalid_argument());
        assert!(!err.is_unsupported());

        let err = TypeError::UnsupportedOperation {
            operation: "owner_type",
            reason: "owner types are not modeled",
        };
        assert_eq!(
            err.to_string(),
            "owner_type is not supported: owner types are not modeled"
        );
        assert!(err.is_unsupported());
    }
}
