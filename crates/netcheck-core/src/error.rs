// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the plugin descriptor pipeline.
//!
//! The three kinds mirror the three loading stages: shape problems surface
//! at parse, unresolvable references at validation, and name collisions at
//! registration. [`LoadError`] sums them so per-entry outcomes stay typed.

use thiserror::Error;

/// Malformed plugin-entry shape, reported by descriptor parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The configuration fragment is not a TOML table.
    #[error("plugin entry must be a table")]
    NotATable,

    /// A required field is absent.
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    /// A field holds a value of the wrong type. `field` is a path such as
    /// `supports[1]` or `credentials.username` when the offender is nested.
    #[error("field `{field}` must be {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    /// A string value is present but empty.
    #[error("field `{field}` must not be empty")]
    EmptyField { field: String },

    /// `supports` lists no device-OS tags at all.
    #[error("`supports` must list at least one device-OS tag")]
    NoSupportTags,

    /// The same service module is listed more than once.
    #[error("service module `{service}` is listed more than once")]
    DuplicateService { service: String },

    /// A key outside the plugin-entry schema.
    #[error(
        "unknown field `{field}` (expected one of: name, supports, package, services, credentials)"
    )]
    UnknownField { field: String },
}

/// Unresolvable reference, reported by descriptor validation.
///
/// Validation fails fast: the error names the first offending item, never
/// an aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `package` does not name an entry in the package index.
    #[error("package `{package}` is not a registered driver package")]
    UnknownPackage { package: String },

    /// A service id does not sit under the descriptor's own package.
    #[error("service `{service}` does not belong to package `{package}`")]
    ServiceOutsidePackage { service: String, package: String },

    /// A service id sits under the package but names no exposed module.
    #[error("package `{package}` exposes no service module `{service}`")]
    UnknownService { service: String, package: String },

    /// A mapped environment variable is absent from the snapshot.
    #[error("credential `{field}`: environment variable `{var}` is not set")]
    MissingEnvVar { field: String, var: String },

    /// A mapped environment variable is set to an empty value.
    #[error("credential `{field}`: environment variable `{var}` is empty")]
    EmptyEnvVar { field: String, var: String },
}

/// Name collision during registration. The registry keeps the original
/// registration untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("a plugin named `{name}` is already registered")]
pub struct DuplicateNameError {
    pub name: String,
}

/// Failure of a single plugin entry at any stage of parse, validate, or
/// register. One entry failing never affects the others.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validate(#[from] ValidationError),

    #[error(transparent)]
    Duplicate(#[from] DuplicateNameError),
}
