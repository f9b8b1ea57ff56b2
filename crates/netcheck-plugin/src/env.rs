// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-environment snapshot and resolved credential values.
//!
//! Validation reads environment variables only through an [`EnvSnapshot`],
//! never `std::env` directly. Tests and reload paths construct snapshots
//! explicitly, so the values the loader sees are always the caller's.

use std::collections::BTreeMap;

use secrecy::SecretString;

/// Immutable name-to-value view of the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped; a
    /// credential mapping can never resolve to one anyway.
    pub fn capture() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Build a snapshot from explicit pairs. Used by tests and embedding
    /// hosts that manage their own environment.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self { vars }
    }

    /// Value of `name`, if the variable is set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Number of captured variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True when the snapshot holds no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Credential values resolved at validation time, keyed by the logical
/// field name from the descriptor's credential mapping.
///
/// Values are held as [`SecretString`] so debug formatting and structured
/// logs stay redacted. Device drivers expose them at the point of use.
#[derive(Debug, Default)]
pub struct Credentials {
    values: BTreeMap<String, SecretString>,
}

impl Credentials {
    /// Resolved secret for a credential field, e.g. `username`.
    pub fn get(&self, field: &str) -> Option<&SecretString> {
        self.values.get(field)
    }

    /// Credential field names, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of resolved credential fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no credentials were mapped.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, SecretString)> for Credentials {
    fn from_iter<I: IntoIterator<Item = (String, SecretString)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
