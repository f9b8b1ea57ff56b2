// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-entry plugin loading: parse, validate, register.
//!
//! Failures are isolated per entry. A malformed or unresolvable entry is
//! recorded in the report and the loop moves on; it never aborts loading
//! and never leaves a partial registration behind, because registration is
//! the last step and is all-or-nothing per descriptor.

use netcheck_core::LoadError;
use tracing::{info, warn};

use crate::descriptor::PluginDescriptor;
use crate::env::EnvSnapshot;
use crate::index::PackageIndex;
use crate::registry::{PluginRegistry, RegistrationHandle};
use crate::validate::ValidatedDescriptor;

/// Outcome of one load pass over a configuration's plugin entries.
///
/// Every input entry lands in exactly one of the two lists.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Handles for entries that registered, in input order.
    pub loaded: Vec<RegistrationHandle>,
    /// Entries that failed at some stage, in input order.
    pub failed: Vec<LoadFailure>,
}

impl LoadReport {
    /// True when every entry registered.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// One plugin entry that failed to load.
#[derive(Debug)]
pub struct LoadFailure {
    /// Zero-based position of the entry in the `[[plugins]]` array.
    pub entry: usize,
    /// Plugin name, when parsing got far enough to produce one.
    pub name: Option<String>,
    /// The stage-typed failure.
    pub error: LoadError,
}

/// Load every plugin fragment into the registry.
///
/// Entries are processed in input order against a single package index and
/// environment snapshot, so one pass sees one consistent world.
pub fn load_all(
    fragments: &[toml::Value],
    index: &PackageIndex,
    env: &EnvSnapshot,
    registry: &mut PluginRegistry,
) -> LoadReport {
    let mut report = LoadReport::default();

    for (entry, fragment) in fragments.iter().enumerate() {
        match load_one(fragment, index, env, registry) {
            Ok(handle) => report.loaded.push(handle),
            Err((name, error)) => {
                warn!(
                    entry,
                    plugin = name.as_deref().unwrap_or("<unparsed>"),
                    %error,
                    "skipping plugin entry"
                );
                report.failed.push(LoadFailure { entry, name, error });
            }
        }
    }

    info!(
        loaded = report.loaded.len(),
        failed = report.failed.len(),
        "plugin load complete"
    );
    report
}

fn load_one(
    fragment: &toml::Value,
    index: &PackageIndex,
    env: &EnvSnapshot,
    registry: &mut PluginRegistry,
) -> Result<RegistrationHandle, (Option<String>, LoadError)> {
    let descriptor = PluginDescriptor::parse(fragment).map_err(|e| (None, e.into()))?;
    let name = descriptor.name().to_string();

    let validated = ValidatedDescriptor::validate(descriptor, index, env)
        .map_err(|e| (Some(name.clone()), e.into()))?;

    registry
        .register(validated)
        .map_err(|e| (Some(name), e.into()))
}
