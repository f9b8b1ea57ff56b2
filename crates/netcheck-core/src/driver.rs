// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Driver-package capability contract.
//!
//! In the dynamic-language host this crate descends from, `package` and
//! `services` named importable modules resolved by reflection at load time.
//! Statically compiled drivers cannot be imported by string, so each one
//! implements [`DriverPackage`] and is entered into a package index the
//! validator consults instead.

use serde::Serialize;

/// Metadata for one service-check module exposed by a driver package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceModule {
    /// Fully-qualified module identifier, e.g. `netcam_nxapi.topology`.
    /// Always prefixed by the owning package id.
    pub id: String,
    /// Short human-readable title for host listings.
    pub title: String,
    /// Names of the device-state checks the module covers. Listing
    /// metadata only; the executors stay inside the driver package.
    pub checks: Vec<String>,
}

impl ServiceModule {
    pub fn new(id: impl Into<String>, title: impl Into<String>, checks: &[&str]) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            checks: checks.iter().map(|check| (*check).to_string()).collect(),
        }
    }
}

/// Capability trait implemented by every compiled-in device driver package.
///
/// Implementations carry identity and service metadata only. Descriptor
/// state (name, supports tags, credentials) lives in the host registry,
/// never in the package, so one package instance can back any number of
/// registered plugins.
pub trait DriverPackage: Send + Sync + 'static {
    /// Package identifier matched against the `package` field of a plugin
    /// entry, e.g. `netcam_nxapi`.
    fn id(&self) -> &str;

    /// One-line description shown in the host's plugin listing.
    fn description(&self) -> &str;

    /// Version of the driver package.
    fn version(&self) -> semver::Version;

    /// Service-check modules this package exposes.
    fn service_modules(&self) -> &[ServiceModule];

    /// Look up an exposed module by fully-qualified id.
    fn resolve_service(&self, id: &str) -> Option<&ServiceModule> {
        self.service_modules().iter().find(|module| module.id == id)
    }
}
