// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in Cisco NX-OS driver package.
//!
//! Carries the package identity and service-module metadata the descriptor
//! pipeline validates against. Device transport (the NXAPI wire protocol)
//! and the check executors themselves live with the host's check runner,
//! not in this crate.

pub mod bgp_peering;
pub mod topology;

use netcheck_core::{DriverPackage, ServiceModule};
use std::sync::Arc;

/// Package identifier plugin entries reference via `package = "..."`.
pub const PACKAGE_ID: &str = "netcam_nxapi";

/// The NX-OS driver package.
pub struct NxapiPackage {
    modules: Vec<ServiceModule>,
}

impl NxapiPackage {
    pub fn new() -> Self {
        Self {
            modules: vec![topology::module(), bgp_peering::module()],
        }
    }
}

impl Default for NxapiPackage {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverPackage for NxapiPackage {
    fn id(&self) -> &str {
        PACKAGE_ID
    }

    fn description(&self) -> &str {
        "Cisco NX-OS NXAPI devices"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn service_modules(&self) -> &[ServiceModule] {
        &self.modules
    }
}

/// The package as an index-ready handle.
pub fn package() -> Arc<dyn DriverPackage> {
    Arc::new(NxapiPackage::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_resolves_its_own_modules() {
        let package = NxapiPackage::new();
        assert_eq!(package.id(), "netcam_nxapi");
        assert!(package.resolve_service("netcam_nxapi.topology").is_some());
        assert!(package.resolve_service("netcam_nxapi.bgp_peering").is_some());
        assert!(package.resolve_service("netcam_nxapi.vlans").is_none());
    }

    #[test]
    fn module_ids_sit_under_the_package_id() {
        let package = NxapiPackage::new();
        for module in package.service_modules() {
            let prefix = format!("{PACKAGE_ID}.");
            assert!(
                module.id.starts_with(&prefix),
                "module {} escapes the package namespace",
                module.id
            );
        }
    }

    #[test]
    fn description_names_the_platform() {
        let package = NxapiPackage::new();
        assert_eq!(package.description(), "Cisco NX-OS NXAPI devices");
        assert_eq!(package.version(), semver::Version::new(0, 1, 0));
    }
}
