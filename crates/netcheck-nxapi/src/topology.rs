// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Topology service-check module metadata.
//!
//! Covers the physical and addressing design of a device: identity,
//! interface state, optics, cabling against the declared topology, and
//! interface IP addressing.

use netcheck_core::ServiceModule;

/// Fully-qualified module id referenced from `services` lists.
pub const MODULE_ID: &str = "netcam_nxapi.topology";

/// Check names exposed by this module.
pub const CHECKS: &[&str] = &[
    "device_info",
    "interfaces",
    "transceivers",
    "cabling",
    "ipaddrs",
];

/// Build the module record for the package's service table.
pub fn module() -> ServiceModule {
    ServiceModule::new(MODULE_ID, "Topology", CHECKS)
}
