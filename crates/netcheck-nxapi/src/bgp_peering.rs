// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! BGP peering service-check module metadata.
//!
//! Covers BGP router identity and the established state of each declared
//! peering session.

use netcheck_core::ServiceModule;

/// Fully-qualified module id referenced from `services` lists.
pub const MODULE_ID: &str = "netcam_nxapi.bgp_peering";

/// Check names exposed by this module.
pub const CHECKS: &[&str] = &["bgp_peering", "bgp_routers"];

/// Build the module record for the package's service table.
pub fn module() -> ServiceModule {
    ServiceModule::new(MODULE_ID, "BGP peering", CHECKS)
}
