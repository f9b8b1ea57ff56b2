// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host-owned plugin registry.
//!
//! The `PluginRegistry` stores `RegisteredPlugin` records keyed by plugin
//! name. The host startup path owns the registry value; all mutation goes
//! through `&mut self`, so single-writer registration is enforced by the
//! borrow checker rather than by a lock or a process-global.

use std::collections::HashMap;
use std::sync::Arc;

use netcheck_core::{DriverPackage, DuplicateNameError};
use serde::Serialize;
use tracing::info;

use crate::descriptor::PluginDescriptor;
use crate::env::Credentials;
use crate::validate::ValidatedDescriptor;

/// A single entry in the plugin registry: the normalized descriptor plus
/// the package handle and credentials bound at validation time.
pub struct RegisteredPlugin {
    descriptor: PluginDescriptor,
    package: Arc<dyn DriverPackage>,
    credentials: Credentials,
}

impl RegisteredPlugin {
    /// Plugin name, the registry key.
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// The normalized descriptor this registration was made from.
    pub fn descriptor(&self) -> &PluginDescriptor {
        &self.descriptor
    }

    /// The bound driver package.
    pub fn package(&self) -> &dyn DriverPackage {
        self.package.as_ref()
    }

    /// Credentials resolved when the descriptor was validated.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Whether this plugin claims the given device-OS tag.
    pub fn supports_os(&self, os_name: &str) -> bool {
        self.descriptor.supports_os(os_name)
    }

    /// Listing row for this registration.
    pub fn row(&self) -> PluginRow {
        PluginRow {
            name: self.descriptor.name().to_string(),
            description: self.package.description().to_string(),
            package: self.descriptor.package().to_string(),
            supports: self.descriptor.supports().to_vec(),
        }
    }
}

impl std::fmt::Debug for RegisteredPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredPlugin")
            .field("descriptor", &self.descriptor)
            .field("package", &self.package.id())
            .field("credentials", &self.credentials.len())
            .finish()
    }
}

/// One row of the host's plugin listing. Rendering (table layout, JSON,
/// whatever the host prefers) is the host's concern; this is the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginRow {
    pub name: String,
    pub description: String,
    pub package: String,
    pub supports: Vec<String>,
}

/// Proof of a completed registration, naming the registered plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationHandle {
    name: String,
}

impl RegistrationHandle {
    /// Name the plugin was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Registry of loaded driver plugins, keyed by plugin name.
///
/// Registration order is remembered: listings and `driver_for` lookups walk
/// entries in the order they were registered.
#[derive(Default)]
pub struct PluginRegistry {
    entries: HashMap<String, RegisteredPlugin>,
    order: Vec<String>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a validated descriptor.
    ///
    /// Rejects a name collision without touching the existing entry; the
    /// first registration under a name always wins.
    pub fn register(
        &mut self,
        validated: ValidatedDescriptor,
    ) -> Result<RegistrationHandle, DuplicateNameError> {
        let name = validated.descriptor().name().to_string();
        if self.entries.contains_key(&name) {
            return Err(DuplicateNameError { name });
        }

        let (descriptor, package, credentials) = validated.into_parts();
        info!(plugin = %name, package = %descriptor.package(), "registered driver plugin");

        self.order.push(name.clone());
        self.entries.insert(
            name.clone(),
            RegisteredPlugin {
                descriptor,
                package,
                credentials,
            },
        );
        Ok(RegistrationHandle { name })
    }

    /// Get a registered plugin by name.
    pub fn get(&self, name: &str) -> Option<&RegisteredPlugin> {
        self.entries.get(name)
    }

    /// First registered plugin claiming the given device-OS tag.
    ///
    /// Hosts dispatch a device to a driver through its OS tag; when several
    /// plugins claim the same tag, registration order decides.
    pub fn driver_for(&self, os_name: &str) -> Option<&RegisteredPlugin> {
        self.order
            .iter()
            .filter_map(|name| self.entries.get(name))
            .find(|plugin| plugin.supports_os(os_name))
    }

    /// Listing rows for every registered plugin, in registration order.
    pub fn rows(&self) -> Vec<PluginRow> {
        self.order
            .iter()
            .filter_map(|name| self.entries.get(name))
            .map(RegisteredPlugin::row)
            .collect()
    }

    /// Registered plugin names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("entries", &self.order)
            .finish()
    }
}
