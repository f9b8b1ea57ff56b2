// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin descriptor loading for network state-check hosts.
//!
//! A host embeds this crate to turn its `netcheck.toml` into a registry of
//! device-driver plugins. Each `[[plugins]]` entry is parsed, validated
//! against the loadable packages and the environment, and registered under
//! its unique name; a bad entry is reported and skipped without affecting
//! the others.
//!
//! ```no_run
//! use netcheck::{builtin_packages, EnvSnapshot, PluginRegistry};
//!
//! let config = netcheck::config::load().unwrap_or_else(|errors| {
//!     netcheck::config::render_errors(&errors);
//!     std::process::exit(1);
//! });
//!
//! let index = builtin_packages();
//! let env = EnvSnapshot::capture();
//! let mut registry = PluginRegistry::new();
//! let report = netcheck::load_plugins(&config, &index, &env, &mut registry);
//! if !report.is_clean() {
//!     eprintln!("{} plugin entries failed to load", report.failed.len());
//! }
//! for row in registry.rows() {
//!     println!("{}  {}  {}", row.name, row.package, row.description);
//! }
//! ```

pub use netcheck_config as config;

pub use netcheck_config::NetcheckConfig;
pub use netcheck_core::{
    DriverPackage, DuplicateNameError, LoadError, ParseError, ServiceModule, ValidationError,
};
pub use netcheck_plugin::{
    Credentials, EnvSnapshot, LoadFailure, LoadReport, PackageIndex, PluginDescriptor,
    PluginRegistry, PluginRow, RegisteredPlugin, RegistrationHandle, ValidatedDescriptor,
};

/// Package index seeded with every driver package compiled into this build.
///
/// Hosts that link additional driver crates extend the returned index with
/// [`PackageIndex::insert`] before loading.
pub fn builtin_packages() -> PackageIndex {
    let mut index = PackageIndex::new();
    index.insert(netcheck_nxapi::package());
    index
}

/// Load every plugin entry from `config` into `registry`.
pub fn load_plugins(
    config: &NetcheckConfig,
    index: &PackageIndex,
    env: &EnvSnapshot,
    registry: &mut PluginRegistry,
) -> LoadReport {
    netcheck_plugin::load_all(&config.plugins, index, env, registry)
}

/// One-call startup path: built-in packages, the current process
/// environment, and a fresh registry.
pub fn bootstrap(config: &NetcheckConfig) -> (PluginRegistry, LoadReport) {
    let index = builtin_packages();
    let env = EnvSnapshot::capture();
    let mut registry = PluginRegistry::new();
    let report = load_plugins(config, &index, &env, &mut registry);
    (registry, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_packages_include_nxapi() {
        let index = builtin_packages();
        assert!(index.contains("netcam_nxapi"));

        let package = index.get("netcam_nxapi").unwrap();
        assert!(package.resolve_service("netcam_nxapi.topology").is_some());
        assert!(package.resolve_service("netcam_nxapi.bgp_peering").is_some());
    }

    #[test]
    fn bootstrap_with_default_config_is_clean_and_empty() {
        let (registry, report) = bootstrap(&NetcheckConfig::default());
        assert!(report.is_clean());
        assert!(registry.is_empty());
    }
}
