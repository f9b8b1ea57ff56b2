// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the config-to-registry pipeline.
//!
//! Each test builds its world explicitly: a TOML config string, a package
//! index, and an environment snapshot. Tests are independent and never
//! touch the real process environment.

use std::sync::Arc;

use netcheck::{
    builtin_packages, load_plugins, DriverPackage, EnvSnapshot, LoadError, PluginRegistry,
    ServiceModule, ValidationError,
};
use secrecy::ExposeSecret;

fn load_config(toml_src: &str) -> netcheck::NetcheckConfig {
    netcheck::config::load_str(toml_src).expect("test config should load")
}

// ---- Test 1: full pipeline against the built-in NX-OS package ----

#[test]
fn test_config_to_registry_with_builtin_package() {
    let config = load_config(
        r#"
[host]
log_level = "debug"

[[plugins]]
name = "NXOS EVPN Spine"
supports = ["nx-os"]
package = "netcam_nxapi"
services = ["netcam_nxapi.topology", "netcam_nxapi.bgp_peering"]

[[plugins]]
name = "NXOS EVPN Leaf"
supports = ["nx-os"]
package = "netcam_nxapi"
services = ["netcam_nxapi.topology"]
"#,
    );

    let index = builtin_packages();
    let env = EnvSnapshot::default();
    let mut registry = PluginRegistry::new();

    let report = load_plugins(&config, &index, &env, &mut registry);

    assert!(report.is_clean(), "failures: {:?}", report.failed);
    assert_eq!(registry.len(), 2);

    let rows = registry.rows();
    assert_eq!(rows[0].name, "NXOS EVPN Spine");
    assert_eq!(rows[0].description, "Cisco NX-OS NXAPI devices");
    assert_eq!(rows[0].package, "netcam_nxapi");
    assert_eq!(rows[0].supports, vec!["nx-os"]);
    assert_eq!(rows[1].name, "NXOS EVPN Leaf");
}

// ---- Test 2: credentials resolve from the snapshot, not live env ----

#[test]
fn test_credentials_resolved_at_validation_time() {
    let config = load_config(
        r#"
[[plugins]]
name = "Cisco NX-OS"
supports = ["nx-os"]
package = "netcam_nxapi"

[plugins.credentials]
username = "NETWORK_USERNAME"
password = "NETWORK_PASSWORD"
"#,
    );

    let index = builtin_packages();
    let env = EnvSnapshot::from_pairs([
        ("NETWORK_USERNAME", "admin"),
        ("NETWORK_PASSWORD", "s3cr3t"),
    ]);
    let mut registry = PluginRegistry::new();

    let report = load_plugins(&config, &index, &env, &mut registry);
    assert!(report.is_clean(), "failures: {:?}", report.failed);

    let plugin = registry.get("Cisco NX-OS").unwrap();
    let credentials = plugin.credentials();
    assert_eq!(
        credentials.get("username").unwrap().expose_secret(),
        "admin"
    );
    assert_eq!(
        credentials.get("password").unwrap().expose_secret(),
        "s3cr3t"
    );

    // Debug output of the registration never leaks the values.
    let rendered = format!("{plugin:?}");
    assert!(!rendered.contains("s3cr3t"), "secret leaked: {rendered}");
}

#[test]
fn test_missing_credential_var_fails_only_that_entry() {
    let config = load_config(
        r#"
[[plugins]]
name = "No creds in env"
supports = ["nx-os"]
package = "netcam_nxapi"

[plugins.credentials]
password = "NETWORK_PASSWORD"

[[plugins]]
name = "No creds needed"
supports = ["nx-os"]
package = "netcam_nxapi"
"#,
    );

    let index = builtin_packages();
    let mut registry = PluginRegistry::new();

    let report = load_plugins(&config, &index, &EnvSnapshot::default(), &mut registry);

    assert_eq!(report.loaded.len(), 1);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(
        report.failed[0].error,
        LoadError::Validate(ValidationError::MissingEnvVar {
            field: "password".to_string(),
            var: "NETWORK_PASSWORD".to_string(),
        })
    );
    assert!(registry.get("No creds needed").is_some());
}

// ---- Test 3: per-entry failure isolation across the whole config ----

#[test]
fn test_bad_entries_do_not_affect_good_ones() {
    let config = load_config(
        r#"
[[plugins]]
name = "good"
supports = ["nx-os"]
package = "netcam_nxapi"

[[plugins]]
name = "unknown package"
supports = ["nx-os"]
package = "netcam_junos"

[[plugins]]
name = "bad shape"
supports = "nx-os"
package = "netcam_nxapi"

[[plugins]]
name = "good"
supports = ["nx-os"]
package = "netcam_nxapi"
"#,
    );

    let index = builtin_packages();
    let mut registry = PluginRegistry::new();

    let report = load_plugins(&config, &index, &EnvSnapshot::default(), &mut registry);

    assert_eq!(report.loaded.len(), 1);
    assert_eq!(report.failed.len(), 3);
    assert_eq!(registry.len(), 1);

    // Failure entries carry their positions for host-side reporting.
    let positions: Vec<usize> = report.failed.iter().map(|f| f.entry).collect();
    assert_eq!(positions, vec![1, 2, 3]);

    // The duplicate at entry 3 failed as a collision, keeping entry 0.
    assert!(matches!(
        report.failed[2].error,
        LoadError::Duplicate(_)
    ));
}

// ---- Test 4: OS-tag dispatch ----

#[test]
fn test_driver_for_dispatches_by_os_tag() {
    let config = load_config(
        r#"
[[plugins]]
name = "NXOS lab"
supports = ["nx-os", "nx-osv"]
package = "netcam_nxapi"
"#,
    );

    let index = builtin_packages();
    let mut registry = PluginRegistry::new();
    load_plugins(&config, &index, &EnvSnapshot::default(), &mut registry);

    assert_eq!(registry.driver_for("nx-os").unwrap().name(), "NXOS lab");
    assert_eq!(registry.driver_for("nx-osv").unwrap().name(), "NXOS lab");
    assert!(registry.driver_for("eos").is_none());
}

// ---- Test 5: hosts extend the index with their own packages ----

struct AsyncNxosPackage {
    modules: Vec<ServiceModule>,
}

impl DriverPackage for AsyncNxosPackage {
    fn id(&self) -> &str {
        "netcam_aionxapi"
    }

    fn description(&self) -> &str {
        "Cisco NX-OS NXAPI devices (async transport)"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn service_modules(&self) -> &[ServiceModule] {
        &self.modules
    }
}

fn aionxapi_index() -> netcheck::PackageIndex {
    let mut index = builtin_packages();
    index.insert(Arc::new(AsyncNxosPackage {
        modules: vec![
            ServiceModule::new(
                "netcam_aionxapi.topology",
                "Topology",
                &["device_info", "interfaces", "transceivers", "cabling", "ipaddrs"],
            ),
            ServiceModule::new(
                "netcam_aionxapi.bgp_peering",
                "BGP peering",
                &["bgp_peering", "bgp_routers"],
            ),
        ],
    }));
    index
}

const AIONXAPI_ENTRY: &str = r#"
[[plugins]]
name = "Cisco NX-OS"
supports = ["nx-os"]
package = "netcam_aionxapi"
services = ["netcam_aionxapi.topology", "netcam_aionxapi.bgp_peering"]

[plugins.credentials]
username = "NETWORK_USERNAME"
password = "NETWORK_PASSWORD"
"#;

#[test]
fn test_host_registered_package_is_loadable() {
    let config = load_config(AIONXAPI_ENTRY);
    let index = aionxapi_index();
    let env = EnvSnapshot::from_pairs([
        ("NETWORK_USERNAME", "netops"),
        ("NETWORK_PASSWORD", "fiddlesticks"),
    ]);
    let mut registry = PluginRegistry::new();

    let report = load_plugins(&config, &index, &env, &mut registry);
    assert!(report.is_clean(), "failures: {:?}", report.failed);
    assert_eq!(report.loaded.len(), 1);

    let plugin = registry.get("Cisco NX-OS").unwrap();
    assert_eq!(plugin.package().id(), "netcam_aionxapi");
    assert!(plugin.supports_os("nx-os"));
    assert_eq!(
        plugin.descriptor().services(),
        ["netcam_aionxapi.topology", "netcam_aionxapi.bgp_peering"]
    );
    assert_eq!(
        plugin.credentials().get("username").unwrap().expose_secret(),
        "netops"
    );
}

#[test]
fn test_host_registered_package_fails_without_password_var() {
    let config = load_config(AIONXAPI_ENTRY);
    let index = aionxapi_index();
    // Username is set; the password variable is absent from the snapshot.
    let env = EnvSnapshot::from_pairs([("NETWORK_USERNAME", "netops")]);
    let mut registry = PluginRegistry::new();

    let report = load_plugins(&config, &index, &env, &mut registry);

    assert!(report.loaded.is_empty());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(
        report.failed[0].error,
        LoadError::Validate(ValidationError::MissingEnvVar {
            field: "password".to_string(),
            var: "NETWORK_PASSWORD".to_string(),
        })
    );
    assert!(registry.is_empty());
}

// ---- Test 6: empty config, empty registry ----

#[test]
fn test_empty_config_loads_nothing() {
    let config = load_config("");
    let index = builtin_packages();
    let mut registry = PluginRegistry::new();

    let report = load_plugins(&config, &index, &EnvSnapshot::default(), &mut registry);

    assert!(report.is_clean());
    assert!(report.loaded.is_empty());
    assert!(registry.is_empty());
    assert!(registry.rows().is_empty());
}

// ---- Test 7: registry rows serialize for machine consumers ----

#[test]
fn test_rows_serialize_to_json() {
    let config = load_config(
        r#"
[[plugins]]
name = "core1"
supports = ["nx-os"]
package = "netcam_nxapi"
"#,
    );

    let index = builtin_packages();
    let mut registry = PluginRegistry::new();
    load_plugins(&config, &index, &EnvSnapshot::default(), &mut registry);

    let json = serde_json::to_value(registry.rows()).unwrap();
    assert_eq!(json[0]["name"], "core1");
    assert_eq!(json[0]["description"], "Cisco NX-OS NXAPI devices");
}
