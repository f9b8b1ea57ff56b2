// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./netcheck.toml` > `~/.config/netcheck/netcheck.toml`
//! > `/etc/netcheck/netcheck.toml` with environment variable overrides via
//! the `NETCHECK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::NetcheckConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/netcheck/netcheck.toml` (system-wide)
/// 3. `~/.config/netcheck/netcheck.toml` (user XDG config)
/// 4. `./netcheck.toml` (local directory)
/// 5. `NETCHECK_*` environment variables
pub fn load_config() -> Result<NetcheckConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NetcheckConfig::default()))
        .merge(Toml::file("/etc/netcheck/netcheck.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("netcheck/netcheck.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("netcheck.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and embedding hosts that manage their own file.
pub fn load_config_from_str(toml_content: &str) -> Result<NetcheckConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NetcheckConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<NetcheckConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NetcheckConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscore-containing
/// key names survive: `NETCHECK_HOST_LOG_LEVEL` must map to
/// `host.log_level`, not `host.log.level`.
fn env_provider() -> Env {
    Env::prefixed("NETCHECK_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: NETCHECK_HOST_LOG_LEVEL -> "host_log_level"
        let mapped = key.as_str().replacen("host_", "host.", 1);
        mapped.into()
    })
}
