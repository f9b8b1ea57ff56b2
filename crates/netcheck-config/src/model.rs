// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model for the netcheck host file.
//!
//! The `[host]` table is strictly typed with `deny_unknown_fields`.
//! `[[plugins]]` entries are deliberately kept as raw TOML values: their
//! shape is the descriptor parser's contract, and a malformed entry must
//! fail per entry rather than reject the whole file.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Top-level `netcheck.toml` configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetcheckConfig {
    /// Host-process settings.
    #[serde(default)]
    pub host: HostConfig,

    /// Raw plugin entries, one table per `[[plugins]]` block. Handed to
    /// the descriptor parser one at a time.
    #[serde(default)]
    pub plugins: Vec<toml::Value>,
}

/// Host-process configuration (`[host]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Logging verbosity for the tracing subscriber the host installs.
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

/// Logging verbosity accepted in `[host] log_level`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}
