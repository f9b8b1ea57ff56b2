// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the netcheck host.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, environment variable
//! overrides, and diagnostic error rendering with typo suggestions.
//!
//! Plugin entries under `[[plugins]]` are carried as raw TOML values; the
//! descriptor parser in `netcheck-plugin` owns their shape so one bad entry
//! cannot reject the whole file.
//!
//! # Usage
//!
//! ```no_run
//! let config = netcheck_config::load().expect("config errors");
//! println!("log level: {}", config.host.log_level);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{HostConfig, LogLevel, NetcheckConfig};

/// Load configuration from the XDG hierarchy.
///
/// On a Figment failure the error is converted into miette diagnostics
/// with typo suggestions, ready for [`render_errors`].
pub fn load() -> Result<NetcheckConfig, Vec<ConfigError>> {
    let config = loader::load_config().map_err(diagnostic::figment_to_config_errors)?;
    tracing::debug!(
        log_level = %config.host.log_level,
        plugin_entries = config.plugins.len(),
        "configuration loaded"
    );
    Ok(config)
}

/// Load configuration from a TOML string.
///
/// Useful for testing and explicit configuration.
pub fn load_str(toml_content: &str) -> Result<NetcheckConfig, Vec<ConfigError>> {
    loader::load_config_from_str(toml_content).map_err(diagnostic::figment_to_config_errors)
}
