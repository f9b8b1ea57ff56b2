// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin descriptor pipeline for netcheck device-driver plugins.
//!
//! A host turns each raw `[[plugins]]` configuration entry into a live
//! registration in three stages:
//!
//! 1. **parse** a fragment into a [`PluginDescriptor`] (shape only),
//! 2. **validate** it against a [`PackageIndex`] and an [`EnvSnapshot`],
//!    binding the driver package and resolving credentials,
//! 3. **register** the result in a host-owned [`PluginRegistry`].
//!
//! [`load_all`] runs the whole pipeline over a list of fragments with
//! per-entry failure isolation. Everything is synchronous and owned; there
//! is no global registry and no background work.

pub mod descriptor;
pub mod env;
pub mod index;
pub mod loader;
pub mod registry;
pub mod validate;

pub use descriptor::PluginDescriptor;
pub use env::{Credentials, EnvSnapshot};
pub use index::PackageIndex;
pub use loader::{load_all, LoadFailure, LoadReport};
pub use registry::{PluginRegistry, PluginRow, RegisteredPlugin, RegistrationHandle};
pub use validate::ValidatedDescriptor;
