// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Link-time driver-package registration table.
//!
//! Plugins name their implementation with the `package` field. There is no
//! reflective import in a compiled host, so every loadable package must be
//! entered here before validation runs. Hosts usually start from the
//! built-in set and extend it with whatever they link in.

use std::collections::BTreeMap;
use std::sync::Arc;

use netcheck_core::DriverPackage;

/// Table of loadable driver packages keyed by package id.
#[derive(Clone, Default)]
pub struct PackageIndex {
    packages: BTreeMap<String, Arc<dyn DriverPackage>>,
}

impl PackageIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            packages: BTreeMap::new(),
        }
    }

    /// Enter a package under its own id. Returns the previously registered
    /// package when the id was already present.
    pub fn insert(&mut self, package: Arc<dyn DriverPackage>) -> Option<Arc<dyn DriverPackage>> {
        self.packages.insert(package.id().to_string(), package)
    }

    /// Look up a package by id.
    pub fn get(&self, id: &str) -> Option<&Arc<dyn DriverPackage>> {
        self.packages.get(id)
    }

    /// Whether the id names a loadable package.
    pub fn contains(&self, id: &str) -> bool {
        self.packages.contains_key(id)
    }

    /// Registered package ids, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    /// Number of registered packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// True when no packages are registered.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl std::fmt::Debug for PackageIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackageIndex")
            .field("packages", &self.packages.keys().collect::<Vec<_>>())
            .finish()
    }
}
