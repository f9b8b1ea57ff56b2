// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Descriptor validation against the package index and environment.
//!
//! Validation resolves every reference a parsed descriptor makes: the
//! implementing package must be in the index, each service id must name a
//! module that package exposes, and each mapped environment variable must
//! be set and non-empty. The first unresolvable item fails the descriptor
//! and the error names it.

use std::sync::Arc;

use netcheck_core::{DriverPackage, ValidationError};
use secrecy::SecretString;

use crate::descriptor::PluginDescriptor;
use crate::env::{Credentials, EnvSnapshot};
use crate::index::PackageIndex;

/// A descriptor whose references all resolved.
///
/// Holds the descriptor together with the bound package handle and the
/// credential values read from the snapshot. This is the only input the
/// registry accepts, so nothing unvalidated can be registered.
pub struct ValidatedDescriptor {
    descriptor: PluginDescriptor,
    package: Arc<dyn DriverPackage>,
    credentials: Credentials,
}

impl ValidatedDescriptor {
    /// Validate a parsed descriptor.
    ///
    /// Credential values are read from the snapshot once, here; later
    /// changes to the process environment do not affect the registration.
    pub fn validate(
        descriptor: PluginDescriptor,
        index: &PackageIndex,
        env: &EnvSnapshot,
    ) -> Result<Self, ValidationError> {
        let package = index
            .get(descriptor.package())
            .cloned()
            .ok_or_else(|| ValidationError::UnknownPackage {
                package: descriptor.package().to_string(),
            })?;

        for service in descriptor.services() {
            if !service_belongs_to(service, descriptor.package()) {
                return Err(ValidationError::ServiceOutsidePackage {
                    service: service.clone(),
                    package: descriptor.package().to_string(),
                });
            }
            if package.resolve_service(service).is_none() {
                return Err(ValidationError::UnknownService {
                    service: service.clone(),
                    package: descriptor.package().to_string(),
                });
            }
        }

        let mut resolved = Vec::with_capacity(descriptor.credential_count());
        for (field, var) in descriptor.credential_env() {
            let value = env.get(var).ok_or_else(|| ValidationError::MissingEnvVar {
                field: field.to_string(),
                var: var.to_string(),
            })?;
            if value.is_empty() {
                return Err(ValidationError::EmptyEnvVar {
                    field: field.to_string(),
                    var: var.to_string(),
                });
            }
            resolved.push((field.to_string(), SecretString::from(value.to_string())));
        }
        let credentials = resolved.into_iter().collect();

        Ok(Self {
            descriptor,
            package,
            credentials,
        })
    }

    /// The underlying descriptor, unchanged by validation.
    pub fn descriptor(&self) -> &PluginDescriptor {
        &self.descriptor
    }

    /// The driver package the descriptor resolved to.
    pub fn package(&self) -> &Arc<dyn DriverPackage> {
        &self.package
    }

    /// Credential values resolved from the environment snapshot.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub(crate) fn into_parts(self) -> (PluginDescriptor, Arc<dyn DriverPackage>, Credentials) {
        (self.descriptor, self.package, self.credentials)
    }
}

impl std::fmt::Debug for ValidatedDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedDescriptor")
            .field("descriptor", &self.descriptor)
            .field("package", &self.package.id())
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// A service id belongs to a package when it is `<package>.<suffix>` with a
/// non-empty suffix. The bare package id is not a service.
fn service_belongs_to(service: &str, package: &str) -> bool {
    service
        .strip_prefix(package)
        .is_some_and(|rest| rest.starts_with('.') && rest.len() > 1)
}
