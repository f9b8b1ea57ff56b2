// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin descriptor parsing from raw configuration fragments.
//!
//! A descriptor is the normalized form of one `[[plugins]]` entry. Parsing
//! is purely syntactic: it checks shape and normalizes fields but never
//! consults the package index or the environment, so the same fragment
//! parses identically on any host.

use std::collections::BTreeMap;

use netcheck_core::ParseError;
use serde::Serialize;

/// Keys accepted in a plugin entry. Anything else is rejected so a typo
/// like `suports` fails loudly instead of silently dropping the tag list.
const FRAGMENT_KEYS: &[&str] = &["name", "supports", "package", "services", "credentials"];

/// Normalized record describing one loadable device-driver plugin.
///
/// Immutable once parsed; validation and registration read it but never
/// write back. Two descriptors parsed from the same fragment compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginDescriptor {
    name: String,
    supports: Vec<String>,
    package: String,
    services: Vec<String>,
    credentials: BTreeMap<String, String>,
}

impl PluginDescriptor {
    /// Parse one configuration fragment into a descriptor.
    ///
    /// Required fields are `name`, `supports`, and `package`. `services`
    /// and `credentials` default to empty. Fails with the first shape
    /// problem found; the error names the offending field.
    pub fn parse(fragment: &toml::Value) -> Result<Self, ParseError> {
        let table = fragment.as_table().ok_or(ParseError::NotATable)?;

        for key in table.keys() {
            if !FRAGMENT_KEYS.contains(&key.as_str()) {
                return Err(ParseError::UnknownField { field: key.clone() });
            }
        }

        let name = require_string(table, "name")?;
        let package = require_string(table, "package")?;
        let supports = parse_supports(table)?;
        let services = parse_services(table)?;
        let credentials = parse_credentials(table)?;

        Ok(Self {
            name,
            supports,
            package,
            services,
            credentials,
        })
    }

    /// Unique plugin name, the registry key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Device-OS tags this plugin claims, duplicates removed with first
    /// occurrence order preserved.
    pub fn supports(&self) -> &[String] {
        &self.supports
    }

    /// Whether the plugin claims the given device-OS tag.
    pub fn supports_os(&self, os_name: &str) -> bool {
        self.supports.iter().any(|tag| tag == os_name)
    }

    /// Identifier of the driver package implementing this plugin.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Fully-qualified service-module ids, in configuration order.
    pub fn services(&self) -> &[String] {
        &self.services
    }

    /// Credential field to environment-variable-name pairs.
    pub fn credential_env(&self) -> impl Iterator<Item = (&str, &str)> {
        self.credentials
            .iter()
            .map(|(field, var)| (field.as_str(), var.as_str()))
    }

    /// Number of mapped credential fields.
    pub fn credential_count(&self) -> usize {
        self.credentials.len()
    }
}

fn require_string(table: &toml::Table, field: &'static str) -> Result<String, ParseError> {
    let value = table
        .get(field)
        .ok_or(ParseError::MissingField { field })?;
    let s = value.as_str().ok_or_else(|| ParseError::InvalidType {
        field: field.to_string(),
        expected: "a string",
    })?;
    if s.is_empty() {
        return Err(ParseError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(s.to_string())
}

fn parse_supports(table: &toml::Table) -> Result<Vec<String>, ParseError> {
    let value = table
        .get("supports")
        .ok_or(ParseError::MissingField { field: "supports" })?;
    let list = value.as_array().ok_or_else(|| ParseError::InvalidType {
        field: "supports".to_string(),
        expected: "a list of device-OS tags",
    })?;

    let mut tags: Vec<String> = Vec::with_capacity(list.len());
    for (i, entry) in list.iter().enumerate() {
        let tag = entry.as_str().ok_or_else(|| ParseError::InvalidType {
            field: format!("supports[{i}]"),
            expected: "a string",
        })?;
        if tag.is_empty() {
            return Err(ParseError::EmptyField {
                field: format!("supports[{i}]"),
            });
        }
        // Set semantics: repeated tags collapse to the first occurrence.
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    if tags.is_empty() {
        return Err(ParseError::NoSupportTags);
    }
    Ok(tags)
}

fn parse_services(table: &toml::Table) -> Result<Vec<String>, ParseError> {
    let Some(value) = table.get("services") else {
        return Ok(Vec::new());
    };
    let list = value.as_array().ok_or_else(|| ParseError::InvalidType {
        field: "services".to_string(),
        expected: "a list of service-module ids",
    })?;

    let mut services: Vec<String> = Vec::with_capacity(list.len());
    for (i, entry) in list.iter().enumerate() {
        let id = entry.as_str().ok_or_else(|| ParseError::InvalidType {
            field: format!("services[{i}]"),
            expected: "a string",
        })?;
        if id.is_empty() {
            return Err(ParseError::EmptyField {
                field: format!("services[{i}]"),
            });
        }
        if services.iter().any(|s| s == id) {
            return Err(ParseError::DuplicateService {
                service: id.to_string(),
            });
        }
        services.push(id.to_string());
    }
    Ok(services)
}

fn parse_credentials(table: &toml::Table) -> Result<BTreeMap<String, String>, ParseError> {
    let Some(value) = table.get("credentials") else {
        return Ok(BTreeMap::new());
    };
    let nested = value.as_table().ok_or_else(|| ParseError::InvalidType {
        field: "credentials".to_string(),
        expected: "a table of field = env-var-name pairs",
    })?;

    let mut mapping = BTreeMap::new();
    for (field, var) in nested {
        let var = var.as_str().ok_or_else(|| ParseError::InvalidType {
            field: format!("credentials.{field}"),
            expected: "an environment variable name",
        })?;
        if var.is_empty() {
            return Err(ParseError::EmptyField {
                field: format!("credentials.{field}"),
            });
        }
        mapping.insert(field.clone(), var.to_string());
    }
    Ok(mapping)
}
