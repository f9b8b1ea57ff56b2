// SPDX-FileCopyrightText: 2026 Netcheck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the netcheck plugin layer.
//!
//! This crate provides the driver-package capability trait, the
//! service-module metadata record, and the error types shared by the
//! descriptor pipeline. Device driver packages implement the trait defined
//! here; the host-facing parse/validate/register machinery lives in
//! `netcheck-plugin`.

pub mod driver;
pub mod error;

// Re-export key items at crate root for ergonomic imports.
pub use driver::{DriverPackage, ServiceModule};
pub use error::{DuplicateNameError, LoadError, ParseError, ValidationError};
