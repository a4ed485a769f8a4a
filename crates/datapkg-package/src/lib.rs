//! # datapkg-package — Data Packages
//!
//! A [`Package`] keeps two views of the same data in lockstep:
//!
//! - the raw **descriptor**, an ordered JSON object that round-trips
//!   verbatim (unknown properties included), and
//! - the ordered list of materialized **resources**, built from the
//!   descriptor's `resources` array by a caller-supplied
//!   [`ResourceFactory`](datapkg_core::ResourceFactory).
//!
//! For every index `i`, `resources[i]` was built from, and re-serializes
//! to, `descriptor["resources"][i]`. Every public mutation either restores
//! that invariant or fails without touching the package.
//!
//! ## Entry points
//!
//! - [`Package::from_descriptor`] — from an in-memory descriptor.
//! - [`parser::from_reader`], [`parser::from_str`], [`parser::from_yaml_str`]
//!   — from JSON or YAML text.
//! - `serde` — `Package` implements `Serialize`/`Deserialize`, and
//!   [`PackageSeed`] deserializes with a chosen factory.
//! - [`valid`] / [`validate`] — check a descriptor without building a package.

pub mod error;
pub mod package;
pub mod parser;
pub mod serialization;
pub mod validation;

// Re-export primary types.
pub use error::{ErrorKind, PackageError, PackageResult};
pub use package::Package;
pub use parser::{from_reader, from_slice, from_str, from_yaml_reader, from_yaml_str};
pub use serialization::PackageSeed;
pub use validation::{valid, validate};
