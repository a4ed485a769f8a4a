//! # datapkg-core — Foundational Types for Data Packages
//!
//! This crate defines the vocabulary shared by every other crate in the
//! workspace. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Descriptors stay loosely typed.** A [`Descriptor`] is an ordered JSON
//!    object. Properties this workspace does not understand are preserved
//!    verbatim, so a descriptor survives a decode/encode cycle unchanged.
//!
//! 2. **Resources are a capability, not a struct.** Anything implementing
//!    [`Resource`] can live inside a package. Concrete resource kinds
//!    (tabular, SQL-backed, inline) belong to other crates.
//!
//! 3. **Construction is injected.** A [`ResourceFactory`] turns a raw
//!    resource descriptor into a validated [`Resource`] or rejects it. Plain
//!    closures are factories through a blanket implementation.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `datapkg-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod descriptor;
pub mod error;
pub mod resource;
pub mod unchecked;

// Re-export primary types for ergonomic imports.
pub use descriptor::{descriptor_name, json_type_name, Descriptor, NAME_PROPERTY, RESOURCES_PROPERTY};
pub use error::{ResourceError, ResourceResult};
pub use resource::{Resource, ResourceFactory, SharedFactory};
pub use unchecked::{UncheckedFactory, UncheckedResource};
