//! # datapkg-profile — Data Resource Profile
//!
//! A [`ResourceFactory`](datapkg_core::ResourceFactory) that only accepts
//! resource descriptors conforming to the Data Resource profile.
//!
//! ## Validation layers
//!
//! 1. **Schema**: the embedded Draft 7 JSON Schema checks property types
//!    (`name` required and limited to lowercase letters, digits, `-`, `.`,
//!    `_`, `/`; `path` a string or non-empty string array; `bytes` a
//!    non-negative integer; well-formed `mediatype`/`hash`, ...).
//! 2. **Source**: exactly one of `path` and `data`.
//! 3. **Path safety**: no absolute paths, no `..` segments, remote URLs
//!    allowed or not per configuration.
//!
//! The schema always runs; layers 2-3 are toggled by [`ProfileConfig`].

pub mod config;
pub mod error;
pub mod factory;

// Re-export primary types.
pub use config::ProfileConfig;
pub use error::ProfileError;
pub use factory::{ProfileFactory, ProfileResource, ResourceSource};
