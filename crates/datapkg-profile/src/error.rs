//! Profile setup errors.
//!
//! Per-resource rejections are reported as
//! [`ResourceError`](datapkg_core::ResourceError); these errors cover
//! building the factory itself.

use thiserror::Error;

/// Errors that can occur while setting up a [`ProfileFactory`](crate::ProfileFactory).
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The embedded schema is not valid JSON.
    #[error("failed to load profile schema: {0}")]
    SchemaLoad(#[from] serde_json::Error),

    /// The schema could not be compiled into a validator.
    #[error("failed to compile profile schema: {reason}")]
    SchemaCompile {
        /// Human-readable reason.
        reason: String,
    },

    /// The configuration value has the wrong shape.
    #[error("invalid profile configuration: {reason}")]
    InvalidConfig {
        /// Human-readable reason.
        reason: String,
    },
}
