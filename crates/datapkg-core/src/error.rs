//! # Resource Error Types
//!
//! Errors a [`ResourceFactory`](crate::ResourceFactory) reports when it
//! rejects a raw resource descriptor, and errors a
//! [`Resource`](crate::Resource) reports when it cannot re-serialize itself.

use thiserror::Error;

/// Errors produced while constructing or serializing a resource.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// The descriptor has no non-empty string `name` property.
    #[error("resource descriptor has no non-empty string \"name\" property")]
    MissingName,

    /// The `name` property is present but not acceptable.
    #[error("invalid resource name {name:?}: {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// The descriptor violates the resource profile.
    #[error("{count} profile violation(s): {}", .details.join("; "))]
    ProfileViolation {
        /// Number of violations found.
        count: usize,
        /// One entry per violation, JSON pointer first.
        details: Vec<String>,
    },

    /// Rejected by a custom factory.
    #[error("resource rejected: {0}")]
    Rejected(String),

    /// The resource could not produce its descriptor.
    #[error("failed to serialize resource {name:?}: {reason}")]
    Serialization {
        /// Name of the resource.
        name: String,
        /// Human-readable reason.
        reason: String,
    },
}

/// Result type alias for resource operations.
pub type ResourceResult<T> = Result<T, ResourceError>;
