//! Profile configuration.
//!
//! Every field has a default, so an empty object (or no configuration at
//! all) yields the strict profile. Unknown fields are rejected to catch
//! typos.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProfileError;

/// Switches for the checks [`ProfileFactory`](crate::ProfileFactory) runs
/// after schema validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    /// Require exactly one of `path` and `data`.
    pub require_data_source: bool,
    /// Permit absolute paths and `..` segments.
    pub allow_unsafe_paths: bool,
    /// Permit `http://` and `https://` paths.
    pub allow_remote_paths: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            require_data_source: true,
            allow_unsafe_paths: false,
            allow_remote_paths: true,
        }
    }
}

impl ProfileConfig {
    /// A configuration that only runs the schema layer, name pattern
    /// included.
    pub fn permissive() -> Self {
        Self {
            require_data_source: false,
            allow_unsafe_paths: true,
            allow_remote_paths: true,
        }
    }

    /// Read a configuration from a JSON value, e.g. a section of a larger
    /// settings document.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidConfig`] on unknown fields or wrong
    /// value types.
    pub fn from_value(value: Value) -> Result<Self, ProfileError> {
        serde_json::from_value(value).map_err(|e| ProfileError::InvalidConfig {
            reason: e.to_string(),
        })
    }
}
