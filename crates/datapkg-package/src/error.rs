//! Package-specific error types.
//!
//! Structured errors for package construction, validation, and mutation.
//! Structural errors carry the offending JSON type and, for resource
//! entries, the index into the `resources` array.

use datapkg_core::ResourceError;
use thiserror::Error;

/// Errors that can occur during package operations.
#[derive(Debug, Error)]
pub enum PackageError {
    /// The descriptor has no `resources` property.
    #[error("descriptor has no \"resources\" property")]
    MissingResources,

    /// The `resources` property is not an array.
    #[error("\"resources\" must be an array, got {found}")]
    InvalidResourcesType { found: &'static str },

    /// The `resources` array is empty.
    #[error("\"resources\" must contain at least one resource")]
    EmptyResources,

    /// An element of `resources` is not an object.
    #[error("resources[{index}] must be an object, got {found}")]
    InvalidResourceEntry { index: usize, found: &'static str },

    /// The top-level JSON/YAML value is not an object.
    #[error("package descriptor must be an object, got {found}")]
    NotAnObject { found: &'static str },

    /// The factory rejected an element of `resources`.
    #[error("resources[{index}] is invalid: {source}")]
    InvalidResource {
        index: usize,
        #[source]
        source: ResourceError,
    },

    /// The factory rejected a resource passed to `add_resource`.
    #[error("resource rejected: {0}")]
    ResourceRejected(#[source] ResourceError),

    /// A resource failed to re-serialize itself.
    #[error("resource {name:?} failed to produce its descriptor: {source}")]
    ResourceDescriptor {
        name: String,
        #[source]
        source: ResourceError,
    },

    /// The package has no resource factory.
    #[error("no resource factory configured")]
    NoFactory,

    /// Input is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input is not valid YAML.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error while reading or writing a stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`PackageError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The descriptor has the wrong shape.
    Structural,
    /// A resource descriptor was rejected.
    Validation,
    /// The package is missing its factory.
    Configuration,
    /// The input could not be parsed at all.
    Syntax,
    /// Reading or writing failed.
    Io,
}

impl PackageError {
    /// Classify the error so callers can tell "not JSON" apart from
    /// "valid JSON, invalid package".
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingResources
            | Self::InvalidResourcesType { .. }
            | Self::EmptyResources
            | Self::InvalidResourceEntry { .. }
            | Self::NotAnObject { .. } => ErrorKind::Structural,
            Self::InvalidResource { .. }
            | Self::ResourceRejected(_)
            | Self::ResourceDescriptor { .. } => ErrorKind::Validation,
            Self::NoFactory => ErrorKind::Configuration,
            Self::Json(e) if e.is_io() => ErrorKind::Io,
            Self::Json(_) | Self::Yaml(_) => ErrorKind::Syntax,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type alias for package operations.
pub type PackageResult<T> = Result<T, PackageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_resources_type_display() {
        let err = PackageError::InvalidResourcesType { found: "number" };
        assert_eq!(format!("{err}"), "\"resources\" must be an array, got number");
        assert_eq!(err.kind(), ErrorKind::Structural);
    }

    #[test]
    fn invalid_resource_carries_index() {
        let err = PackageError::InvalidResource {
            index: 3,
            source: ResourceError::MissingName,
        };
        let msg = format!("{err}");
        assert!(msg.starts_with("resources[3] is invalid"));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn no_factory_is_configuration() {
        assert_eq!(PackageError::NoFactory.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn json_syntax_is_distinguishable() {
        let err = PackageError::from(serde_json::from_str::<serde_json::Value>("{resources}").unwrap_err());
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = PackageError::from(io_err);
        assert!(format!("{err}").contains("access denied"));
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
