//! # Profile-Enforcing Resource Factory
//!
//! [`ProfileFactory`] compiles the embedded Data Resource schema once and
//! validates every descriptor handed to it. Accepted descriptors become
//! [`ProfileResource`]s, which know where their data lives.

use std::fmt;

use datapkg_core::{
    descriptor_name, Descriptor, Resource, ResourceError, ResourceFactory, ResourceResult,
};
use serde_json::Value;

use crate::config::ProfileConfig;
use crate::error::ProfileError;

/// The Data Resource profile, JSON Schema Draft 7.
const DATA_RESOURCE_SCHEMA: &str = include_str!("../schemas/data-resource.schema.json");

const PATH_PROPERTY: &str = "path";
const DATA_PROPERTY: &str = "data";
const NAME_POINTER: &str = "/name";

/// Where a resource's data lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceSource {
    /// One or more file paths or URLs; several paths form one logical file.
    Paths(Vec<String>),
    /// Inline data under the `data` property.
    Inline,
    /// Neither `path` nor `data` (only when the config allows it).
    Unspecified,
}

impl ResourceSource {
    /// Whether any path is an `http(s)` URL.
    pub fn is_remote(&self) -> bool {
        match self {
            Self::Paths(paths) => paths.iter().any(|p| is_remote_path(p)),
            _ => false,
        }
    }
}

/// A resource that passed the Data Resource profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileResource {
    name: String,
    descriptor: Descriptor,
    source: ResourceSource,
}

impl ProfileResource {
    /// Where the resource's data lives.
    pub fn source(&self) -> &ResourceSource {
        &self.source
    }

    /// Whether any path is an `http(s)` URL.
    pub fn is_remote(&self) -> bool {
        self.source.is_remote()
    }
}

impl Resource for ProfileResource {
    fn name(&self) -> &str {
        &self.name
    }

    fn descriptor(&self) -> ResourceResult<Descriptor> {
        Ok(self.descriptor.clone())
    }
}

/// Builds [`ProfileResource`]s, rejecting descriptors that break the profile.
pub struct ProfileFactory {
    validator: jsonschema::Validator,
    config: ProfileConfig,
}

impl fmt::Debug for ProfileFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileFactory")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ProfileFactory {
    /// Compile the profile schema with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] if the embedded schema fails to load or
    /// compile.
    pub fn new(config: ProfileConfig) -> Result<Self, ProfileError> {
        let schema: Value = serde_json::from_str(DATA_RESOURCE_SCHEMA)?;
        let validator = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft7)
            .build(&schema)
            .map_err(|e| ProfileError::SchemaCompile {
                reason: e.to_string(),
            })?;
        Ok(Self { validator, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    /// Run every validation layer on `raw` and work out its source.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ProfileViolation`] listing every schema or
    /// source/path violation, or [`ResourceError::InvalidName`] when the
    /// string `name` is the only property breaking the schema.
    pub fn check(&self, raw: &Descriptor) -> ResourceResult<ResourceSource> {
        let instance = Value::Object(raw.clone());
        let errors: Vec<(String, String)> = self
            .validator
            .iter_errors(&instance)
            .map(|err| (err.instance_path.to_string(), err.to_string()))
            .collect();
        if !errors.is_empty() {
            if let Some(name) = descriptor_name(raw) {
                if errors.iter().all(|(pointer, _)| pointer == NAME_POINTER) {
                    let reasons: Vec<String> = errors.into_iter().map(|(_, msg)| msg).collect();
                    return Err(ResourceError::InvalidName {
                        name: name.to_string(),
                        reason: reasons.join("; "),
                    });
                }
            }
            return Err(violation(
                errors
                    .iter()
                    .map(|(pointer, msg)| format!("{}: {msg}", pointer_or_root(pointer)))
                    .collect(),
            ));
        }

        let source = self.source_of(raw)?;
        if let ResourceSource::Paths(paths) = &source {
            let details: Vec<String> = paths
                .iter()
                .filter_map(|p| self.path_violation(p))
                .collect();
            if !details.is_empty() {
                return Err(violation(details));
            }
        }
        Ok(source)
    }

    /// Validate `raw` and build the typed resource.
    ///
    /// # Errors
    ///
    /// Fails as [`check`](Self::check) does.
    pub fn build(&self, raw: &Descriptor) -> ResourceResult<ProfileResource> {
        let source = self.check(raw).map_err(|e| {
            tracing::debug!(error = %e, "resource rejected by profile");
            e
        })?;
        let name = descriptor_name(raw).ok_or(ResourceError::MissingName)?;
        Ok(ProfileResource {
            name: name.to_string(),
            descriptor: raw.clone(),
            source,
        })
    }

    fn source_of(&self, raw: &Descriptor) -> ResourceResult<ResourceSource> {
        let paths = match raw.get(PATH_PROPERTY) {
            Some(Value::String(p)) => Some(vec![p.clone()]),
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            ),
            _ => None,
        };
        let inline = raw.contains_key(DATA_PROPERTY);

        match (paths, inline) {
            (Some(_), true) if self.config.require_data_source => Err(violation(vec![
                "/: exactly one of \"path\" and \"data\" is allowed".to_string(),
            ])),
            (None, false) if self.config.require_data_source => Err(violation(vec![
                "/: one of \"path\" or \"data\" is required".to_string(),
            ])),
            (Some(paths), _) => Ok(ResourceSource::Paths(paths)),
            (None, true) => Ok(ResourceSource::Inline),
            (None, false) => Ok(ResourceSource::Unspecified),
        }
    }

    fn path_violation(&self, path: &str) -> Option<String> {
        if is_remote_path(path) {
            return (!self.config.allow_remote_paths)
                .then(|| format!("/path: remote path {path:?} is not allowed"));
        }
        if self.config.allow_unsafe_paths {
            return None;
        }
        if is_absolute_path(path) {
            return Some(format!("/path: absolute path {path:?} is not allowed"));
        }
        if path.split(['/', '\\']).any(|segment| segment == "..") {
            return Some(format!("/path: {path:?} must not contain \"..\" segments"));
        }
        None
    }
}

impl ResourceFactory for ProfileFactory {
    fn create(&self, raw: &Descriptor) -> ResourceResult<Box<dyn Resource>> {
        Ok(Box::new(self.build(raw)?))
    }
}

fn violation(details: Vec<String>) -> ResourceError {
    ResourceError::ProfileViolation {
        count: details.len(),
        details,
    }
}

fn pointer_or_root(pointer: &str) -> &str {
    if pointer.is_empty() {
        "/"
    } else {
        pointer
    }
}

fn is_remote_path(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

fn is_absolute_path(path: &str) -> bool {
    let bytes = path.as_bytes();
    path.starts_with('/')
        || path.starts_with('\\')
        || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
}
