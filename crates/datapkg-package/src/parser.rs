//! Stream parsing for package descriptors.
//!
//! JSON and YAML input both decode into the JSON value model first, then
//! go through [`Package::from_descriptor`]. Syntax errors surface as
//! [`PackageError::Json`] / [`PackageError::Yaml`]; a document that parses
//! but is not an object surfaces as [`PackageError::NotAnObject`].

use std::io::Read;

use datapkg_core::{json_type_name, Descriptor, SharedFactory};
use serde_json::Value;

use crate::error::{PackageError, PackageResult};
use crate::package::Package;

/// Read a JSON package descriptor from `reader`.
///
/// # Errors
///
/// Returns [`PackageError::Json`] on malformed input, otherwise fails as
/// [`Package::from_descriptor`] does.
pub fn from_reader<R: Read>(reader: R, factory: SharedFactory) -> PackageResult<Package> {
    let value: Value = serde_json::from_reader(reader)?;
    Package::from_descriptor(into_descriptor(value)?, factory)
}

/// Parse a JSON package descriptor from a string.
pub fn from_str(input: &str, factory: SharedFactory) -> PackageResult<Package> {
    let value: Value = serde_json::from_str(input)?;
    Package::from_descriptor(into_descriptor(value)?, factory)
}

/// Parse a JSON package descriptor from bytes.
pub fn from_slice(input: &[u8], factory: SharedFactory) -> PackageResult<Package> {
    let value: Value = serde_json::from_slice(input)?;
    Package::from_descriptor(into_descriptor(value)?, factory)
}

/// Read a YAML package descriptor from `reader`.
///
/// # Errors
///
/// Returns [`PackageError::Yaml`] on malformed input, otherwise fails as
/// [`Package::from_descriptor`] does.
pub fn from_yaml_reader<R: Read>(reader: R, factory: SharedFactory) -> PackageResult<Package> {
    let yaml: serde_yaml::Value = serde_yaml::from_reader(reader)?;
    Package::from_descriptor(into_descriptor(yaml_to_json_value(yaml))?, factory)
}

/// Parse a YAML package descriptor from a string.
pub fn from_yaml_str(input: &str, factory: SharedFactory) -> PackageResult<Package> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(input)?;
    Package::from_descriptor(into_descriptor(yaml_to_json_value(yaml))?, factory)
}

/// Unwrap a top-level object.
pub(crate) fn into_descriptor(value: Value) -> PackageResult<Descriptor> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(PackageError::NotAnObject {
            found: json_type_name(&other),
        }),
    }
}

/// Convert a YAML value into the JSON value model.
///
/// Tags are stripped, non-string mapping keys are stringified, and
/// non-finite floats become `null`.
fn yaml_to_json_value(yaml: serde_yaml::Value) -> Value {
    match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map_or(Value::Null, Value::Number)
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Value::Array(seq.into_iter().map(yaml_to_json_value).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let mut obj = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    serde_yaml::Value::Null => "null".to_string(),
                    other => format!("{other:?}"),
                };
                obj.insert(key, yaml_to_json_value(v));
            }
            Value::Object(obj)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(tagged.value),
    }
}
