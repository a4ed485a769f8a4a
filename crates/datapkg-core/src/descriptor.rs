//! # Descriptor Model
//!
//! A descriptor is a JSON object. Package descriptors and resource
//! descriptors share the same representation; only the `resources`
//! property of a package and the `name` property of a resource carry
//! meaning for this workspace. Every other property is opaque metadata.
//!
//! The workspace enables serde_json's `preserve_order` feature, so
//! [`Descriptor`] iterates in insertion order and re-encodes with the
//! property order it was decoded with.

use serde_json::{Map, Value};

/// An ordered mapping from property names to arbitrary JSON values.
pub type Descriptor = Map<String, Value>;

/// Package property holding the array of resource descriptors.
pub const RESOURCES_PROPERTY: &str = "resources";

/// Resource property holding the resource name.
pub const NAME_PROPERTY: &str = "name";

/// Short JSON type name for a value, for use in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read the `name` property of a resource descriptor, if it is a string.
pub fn descriptor_name(descriptor: &Descriptor) -> Option<&str> {
    descriptor.get(NAME_PROPERTY).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_names_cover_every_variant() {
        assert_eq!(json_type_name(&Value::Null), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(10)), "number");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }

    #[test]
    fn descriptor_name_requires_string() {
        let mut d = Descriptor::new();
        assert_eq!(descriptor_name(&d), None);
        d.insert(NAME_PROPERTY.to_string(), json!(7));
        assert_eq!(descriptor_name(&d), None);
        d.insert(NAME_PROPERTY.to_string(), json!("res"));
        assert_eq!(descriptor_name(&d), Some("res"));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let d: Descriptor = serde_json::from_str(r#"{"zeta":1,"alpha":2,"mid":3}"#).unwrap();
        let keys: Vec<&str> = d.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
