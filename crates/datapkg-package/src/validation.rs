//! # Package Descriptor Validation
//!
//! A package descriptor is valid when:
//!
//! 1. it has a `resources` property,
//! 2. that property is a non-empty array,
//! 3. every element is an object, and
//! 4. the resource factory accepts every element.
//!
//! Checks run in that order and stop at the first failure. Construction
//! and `Package::update` share [`materialize`], so each resource is built
//! exactly once and the checks cannot drift apart.

use datapkg_core::{json_type_name, Descriptor, Resource, ResourceFactory, RESOURCES_PROPERTY};
use serde_json::Value;

use crate::error::{PackageError, PackageResult};

/// Check the shape of the `resources` property and return its elements.
pub(crate) fn resource_entries(descriptor: &Descriptor) -> PackageResult<&[Value]> {
    let resources = descriptor
        .get(RESOURCES_PROPERTY)
        .ok_or(PackageError::MissingResources)?;
    let entries = resources
        .as_array()
        .ok_or_else(|| PackageError::InvalidResourcesType {
            found: json_type_name(resources),
        })?;
    if entries.is_empty() {
        return Err(PackageError::EmptyResources);
    }
    Ok(entries)
}

/// Validate `descriptor` and build one resource per `resources` element,
/// in order.
pub(crate) fn materialize(
    descriptor: &Descriptor,
    factory: &dyn ResourceFactory,
) -> PackageResult<Vec<Box<dyn Resource>>> {
    resource_entries(descriptor)?
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let raw = entry
                .as_object()
                .ok_or_else(|| PackageError::InvalidResourceEntry {
                    index,
                    found: json_type_name(entry),
                })?;
            factory
                .create(raw)
                .map_err(|source| PackageError::InvalidResource { index, source })
        })
        .collect()
}

/// Validate a package descriptor against `factory`.
///
/// # Errors
///
/// Returns the first structural or validation failure. Resource-level
/// failures carry the index of the offending element.
pub fn validate(descriptor: &Descriptor, factory: &dyn ResourceFactory) -> PackageResult<()> {
    materialize(descriptor, factory).map(|_| ())
}

/// Whether `descriptor` would produce a package with `factory`.
pub fn valid(descriptor: &Descriptor, factory: &dyn ResourceFactory) -> bool {
    validate(descriptor, factory).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use datapkg_core::{ResourceError, ResourceResult, UncheckedFactory};
    use serde_json::json;

    fn reject_all(_: &Descriptor) -> ResourceResult<Box<dyn Resource>> {
        Err(ResourceError::Rejected("invalid".to_string()))
    }

    fn desc(value: Value) -> Descriptor {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn accepts_single_named_resource() {
        assert!(valid(&desc(json!({"resources": [{"name": "res"}]})), &UncheckedFactory));
    }

    #[test]
    fn rejects_empty_map() {
        assert!(!valid(&Descriptor::new(), &UncheckedFactory));
        assert!(matches!(
            validate(&Descriptor::new(), &UncheckedFactory),
            Err(PackageError::MissingResources)
        ));
    }

    #[test]
    fn rejects_non_array_resources() {
        let err = validate(&desc(json!({"resources": 10})), &UncheckedFactory).unwrap_err();
        assert!(matches!(err, PackageError::InvalidResourcesType { found: "number" }));
    }

    #[test]
    fn rejects_empty_resources() {
        let err = validate(&desc(json!({"resources": []})), &UncheckedFactory).unwrap_err();
        assert!(matches!(err, PackageError::EmptyResources));
    }

    #[test]
    fn rejects_non_object_entry_with_index() {
        let err = validate(
            &desc(json!({"resources": [{"name": "ok"}, 1]})),
            &UncheckedFactory,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PackageError::InvalidResourceEntry { index: 1, found: "number" }
        ));
    }

    #[test]
    fn rejects_factory_failure_with_index() {
        let err = validate(&desc(json!({"resources": [{}]})), &reject_all).unwrap_err();
        assert!(matches!(err, PackageError::InvalidResource { index: 0, .. }));
    }

    #[test]
    fn materialize_preserves_order() {
        let d = desc(json!({"resources": [{"name": "b"}, {"name": "a"}, {"name": "c"}]}));
        let resources = materialize(&d, &UncheckedFactory).unwrap();
        let names: Vec<&str> = resources.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}
