//! # Resource Contracts
//!
//! The two seams between a package and the code that understands
//! individual resources:
//!
//! - [`Resource`] — a materialized, validated resource. It knows its name
//!   and can re-serialize itself into a raw descriptor.
//! - [`ResourceFactory`] — turns a raw descriptor into a [`Resource`] or
//!   rejects it. Any `Fn(&Descriptor) -> ResourceResult<Box<dyn Resource>>`
//!   closure is a factory.
//!
//! A factory must be pure with respect to its input: the same descriptor
//! is always accepted or always rejected. Packages call the factory during
//! validation, construction, and every add, and rely on the answers
//! agreeing.

use std::fmt;
use std::sync::Arc;

use crate::descriptor::Descriptor;
use crate::error::ResourceResult;

/// A materialized resource held by a package.
///
/// # Invariants
///
/// - `name()` is non-empty for every resource a factory hands out.
/// - `descriptor()` returns the authoritative raw form. A package rebuilds
///   its own descriptor from these values, so a resource that mutates
///   itself through interior mutability is reflected on the next read.
pub trait Resource: fmt::Debug + Send + Sync {
    /// The resource name, unique by convention but not by enforcement.
    fn name(&self) -> &str;

    /// Re-serialize the resource into its raw descriptor.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`](crate::ResourceError) if the resource
    /// cannot represent itself as JSON.
    fn descriptor(&self) -> ResourceResult<Descriptor>;
}

/// Builds validated resources from raw descriptors.
pub trait ResourceFactory: Send + Sync {
    /// Validate `raw` and build a resource from it.
    ///
    /// # Errors
    ///
    /// Any error is an outright rejection of the descriptor.
    fn create(&self, raw: &Descriptor) -> ResourceResult<Box<dyn Resource>>;
}

impl<F> ResourceFactory for F
where
    F: Fn(&Descriptor) -> ResourceResult<Box<dyn Resource>> + Send + Sync,
{
    fn create(&self, raw: &Descriptor) -> ResourceResult<Box<dyn Resource>> {
        self(raw)
    }
}

/// A factory shared between a package and its clones or replacements.
pub type SharedFactory = Arc<dyn ResourceFactory>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResourceError;
    use crate::unchecked::UncheckedResource;
    use serde_json::json;

    fn reject_all(_: &Descriptor) -> ResourceResult<Box<dyn Resource>> {
        Err(ResourceError::Rejected("closed for business".to_string()))
    }

    fn raw(value: serde_json::Value) -> Descriptor {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn plain_function_is_a_factory() {
        let factory: SharedFactory = Arc::new(reject_all);
        let err = factory.create(&raw(json!({"name": "res"}))).unwrap_err();
        assert_eq!(err, ResourceError::Rejected("closed for business".to_string()));
    }

    #[test]
    fn closure_is_a_factory() {
        let factory: SharedFactory = Arc::new(|d: &Descriptor| {
            UncheckedResource::from_descriptor(d.clone())
                .map(|r| Box::new(r) as Box<dyn Resource>)
        });
        let res = factory.create(&raw(json!({"name": "res"}))).unwrap();
        assert_eq!(res.name(), "res");
    }
}
