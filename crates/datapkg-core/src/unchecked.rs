//! # Unchecked Resources
//!
//! The reference [`Resource`] implementation. It accepts any descriptor
//! with a non-empty string `name` and stores the descriptor untouched.
//! Useful for code-built packages and for tests; callers who need the
//! Data Resource profile enforced use `datapkg-profile` instead.

use crate::descriptor::{descriptor_name, Descriptor};
use crate::error::{ResourceError, ResourceResult};
use crate::resource::{Resource, ResourceFactory};

/// A resource that only knows its name and raw descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct UncheckedResource {
    name: String,
    descriptor: Descriptor,
}

impl UncheckedResource {
    /// Build a resource from a raw descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingName`] if `name` is absent, not a
    /// string, or empty.
    pub fn from_descriptor(descriptor: Descriptor) -> ResourceResult<Self> {
        let name = match descriptor_name(&descriptor) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(ResourceError::MissingName),
        };
        Ok(Self { name, descriptor })
    }
}

impl Resource for UncheckedResource {
    fn name(&self) -> &str {
        &self.name
    }

    fn descriptor(&self) -> ResourceResult<Descriptor> {
        Ok(self.descriptor.clone())
    }
}

/// Factory producing [`UncheckedResource`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct UncheckedFactory;

impl ResourceFactory for UncheckedFactory {
    fn create(&self, raw: &Descriptor) -> ResourceResult<Box<dyn Resource>> {
        Ok(Box::new(UncheckedResource::from_descriptor(raw.clone())?))
    }
}
