//! # Package — Descriptor and Resources in Lockstep
//!
//! [`Package`] owns the raw descriptor, the materialized resources built
//! from `descriptor["resources"]`, and the factory that built them.
//!
//! ## Invariant
//!
//! `resources.len() == descriptor["resources"].len()` and, for every index
//! `i`, `resources[i]` was built from `descriptor["resources"][i]`. Neither
//! collection is reachable mutably from outside this module; `add_resource`,
//! `remove_resource`, and `update` are the only ways to change them, and
//! each one runs every fallible step before touching either collection.

use std::fmt;

use datapkg_core::{Descriptor, Resource, SharedFactory, RESOURCES_PROPERTY};
use serde_json::Value;

use crate::error::{PackageError, PackageResult};
use crate::validation::materialize;

/// A data package: a descriptor plus the resources it describes.
#[derive(Default)]
pub struct Package {
    descriptor: Descriptor,
    resources: Vec<Box<dyn Resource>>,
    factory: Option<SharedFactory>,
}

impl fmt::Debug for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Package")
            .field("descriptor", &self.descriptor)
            .field("resources", &self.resources)
            .field("has_factory", &self.factory.is_some())
            .finish()
    }
}

impl Package {
    /// An empty package that builds resources with `factory`.
    ///
    /// The descriptor gains a `resources` array on the first
    /// [`add_resource`](Self::add_resource).
    pub fn new(factory: SharedFactory) -> Self {
        Self {
            descriptor: Descriptor::new(),
            resources: Vec::new(),
            factory: Some(factory),
        }
    }

    /// Build a package from an in-memory descriptor.
    ///
    /// The descriptor is moved into the package as-is; properties other
    /// than `resources` are kept verbatim.
    ///
    /// # Errors
    ///
    /// Fails if `resources` is missing, not an array, empty, contains a
    /// non-object, or contains an element the factory rejects.
    pub fn from_descriptor(descriptor: Descriptor, factory: SharedFactory) -> PackageResult<Self> {
        let resources = materialize(&descriptor, factory.as_ref())?;
        tracing::debug!(resources = resources.len(), "built package from descriptor");
        Ok(Self {
            descriptor,
            resources,
            factory: Some(factory),
        })
    }

    /// Replace the factory used by later mutations.
    ///
    /// Resources already in the package are not rebuilt.
    pub fn set_factory(&mut self, factory: SharedFactory) {
        self.factory = Some(factory);
    }

    /// Whether a factory is configured.
    pub fn has_factory(&self) -> bool {
        self.factory.is_some()
    }

    /// Build a resource from `raw` and append it.
    ///
    /// Duplicate names are accepted; lookups and removals act on the first
    /// match.
    ///
    /// # Errors
    ///
    /// Returns [`PackageError::NoFactory`] without a factory, or
    /// [`PackageError::ResourceRejected`] if the factory rejects `raw`. The
    /// package is unchanged on error.
    pub fn add_resource(&mut self, raw: Descriptor) -> PackageResult<()> {
        let factory = self.factory.as_ref().ok_or(PackageError::NoFactory)?;
        let resource = factory
            .create(&raw)
            .map_err(PackageError::ResourceRejected)?;

        if self.get_resource(resource.name()).is_some() {
            tracing::debug!(resource = resource.name(), "adding resource with duplicate name");
        }

        let entries = self
            .descriptor
            .entry(RESOURCES_PROPERTY)
            .or_insert_with(|| Value::Array(Vec::new()));
        match entries.as_array_mut() {
            Some(entries) => entries.push(Value::Object(raw)),
            None => *entries = Value::Array(vec![Value::Object(raw)]),
        }

        tracing::debug!(
            resource = resource.name(),
            index = self.resources.len(),
            "added resource"
        );
        self.resources.push(resource);
        Ok(())
    }

    /// Remove the first resource named `name`, returning it.
    ///
    /// A missing name is not an error: the package is left untouched and
    /// `None` is returned.
    pub fn remove_resource(&mut self, name: &str) -> Option<Box<dyn Resource>> {
        let index = self.resources.iter().position(|r| r.name() == name)?;
        if let Some(entries) = self
            .descriptor
            .get_mut(RESOURCES_PROPERTY)
            .and_then(Value::as_array_mut)
        {
            if index < entries.len() {
                entries.remove(index);
            }
        }
        tracing::debug!(resource = name, index, "removed resource");
        Some(self.resources.remove(index))
    }

    /// The first resource named `name`.
    pub fn get_resource(&self, name: &str) -> Option<&dyn Resource> {
        self.resources
            .iter()
            .find(|r| r.name() == name)
            .map(|r| &**r)
    }

    /// Resource names in package order.
    pub fn resource_names(&self) -> Vec<&str> {
        self.resources.iter().map(|r| r.name()).collect()
    }

    /// Resources in package order.
    pub fn resources(&self) -> impl Iterator<Item = &dyn Resource> + '_ {
        self.resources.iter().map(|r| &**r)
    }

    /// Number of resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the package has no resources.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// A package-level property, e.g. `title` or `licenses`.
    ///
    /// `resources` is returned as stored; use [`descriptor`](Self::descriptor)
    /// for the form reconciled with the resources themselves.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.descriptor.get(key)
    }

    /// The current descriptor.
    ///
    /// Each `resources` element is regenerated from its resource's own
    /// [`Resource::descriptor`], so a resource that changed internally is
    /// reported as it is now rather than as it was added.
    ///
    /// # Errors
    ///
    /// Returns [`PackageError::ResourceDescriptor`] if a resource fails to
    /// produce its descriptor.
    pub fn descriptor(&self) -> PackageResult<Descriptor> {
        let mut descriptor = self.descriptor.clone();
        if self.resources.is_empty() && !descriptor.contains_key(RESOURCES_PROPERTY) {
            return Ok(descriptor);
        }
        let entries = self
            .resources
            .iter()
            .map(|r| {
                r.descriptor()
                    .map(Value::Object)
                    .map_err(|source| PackageError::ResourceDescriptor {
                        name: r.name().to_string(),
                        source,
                    })
            })
            .collect::<PackageResult<Vec<_>>>()?;
        descriptor.insert(RESOURCES_PROPERTY.to_string(), Value::Array(entries));
        Ok(descriptor)
    }

    /// Replace the whole package with one built from `descriptor`, using
    /// the current factory.
    ///
    /// # Errors
    ///
    /// Fails exactly as [`from_descriptor`](Self::from_descriptor) does, or
    /// with [`PackageError::NoFactory`]. On error the package keeps its
    /// previous descriptor and resources.
    pub fn update(&mut self, descriptor: Descriptor) -> PackageResult<()> {
        let factory = self.factory.as_ref().ok_or(PackageError::NoFactory)?;
        let resources = materialize(&descriptor, factory.as_ref())?;
        tracing::debug!(
            previous = self.resources.len(),
            resources = resources.len(),
            "updated package"
        );
        self.descriptor = descriptor;
        self.resources = resources;
        Ok(())
    }
}
