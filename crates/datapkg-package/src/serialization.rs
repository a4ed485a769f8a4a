//! serde adapters for [`Package`].
//!
//! Serialization writes the reconciled descriptor. Deserialization needs a
//! factory: the plain `Deserialize` impl uses [`UncheckedFactory`], and
//! [`PackageSeed`] carries any other factory through a
//! [`DeserializeSeed`].

use std::io::Write;
use std::sync::Arc;

use datapkg_core::{SharedFactory, UncheckedFactory};
use serde::de::{DeserializeSeed, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::PackageResult;
use crate::package::Package;
use crate::parser::into_descriptor;

impl Serialize for Package {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.descriptor()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Package {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        PackageSeed::new(Arc::new(UncheckedFactory)).deserialize(deserializer)
    }
}

/// Deserializes a [`Package`] whose resources are built by a chosen factory.
///
/// ```
/// use std::sync::Arc;
/// use serde::de::DeserializeSeed;
/// use datapkg_core::UncheckedFactory;
/// use datapkg_package::PackageSeed;
///
/// let mut de = serde_json::Deserializer::from_str(r#"{"resources":[{"name":"res"}]}"#);
/// let package = PackageSeed::new(Arc::new(UncheckedFactory)).deserialize(&mut de).unwrap();
/// assert_eq!(package.resource_names(), vec!["res"]);
/// ```
pub struct PackageSeed {
    factory: SharedFactory,
}

impl PackageSeed {
    /// A seed that builds resources with `factory`.
    pub fn new(factory: SharedFactory) -> Self {
        Self { factory }
    }
}

impl<'de> DeserializeSeed<'de> for PackageSeed {
    type Value = Package;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Package, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let descriptor = into_descriptor(value).map_err(serde::de::Error::custom)?;
        Package::from_descriptor(descriptor, self.factory).map_err(serde::de::Error::custom)
    }
}

impl Package {
    /// Write the descriptor as compact JSON.
    pub fn to_writer<W: Write>(&self, writer: W) -> PackageResult<()> {
        serde_json::to_writer(writer, &self.descriptor()?)?;
        Ok(())
    }

    /// Write the descriptor as indented JSON.
    pub fn to_writer_pretty<W: Write>(&self, writer: W) -> PackageResult<()> {
        serde_json::to_writer_pretty(writer, &self.descriptor()?)?;
        Ok(())
    }

    /// The descriptor as a compact JSON string.
    pub fn to_json_string(&self) -> PackageResult<String> {
        Ok(serde_json::to_string(&self.descriptor()?)?)
    }
}
