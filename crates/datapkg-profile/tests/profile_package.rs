//! Integration test: packages built with the profile factory.

use std::sync::Arc;

use datapkg_core::{Descriptor, SharedFactory};
use datapkg_package::{from_str, valid, ErrorKind, Package, PackageError};
use datapkg_profile::{ProfileConfig, ProfileFactory};
use serde_json::{json, Value};

fn strict() -> SharedFactory {
    Arc::new(ProfileFactory::new(ProfileConfig::default()).unwrap())
}

fn desc(value: Value) -> Descriptor {
    value.as_object().cloned().unwrap()
}

#[test]
fn loads_conforming_package() {
    let input = r#"{
        "name": "world-cities",
        "resources": [
            {"name": "cities", "path": "data/cities.csv", "format": "csv"},
            {"name": "codes", "data": [["fr", "France"], ["de", "Germany"]]}
        ]
    }"#;
    let p = from_str(input, strict()).unwrap();
    assert_eq!(p.resource_names(), vec!["cities", "codes"]);
    assert_eq!(p.property("name"), Some(&json!("world-cities")));
}

#[test]
fn reports_index_of_offending_resource() {
    let d = desc(json!({
        "resources": [
            {"name": "ok", "path": "ok.csv"},
            {"name": "bad", "path": "../escape.csv"}
        ]
    }));
    let factory = ProfileFactory::new(ProfileConfig::default()).unwrap();
    assert!(!valid(&d, &factory));

    let err = Package::from_descriptor(d, strict()).unwrap_err();
    assert!(matches!(err, PackageError::InvalidResource { index: 1, .. }));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn add_resource_enforces_profile() {
    let mut p = Package::new(strict());
    p.add_resource(desc(json!({"name": "first", "path": "first.csv"})))
        .unwrap();

    let err = p
        .add_resource(desc(json!({"name": "Second", "path": "second.csv"})))
        .unwrap_err();
    assert!(matches!(err, PackageError::ResourceRejected(_)));
    assert_eq!(p.resource_names(), vec!["first"]);
    assert_eq!(
        p.descriptor().unwrap()["resources"],
        json!([{"name": "first", "path": "first.csv"}])
    );
}

#[test]
fn config_section_drives_factory() {
    let config = ProfileConfig::from_value(json!({"allow_remote_paths": false})).unwrap();
    let factory = ProfileFactory::new(config).unwrap();
    let remote = desc(json!({"resources": [{"name": "r", "path": "https://example.com/r.csv"}]}));
    assert!(!valid(&remote, &factory));

    let open = ProfileFactory::new(ProfileConfig::default()).unwrap();
    assert!(valid(&remote, &open));
}

#[test]
fn remote_resources_are_flagged() {
    let factory = ProfileFactory::new(ProfileConfig::default()).unwrap();
    let remote = factory
        .check(&desc(json!({"name": "r", "path": "https://example.com/r.csv"})))
        .unwrap();
    assert!(remote.is_remote());
    assert!(matches!(remote, datapkg_profile::ResourceSource::Paths(ref p) if p.len() == 1));
}

#[test]
fn permissive_config_keeps_name_pattern() {
    let factory: SharedFactory = Arc::new(ProfileFactory::new(ProfileConfig::permissive()).unwrap());
    let mut p = Package::new(factory);
    let err = p
        .add_resource(desc(json!({"name": "Bad Name!", "path": "a.csv"})))
        .unwrap_err();
    assert!(matches!(
        err,
        PackageError::ResourceRejected(datapkg_core::ResourceError::InvalidName { .. })
    ));
    assert!(p.is_empty());
}
