//! # Configuration Tests
//!
//! Verifies defaults, partial JSON documents and loading errors.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rvsim_isagen::{GeneratorConfig, IsaError, PrivilegeFlags};
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = GeneratorConfig::default();
    assert_eq!(config.name, "core");
    assert_eq!(config.isa, "rv32imfc");
    assert_eq!(config.build_dir, PathBuf::from("build"));
    assert_eq!(config.privilege, PrivilegeFlags::ALL);
    assert!(!config.uncompressed_labels);
    assert!(config.extensions.is_empty());
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = GeneratorConfig::from_json_str("{}").unwrap();
    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn test_partial_document() {
    let config = GeneratorConfig::from_json_str(
        r#"{
            "name": "fc",
            "isa": "rv32imfcXpulpv2",
            "trap_return": false,
            "uncompressed_labels": true,
            "extensions": ["pulpv2", "f16"]
        }"#,
    )
    .unwrap();
    assert_eq!(config.name, "fc");
    assert_eq!(config.isa, "rv32imfcXpulpv2");
    assert_eq!(config.build_dir, PathBuf::from("build"));
    assert_eq!(
        config.privilege,
        PrivilegeFlags {
            privileged: true,
            trap_return: false,
            supervisor_mmu: true,
        }
    );
    assert!(config.uncompressed_labels);
    assert_eq!(config.extensions, ["pulpv2", "f16"]);
}

#[test]
fn test_serialization_round_trip() {
    let config = GeneratorConfig {
        privilege: PrivilegeFlags::NONE,
        extensions: vec!["v".to_owned()],
        ..GeneratorConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"supervisor_mmu\":false"));
    assert_eq!(GeneratorConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_malformed_json_is_a_config_error() {
    let err = GeneratorConfig::from_json_str("{ \"isa\": 32 }").unwrap_err();
    assert!(matches!(err, IsaError::Config(_)), "{err}");
}

#[test]
fn test_from_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("isa.json");
    fs::write(&path, r#"{ "isa": "rv64imafdc", "build_dir": "out" }"#).unwrap();

    let config = GeneratorConfig::from_path(&path).unwrap();
    assert_eq!(config.isa, "rv64imafdc");
    assert_eq!(config.build_dir, PathBuf::from("out"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = GeneratorConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, IsaError::Io { path: ref p, .. } if *p == path));
}

#[test]
fn test_privilege_flags_any() {
    assert!(PrivilegeFlags::ALL.any());
    assert!(!PrivilegeFlags::NONE.any());
    assert_eq!(PrivilegeFlags::default(), PrivilegeFlags::ALL);
    let only_smmu = PrivilegeFlags {
        supervisor_mmu: true,
        ..PrivilegeFlags::NONE
    };
    assert!(only_smmu.any());
}
