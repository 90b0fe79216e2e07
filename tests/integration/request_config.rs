//! Loading a generation request from TOML and JSON config files.

use cwgen::error::GenerateError;
use cwgen::request::{GenerationRequest, Toggle};
use std::path::PathBuf;

#[test]
fn test_load_from_toml() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("codegen.toml");
    std::fs::write(
        &path,
        r#"
outPath = "./types/"

[[contracts]]
name = "Wager"
schemaDir = "../schema"

[options.types]
enabled = true

[options.client]
enabled = true

[options.messageComposer]
enabled = true
"#,
    )
    .unwrap();

    let request = GenerationRequest::from_file(&path).unwrap();
    assert_eq!(request.contracts.len(), 1);
    assert_eq!(request.contracts[0].name, "Wager");
    assert_eq!(request.contracts[0].schema_dir, PathBuf::from("../schema"));
    assert_eq!(request.out_path, PathBuf::from("./types/"));
    assert_eq!(request.options.types, Toggle::ON);
    assert_eq!(request.options.client, Toggle::ON);
    assert_eq!(request.options.message_composer, Toggle::ON);
    assert_eq!(request.options.bundle, Toggle::OFF);
    assert_eq!(request.options.react_query, Toggle::OFF);
    assert_eq!(request.options.recoil, Toggle::OFF);
}

#[test]
fn test_load_from_json_with_ts_codegen_keys() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("codegen.json");
    std::fs::write(
        &path,
        r#"{
            "contracts": [{ "name": "Wager", "dir": "../schema" }],
            "outPath": "./types/",
            "options": { "types": { "enabled": true } }
        }"#,
    )
    .unwrap();

    let request = GenerationRequest::from_file(&path).unwrap();
    assert_eq!(request.contracts[0].schema_dir, PathBuf::from("../schema"));
    assert_eq!(request.options.types, Toggle::ON);
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("codegen.yaml");
    std::fs::write(&path, "outPath: ./types/").unwrap();
    assert!(matches!(
        GenerationRequest::from_file(&path),
        Err(GenerateError::Config(_))
    ));
}

#[test]
fn test_invalid_toml_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("codegen.toml");
    std::fs::write(&path, "contracts = not-a-value").unwrap();
    assert!(matches!(
        GenerationRequest::from_file(&path),
        Err(GenerateError::Config(_))
    ));
}
