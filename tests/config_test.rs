// tests/config_test.rs
use ci_version::config::{load_config, parse_config, Config};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.environment.git_ref, "GITHUB_REF");
    assert_eq!(config.manifest.path, "package.json");
    assert!(config.behavior.emit_outputs);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[environment]
run_number = "CI_PIPELINE_IID"

[manifest]
path = "app/package.json"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.environment.run_number, "CI_PIPELINE_IID");
    assert_eq!(config.environment.ci, "CI");
    assert_eq!(config.manifest.path, "app/package.json");
}

#[test]
fn test_load_fixture() {
    let config =
        load_config(Some("tests/fixtures/civersion.toml")).expect("Failed to load test config");
    assert_eq!(config.environment.ci, "BUILDKITE");
    assert_eq!(config.environment.head_ref, "BUILD_HEAD_REF");
    assert_eq!(config.environment.output, "GITHUB_OUTPUT");
    assert_eq!(config.manifest.path, "web/package.json");
    assert!(!config.behavior.emit_outputs);
}

#[test]
fn test_unknown_types_rejected() {
    assert!(parse_config("[behavior]\nemit_outputs = \"sometimes\"").is_err());
}
