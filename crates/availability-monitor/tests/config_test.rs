//! Integration tests for configuration loading

use availability::ReportFormat;
use availability_monitor::{AvailabilityMonitor, ConfigError, ConfigFormat, load_endpoints};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn config_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.yaml");

    let err = load_endpoints(&path).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(ref p) if p == &path));
}

#[test]
fn test_directory_is_rejected() {
    let dir = TempDir::new().unwrap();

    let err = load_endpoints(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::IsDirectory(_)));
    assert!(err.to_string().ends_with("is not a file."));
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let file = config_file(".yaml", "- url: [unterminated\n");

    let err = load_endpoints(file.path()).unwrap_err();
    assert!(err.is_parse_error());
}

#[test]
fn test_empty_document_is_parse_error() {
    let file = config_file(".yaml", "");
    let err = load_endpoints(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyDocument(ConfigFormat::Yaml)));
    assert!(err.is_parse_error());
}

#[test]
fn test_comment_only_document_is_parse_error() {
    let file = config_file(".yml", "# endpoints go here\n");
    assert!(load_endpoints(file.path()).unwrap_err().is_parse_error());
}

#[test]
fn test_yaml_file_loads_in_declaration_order() {
    let file = config_file(
        ".yaml",
        r#"
- url: https://b.example.com/
- url: https://a.example.com/
  method: HEAD
- url: not a url
"#,
    );

    let endpoints = load_endpoints(file.path()).unwrap();
    let urls: Vec<_> = endpoints.iter().map(|e| e.url.as_str()).collect();
    assert_eq!(urls, ["https://b.example.com/", "https://a.example.com/", "not a url"]);
    assert_eq!(endpoints[1].method, "HEAD");
}

#[test]
fn test_json_file_loads() {
    let file = config_file(
        ".json",
        r#"[{"url": "https://a.example.com/", "headers": {"accept": "application/json"}}]"#,
    );

    let monitor = AvailabilityMonitor::from_config_file(file.path(), ReportFormat::Json).unwrap();
    assert_eq!(monitor.endpoints().len(), 1);
    assert_eq!(
        monitor.endpoints()[0].headers.as_ref().unwrap()["accept"],
        "application/json"
    );
}

#[test]
fn test_empty_list_is_valid() {
    let file = config_file(".yaml", "[]\n");
    assert!(load_endpoints(file.path()).unwrap().is_empty());
}
