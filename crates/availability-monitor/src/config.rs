//! Endpoint configuration loading

use availability::EndpointSpec;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file {} not found.", .0.display())]
    NotFound(PathBuf),

    #[error("Path '{}' is not a file.", .0.display())]
    IsDirectory(PathBuf),

    #[error("Error parsing YAML file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Error parsing JSON file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error parsing {0} file: document is empty")]
    EmptyDocument(ConfigFormat),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(#[from] std::io::Error),
}

impl ConfigError {
    /// Whether the document was read but could not be decoded.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ConfigError::Yaml(_) | ConfigError::Json(_) | ConfigError::EmptyDocument(_)
        )
    }
}

impl From<ConfigError> for common::Error {
    fn from(err: ConfigError) -> Self {
        common::Error::config(err)
    }
}

/// Document encoding, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigFormat::Yaml => write!(f, "YAML"),
            ConfigFormat::Json => write!(f, "JSON"),
        }
    }
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Decode an ordered endpoint list from `contents`.
///
/// A document with no value at all (empty, comments only, or `null`)
/// is rejected; an explicit empty list is accepted.
pub fn parse_endpoints(contents: &str, format: ConfigFormat) -> Result<Vec<EndpointSpec>, ConfigError> {
    let endpoints: Option<Vec<EndpointSpec>> = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(contents)?,
        ConfigFormat::Json => serde_json::from_str(contents)?,
    };
    endpoints.ok_or(ConfigError::EmptyDocument(format))
}

/// Load the endpoint list from a file.
pub fn load_endpoints(path: impl AsRef<Path>) -> Result<Vec<EndpointSpec>, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(ConfigError::IsDirectory(path.to_path_buf()));
    }

    tracing::info!("Loading configuration from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    let endpoints = parse_endpoints(&contents, ConfigFormat::from_path(path))?;
    tracing::info!(endpoints = endpoints.len(), "Configuration loaded");

    Ok(endpoints)
}
