//! Project document loading and saving

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::{parse_project_config, ProjectConfig};

/// File name written by `mappr-config init`
pub const DEFAULT_PROJECT_FILENAME: &str = "mappr-project.json";

/// On-disk formats a project document can be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
    Toml,
}

impl FileFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(FileFormat::Json),
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            "toml" => Ok(FileFormat::Toml),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load and validate a project document
pub fn load_project(path: &Path) -> Result<ProjectConfig> {
    let raw = load_raw(path)?;
    let project = parse_project_config(&raw)?;
    tracing::info!("Loaded project '{}' from {}", project.project_name, path.display());
    Ok(project)
}

/// Read a document without validating it
pub fn load_raw(path: &Path) -> Result<Value> {
    let format = FileFormat::from_path(path)?;
    if !path.exists() {
        return Err(Error::ConfigNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    parse_raw(&content, format)
}

/// Parse document text into an untyped value
pub fn parse_raw(content: &str, format: FileFormat) -> Result<Value> {
    let raw: Value = match format {
        FileFormat::Json => serde_json::from_str(content)?,
        FileFormat::Yaml => serde_yaml::from_str(content)?,
        FileFormat::Toml => toml::from_str(content)?,
    };
    Ok(raw)
}

/// Parse and validate document text
pub fn parse_project(content: &str, format: FileFormat) -> Result<ProjectConfig> {
    let raw = parse_raw(content, format)?;
    Ok(parse_project_config(&raw)?)
}

/// Serialize a project in the given format
pub fn to_string(project: &ProjectConfig, format: FileFormat) -> Result<String> {
    let content = match format {
        FileFormat::Json => serde_json::to_string_pretty(project)?,
        FileFormat::Yaml => serde_yaml::to_string(project)?,
        FileFormat::Toml => toml::to_string_pretty(project)?,
    };
    Ok(content)
}

/// Write a project, choosing the format from the extension
pub fn save_project(path: &Path, project: &ProjectConfig) -> Result<()> {
    let format = FileFormat::from_path(path)?;
    let content = to_string(project, format)?;
    fs::write(path, content)?;
    tracing::info!("Saved project '{}' to {}", project.project_name, path.display());
    Ok(())
}

/// The bundled sample project document
pub fn sample_project_content() -> &'static str {
    include_str!("sample_project.json")
}

pub fn sample_project() -> Result<ProjectConfig> {
    parse_project(sample_project_content(), FileFormat::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(FileFormat::from_path(&PathBuf::from("a.json")).unwrap(), FileFormat::Json);
        assert_eq!(FileFormat::from_path(&PathBuf::from("a.YML")).unwrap(), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(&PathBuf::from("a.toml")).unwrap(), FileFormat::Toml);
        assert!(matches!(
            FileFormat::from_path(&PathBuf::from("settings.js")),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_sample_parses() {
        let project = sample_project().unwrap();
        assert_eq!(project.snapshots.len(), 1);
    }
}
