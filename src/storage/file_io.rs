//! File reading utilities
//!
//! Snapshot and settings files are JSON or YAML; the format is chosen from
//! the file extension.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::BudgetwiseError;

/// Supported on-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Pick a format from a path's extension; anything that isn't YAML is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, BudgetwiseError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| BudgetwiseError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| BudgetwiseError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read a JSON or YAML snapshot document
///
/// A missing file is a snapshot not-found error; a document that does not
/// parse is a snapshot error naming the file.
pub fn read_document<T, P>(path: P) -> Result<T, BudgetwiseError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(BudgetwiseError::snapshot_not_found(
            path.display().to_string(),
        ));
    }

    let file = File::open(path)
        .map_err(|e| BudgetwiseError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    match FileFormat::from_path(path) {
        FileFormat::Json => serde_json::from_reader(reader).map_err(|e| {
            BudgetwiseError::Snapshot(format!("Failed to parse {}: {}", path.display(), e))
        }),
        FileFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| {
            BudgetwiseError::Snapshot(format!("Failed to parse {}: {}", path.display(), e))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_json_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let sample: Sample = read_json(temp_dir.path().join("nope.json")).unwrap();
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn test_read_document_json_and_yaml() {
        let temp_dir = TempDir::new().unwrap();

        let json_path = temp_dir.path().join("sample.json");
        std::fs::write(&json_path, r#"{"name": "a", "value": 1}"#).unwrap();
        let from_json: Sample = read_document(&json_path).unwrap();
        assert_eq!(from_json.value, 1);

        let yaml_path = temp_dir.path().join("sample.YML");
        std::fs::write(&yaml_path, "name: b\nvalue: 2\n").unwrap();
        let from_yaml: Sample = read_document(&yaml_path).unwrap();
        assert_eq!(from_yaml.name, "b");
    }

    #[test]
    fn test_read_document_missing_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_document::<Sample, _>(temp_dir.path().join("missing.json")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_document_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_document::<Sample, _>(&path).unwrap_err();
        assert!(matches!(err, BudgetwiseError::Snapshot(_)));
        assert!(err.to_string().starts_with("Snapshot error: Failed to parse"));
    }

    #[test]
    fn test_read_document_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        std::fs::write(&path, "name: [unclosed
").unwrap();
        let err = read_document::<Sample, _>(&path).unwrap_err();
        assert!(matches!(err, BudgetwiseError::Snapshot(_)));
    }
}
