//! Manifest loading.
//!
//! A manifest is the JSON hand-off from the template matcher:
//!
//! ```json
//! {
//!   "templates": [
//!     {
//!       "template": { "identity": "Acme.Console.CSharp", "groupIdentity": "Acme.Console", "language": "C#" },
//!       "dispositions": [ { "field": "shortName", "kind": "exact" } ]
//!     }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tplres_core::TemplateMatch;

/// Errors that can occur while loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    templates: Vec<TemplateMatch>,
}

/// Parse manifest content.
pub fn parse_manifest(content: &str) -> Result<Vec<TemplateMatch>, serde_json::Error> {
    let manifest: Manifest = serde_json::from_str(content)?;
    Ok(manifest.templates)
}

/// Read and parse a manifest file.
pub fn load_manifest(path: &Path) -> Result<Vec<TemplateMatch>, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let templates = parse_manifest(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        templates = templates.len(),
        "Loaded manifest"
    );
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use tplres_core::Candidate;

    const MANIFEST: &str = r#"{
        "templates": [
            {
                "template": {"identity": "Acme.Console.CSharp", "groupIdentity": "Acme.Console", "language": "C#"},
                "dispositions": [{"field": "shortName", "kind": "exact"}]
            },
            {
                "template": {"identity": "Acme.Console.FSharp", "groupIdentity": "Acme.Console", "language": "F#"}
            }
        ]
    }"#;

    #[test]
    fn test_parse_manifest() {
        let templates = parse_manifest(MANIFEST).unwrap();

        assert_eq!(templates.len(), 2);
        assert!(templates[0].is_invokable());
        assert!(templates[1].dispositions.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        assert!(parse_manifest(r#"{"templates": [], "extra": 1}"#).is_err());
    }

    #[test]
    fn test_load_manifest_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matches.json");
        fs::write(&path, MANIFEST).unwrap();

        let templates = load_manifest(&path).unwrap();
        assert_eq!(templates[1].identity(), "Acme.Console.FSharp");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_manifest(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ManifestError::Read { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_manifest(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
