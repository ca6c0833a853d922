use anyhow::{Context, Result};
use std::path::Path;

use super::schema::Manifest;

pub struct ManifestLoader;

impl ManifestLoader {
    /// Load a manifest from disk, picking the parser by file extension:
    /// `.json` is parsed as JSON, anything else as YAML.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Manifest> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest file: {:?}", path))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::load_from_json(&content)
        } else {
            Self::load_from_yaml(&content)
        }
    }

    pub fn load_from_yaml(content: &str) -> Result<Manifest> {
        let manifest: Manifest =
            serde_yaml::from_str(content).context("Failed to parse YAML manifest")?;

        Ok(manifest)
    }

    pub fn load_from_json(content: &str) -> Result<Manifest> {
        let manifest: Manifest =
            serde_json::from_str(content).context("Failed to parse JSON manifest")?;

        Ok(manifest)
    }
}
