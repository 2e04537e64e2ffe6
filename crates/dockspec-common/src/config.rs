//! Configuration model for rendering container definitions.
//!
//! Holds the defaults applied by the CLI before command-line overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DockspecError, Result};

/// Root configuration for dockspec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DockspecConfig {
    /// Network token used when none is given explicitly.
    pub default_network: String,
    /// Mode applied to volumes declared without one.
    pub default_volume_mode: String,
    /// Force-pull setting; `None` leaves the platform default.
    pub force_pull_image: Option<bool>,
    /// Privileged setting; `None` leaves the platform default.
    pub privileged: Option<bool>,
}

impl Default for DockspecConfig {
    fn default() -> Self {
        Self {
            default_network: crate::constants::NETWORK_BRIDGE.to_string(),
            default_volume_mode: crate::constants::VOLUME_MODE_RW.to_string(),
            force_pull_image: None,
            privileged: None,
        }
    }
}

impl DockspecConfig {
    /// Loads a configuration from a JSON file.
    ///
    /// Keys missing from the file keep their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// leaves a required token empty.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading configuration");

        let content = std::fs::read_to_string(path).map_err(|e| DockspecError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.default_network.trim().is_empty() {
            return Err(DockspecError::Config {
                message: "defaultNetwork must not be empty".to_string(),
            });
        }
        if self.default_volume_mode.trim().is_empty() {
            return Err(DockspecError::Config {
                message: "defaultVolumeMode must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn defaults_leave_tri_state_flags_unset() {
        let config = DockspecConfig::default();
        assert_eq!(config.default_network, "BRIDGE");
        assert_eq!(config.default_volume_mode, "RW");
        assert!(config.force_pull_image.is_none());
        assert!(config.privileged.is_none());
    }

    #[test]
    fn load_merges_partial_file_with_defaults() {
        let file = write_config(r#"{ "defaultNetwork": "HOST", "forcePullImage": true }"#);
        let config = DockspecConfig::load(file.path()).expect("load");
        assert_eq!(config.default_network, "HOST");
        assert_eq!(config.default_volume_mode, "RW");
        assert_eq!(config.force_pull_image, Some(true));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = DockspecConfig::load(Path::new("/nonexistent/dockspec.json"))
            .expect_err("missing file");
        match err {
            DockspecError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/dockspec.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_rejects_empty_network() {
        let file = write_config(r#"{ "defaultNetwork": " " }"#);
        let err = DockspecConfig::load(file.path()).expect_err("empty network");
        assert!(matches!(err, DockspecError::Config { .. }));
    }

    #[test]
    fn load_rejects_malformed_json() {
        let file = write_config("{ not json");
        let err = DockspecConfig::load(file.path()).expect_err("bad json");
        assert!(matches!(err, DockspecError::Serialization { .. }));
    }
}
