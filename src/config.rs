use drift_camera::DriftSettings;
use serde::{Deserialize, Serialize};
use solar_system::scene::SceneSettings;
use starrynight::StarFieldSettings;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Everything the scene can be tuned with; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct OrreryConfig {
    pub scene: SceneSettings,
    pub stars: StarFieldSettings,
    pub camera: DriftSettings,
}

impl OrreryConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_yaml(&input)
    }

    pub fn from_yaml(input: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(input)?)
    }

    pub fn to_yaml(&self) -> Result<String, SettingsError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(OrreryConfig::from_yaml("{}").unwrap(), OrreryConfig::default());
    }

    #[test]
    fn dump_reads_back() {
        let config = OrreryConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(OrreryConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn overrides_are_applied() {
        let config = OrreryConfig::from_yaml(
            "stars:\n  count: 10\ncamera:\n  scroll-range: [-5, 5]\n",
        )
        .unwrap();
        assert_eq!(config.stars.count, 10);
        assert_eq!(config.camera.scroll_range, [-5.0, 5.0]);
        assert_eq!(config.scene, SceneSettings::default());
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = OrreryConfig::from_yaml("stars: [").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = OrreryConfig::from_path("/nonexistent/orrery.yaml").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
