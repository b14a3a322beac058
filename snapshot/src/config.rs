use crate::error::{SnapshotError, SnapshotResult};
use crate::requirements::DEFAULT_REACTOR_URL;
use std::path::PathBuf;

/// Where the generated module is written when no override is given.
pub const DEFAULT_OUTPUT_PATH: &str = "./test/integration/globals-for-browser.js";

#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    pub output_path: PathBuf,
    pub default_reactor_url: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            default_reactor_url: DEFAULT_REACTOR_URL.to_string(),
        }
    }
}

impl SnapshotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_default_reactor_url(mut self, url: impl Into<String>) -> Self {
        self.default_reactor_url = url.into();
        self
    }

    pub fn validate(&self) -> SnapshotResult<()> {
        if self.output_path.as_os_str().is_empty() {
            return Err(SnapshotError::InvalidConfig {
                message: "Output path cannot be empty".to_string(),
            });
        }

        if self.default_reactor_url.is_empty() {
            return Err(SnapshotError::InvalidConfig {
                message: "Default Reactor URL cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SnapshotConfig::default();
        assert_eq!(
            config.output_path,
            PathBuf::from("./test/integration/globals-for-browser.js")
        );
        assert_eq!(config.default_reactor_url, "https://reactor.adobe.io");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SnapshotConfig::new()
            .with_output_path("/tmp/out.js")
            .with_default_reactor_url("https://reactor-qe.example.com");

        assert_eq!(config.output_path, PathBuf::from("/tmp/out.js"));
        assert_eq!(config.default_reactor_url, "https://reactor-qe.example.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = SnapshotConfig::default();

        config.output_path = PathBuf::new();
        assert!(matches!(
            config.validate(),
            Err(SnapshotError::InvalidConfig { .. })
        ));

        config.output_path = PathBuf::from("out.js");
        config.default_reactor_url = String::new();
        assert!(config.validate().is_err());
    }
}
