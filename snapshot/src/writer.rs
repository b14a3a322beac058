//! Validate, stamp, render and persist the environment snapshot.

use crate::config::SnapshotConfig;
use crate::error::{SnapshotError, SnapshotResult};
use crate::render::{render, GeneratedArtifact};
use crate::requirements::{EnvSource, ReactorEnvironment};
use crate::timestamp::{to_local_iso_string, Clock, SystemClock};
use async_trait::async_trait;
use tracing::{info, warn};

/// Destination for a rendered artifact.
#[async_trait]
pub trait ArtifactSink: Send + Sync {
    async fn write(&self, artifact: &GeneratedArtifact) -> SnapshotResult<()>;
}

/// Writes the artifact to its path, replacing any existing file. Parent
/// directories are not created.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

#[async_trait]
impl ArtifactSink for FileSink {
    async fn write(&self, artifact: &GeneratedArtifact) -> SnapshotResult<()> {
        tokio::fs::write(artifact.path(), artifact.contents())
            .await
            .map_err(|source| SnapshotError::WriteFailure {
                path: artifact.path().to_path_buf(),
                source,
            })
    }
}

pub struct EnvironmentSnapshotWriter {
    config: SnapshotConfig,
    clock: Box<dyn Clock>,
}

impl EnvironmentSnapshotWriter {
    pub fn new(config: SnapshotConfig) -> Self {
        Self {
            config,
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    /// Validate `source` and render the artifact without touching the
    /// filesystem.
    pub fn prepare(&self, source: &dyn EnvSource) -> SnapshotResult<GeneratedArtifact> {
        self.config.validate()?;

        let env = ReactorEnvironment::resolve(source, &self.config.default_reactor_url)
            .inspect_err(|e| warn!("Environment validation failed: {}", e))?;

        let timestamp = to_local_iso_string(&self.clock.now());
        Ok(GeneratedArtifact::new(
            self.config.output_path.clone(),
            render(&timestamp, &env),
        ))
    }

    /// Prepare the artifact and hand it to `sink`. Nothing reaches the sink
    /// when validation fails.
    pub async fn run(
        &self,
        source: &dyn EnvSource,
        sink: &dyn ArtifactSink,
    ) -> SnapshotResult<GeneratedArtifact> {
        let artifact = self.prepare(source)?;
        sink.write(&artifact).await?;
        info!("Wrote {}", artifact.path().display());
        Ok(artifact)
    }
}

impl Default for EnvironmentSnapshotWriter {
    fn default() -> Self {
        Self::new(SnapshotConfig::default())
    }
}
