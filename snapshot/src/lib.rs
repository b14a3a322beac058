//! Environment capture for the Reactor browser integration tests.
//!
//! Reads `ACCESS_TOKEN`, `COMPANY_ID` and `REACTOR_URL`, renders them into
//! `globals-for-browser.js` and writes that file before the bundler runs.

pub mod config;
pub mod error;
pub mod globals;
pub mod render;
pub mod requirements;
pub mod timestamp;
pub mod writer;

pub use config::{SnapshotConfig, DEFAULT_OUTPUT_PATH};
pub use error::{MissingVariable, SnapshotError, SnapshotResult};
pub use globals::ReactorGlobals;
pub use render::{render, GeneratedArtifact};
pub use requirements::{
    validate, EnvSource, EnvironmentRequirement, ProcessEnv, ReactorEnvironment,
    ValidationResult, DEFAULT_REACTOR_URL, REQUIREMENTS,
};
pub use timestamp::{to_local_iso_string, Clock, FixedClock, SystemClock};
pub use writer::{ArtifactSink, EnvironmentSnapshotWriter, FileSink};

pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::*;
    pub use crate::globals::*;
    pub use crate::render::*;
    pub use crate::requirements::*;
    pub use crate::timestamp::*;
    pub use crate::writer::*;
}
