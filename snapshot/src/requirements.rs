//! Environment variables the browser integration tests depend on.
//!
//! Two variables are required (`ACCESS_TOKEN`, `COMPANY_ID`) and one is
//! optional with a default (`REACTOR_URL`). A variable set to the empty
//! string is treated the same as an unset one.

use crate::error::{MissingVariable, SnapshotError, SnapshotResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Production Launch service, used when `REACTOR_URL` is not set.
pub const DEFAULT_REACTOR_URL: &str = "https://reactor.adobe.io";

pub const ACCESS_TOKEN: EnvironmentRequirement = EnvironmentRequirement {
    name: "ACCESS_TOKEN",
    required: true,
    default: None,
    hint: "export ACCESS_TOKEN='eyJiOi...(lots more here)....YiHkRLQ'",
};

pub const COMPANY_ID: EnvironmentRequirement = EnvironmentRequirement {
    name: "COMPANY_ID",
    required: true,
    default: None,
    hint: "export COMPANY_ID=CO1234567890abcdef1234567890abcdef",
};

pub const REACTOR_URL: EnvironmentRequirement = EnvironmentRequirement {
    name: "REACTOR_URL",
    required: false,
    default: Some(DEFAULT_REACTOR_URL),
    hint: "export REACTOR_URL=https://reactor.adobe.io",
};

/// Every variable captured into the generated module, in output order.
pub const REQUIREMENTS: [EnvironmentRequirement; 3] = [ACCESS_TOKEN, COMPANY_ID, REACTOR_URL];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentRequirement {
    pub name: &'static str,
    pub required: bool,
    pub default: Option<&'static str>,
    /// Example shell line shown when a required variable is missing.
    pub hint: &'static str,
}

/// Read-only view of a set of environment variables.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;

    /// Like [`EnvSource::var`], but empty values count as absent.
    fn non_empty(&self, name: &str) -> Option<String> {
        self.var(name).filter(|value| !value.is_empty())
    }
}

/// The environment of the running process. Values that are not valid
/// unicode are reported as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| value.to_string())
    }
}

/// Outcome of checking the required variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub missing: Vec<MissingVariable>,
}

impl ValidationResult {
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    pub fn missing_names(&self) -> Vec<&'static str> {
        self.missing.iter().map(|m| m.name).collect()
    }

    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn into_result(self) -> SnapshotResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SnapshotError::MissingRequiredVariables {
                missing: self.missing,
            })
        }
    }
}

/// Check every required variable, collecting all that are missing rather
/// than stopping at the first.
pub fn validate(source: &dyn EnvSource) -> ValidationResult {
    let missing = REQUIREMENTS
        .iter()
        .filter(|req| req.required && source.non_empty(req.name).is_none())
        .map(|req| MissingVariable {
            name: req.name,
            hint: req.hint,
        })
        .collect();

    ValidationResult { missing }
}

/// The three values the browser tests read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ReactorEnvironment {
    pub access_token: String,
    pub company_id: String,
    pub reactor_url: String,
}

impl ReactorEnvironment {
    /// Validate `source` and resolve the values, falling back to
    /// `default_reactor_url` when `REACTOR_URL` is unset.
    pub fn resolve(source: &dyn EnvSource, default_reactor_url: &str) -> SnapshotResult<Self> {
        validate(source).into_result()?;

        let reactor_url = match source.non_empty(REACTOR_URL.name) {
            Some(url) => url,
            None => {
                debug!(
                    "{} not set, using default {}",
                    REACTOR_URL.name, default_reactor_url
                );
                default_reactor_url.to_string()
            }
        };

        Ok(Self {
            access_token: source.non_empty(ACCESS_TOKEN.name).unwrap_or_default(),
            company_id: source.non_empty(COMPANY_ID.name).unwrap_or_default(),
            reactor_url,
        })
    }

    /// Resolve from `source` using the production Launch service as the
    /// default URL.
    pub fn from_source(source: &dyn EnvSource) -> SnapshotResult<Self> {
        Self::resolve(source, DEFAULT_REACTOR_URL)
    }
}
