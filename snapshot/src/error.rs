use std::path::PathBuf;
use thiserror::Error;

/// A required variable that was absent from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingVariable {
    pub name: &'static str,
    pub hint: &'static str,
}

impl MissingVariable {
    /// One human-readable diagnostic line for this variable.
    pub fn diagnostic(&self) -> String {
        format!("${} must be defined (for example: {})", self.name, self.hint)
    }
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Missing required environment variables: {}", names(.missing))]
    MissingRequiredVariables { missing: Vec<MissingVariable> },

    #[error("Error writing to {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl SnapshotError {
    /// Lines to print for the person running the build. Missing variables
    /// get one line each; every other error is a single line.
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            SnapshotError::MissingRequiredVariables { missing } => {
                missing.iter().map(MissingVariable::diagnostic).collect()
            }
            other => vec![other.to_string()],
        }
    }
}

fn names(missing: &[MissingVariable]) -> String {
    missing
        .iter()
        .map(|m| m.name)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;
