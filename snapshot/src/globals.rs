//! Process-wide, load-once slot for the integration test environment.
//!
//! The generated browser module fills its global slot only when it is
//! empty. [`ReactorGlobals`] gives native test code the same contract: the
//! first value installed wins and later installs observe it instead of
//! replacing it.

use crate::error::SnapshotResult;
use crate::requirements::{EnvSource, ReactorEnvironment};
use std::sync::OnceLock;

static GLOBAL: ReactorGlobals = ReactorGlobals::new();

/// A slot that can be populated once.
#[derive(Debug, Default)]
pub struct ReactorGlobals {
    slot: OnceLock<ReactorEnvironment>,
}

impl ReactorGlobals {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// The slot shared by the whole process.
    pub fn global() -> &'static ReactorGlobals {
        &GLOBAL
    }

    /// Populate the slot if it is empty and return its contents, which are
    /// `env` only if nothing was installed before.
    pub fn install(&self, env: ReactorEnvironment) -> &ReactorEnvironment {
        self.slot.get_or_init(|| env)
    }

    pub fn get(&self) -> Option<&ReactorEnvironment> {
        self.slot.get()
    }

    /// Return the installed value, resolving it from `source` on first use.
    /// A failed resolution leaves the slot empty.
    pub fn get_or_init_from(&self, source: &dyn EnvSource) -> SnapshotResult<&ReactorEnvironment> {
        if let Some(env) = self.slot.get() {
            return Ok(env);
        }
        let env = ReactorEnvironment::from_source(source)?;
        Ok(self.install(env))
    }
}
