//! Command-line entry point for writing the browser integration test
//! environment module.

pub mod cli;
pub mod logging;

pub use cli::{execute, Cli};
pub use logging::init_tracing;
