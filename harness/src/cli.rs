use clap::Parser;
use snapshot::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "write-reactor-environment")]
#[command(about = "Write the environment module used by the in-browser integration tests")]
#[command(
    long_about = "Write the environment module used by the in-browser integration tests.\n\n\
    Requires $ACCESS_TOKEN and $COMPANY_ID. $REACTOR_URL selects the Launch service \
    to test against and defaults to https://reactor.adobe.io."
)]
pub struct Cli {
    /// Destination of the generated module
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
    /// Print the module to stdout instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

impl Cli {
    pub fn config(&self) -> SnapshotConfig {
        SnapshotConfig::new().with_output_path(self.output.clone())
    }
}

/// Run one invocation against `source`, printing diagnostics to `stderr`.
///
/// Exits with failure on any validation, configuration or write error.
pub async fn execute(
    cli: &Cli,
    writer: &EnvironmentSnapshotWriter,
    source: &dyn EnvSource,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> ExitCode {
    let outcome = if cli.stdout {
        writer.prepare(source).and_then(|artifact| {
            stdout
                .write_all(artifact.contents().as_bytes())
                .map_err(|source| SnapshotError::WriteFailure {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
        })
    } else {
        writer.run(source, &FileSink).await.map(|_| ())
    };

    match outcome {
        Ok(()) => {
            info!("Environment snapshot complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!("Environment snapshot failed: {}", e);
            for line in e.diagnostics() {
                let _ = writeln!(stderr, "{}", line);
            }
            ExitCode::FAILURE
        }
    }
}
