use clap::Parser;
use harness::{execute, init_tracing, Cli};
use snapshot::{EnvironmentSnapshotWriter, ProcessEnv};
use std::io;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let writer = EnvironmentSnapshotWriter::new(cli.config());

    execute(
        &cli,
        &writer,
        &ProcessEnv,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await
}
