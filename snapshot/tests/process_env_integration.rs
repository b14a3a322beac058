use chrono::{FixedOffset, TimeZone};
use serial_test::serial;
use snapshot::prelude::*;
use std::env;

struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    fn set(vars: &[(&'static str, Option<&str>)]) -> Self {
        let saved = vars
            .iter()
            .map(|(name, _)| (*name, env::var(name).ok()))
            .collect();
        for (name, value) in vars {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in &self.saved {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
    }
}

fn fixed_clock() -> Box<dyn Clock> {
    let time = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2019, 10, 1, 12, 0, 0)
        .unwrap();
    Box::new(FixedClock(time))
}

#[tokio::test]
#[serial]
async fn test_snapshot_from_process_environment() {
    let _guard = EnvGuard::set(&[
        ("ACCESS_TOKEN", Some("process-token")),
        ("COMPANY_ID", Some("CO-process")),
        ("REACTOR_URL", None),
    ]);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("globals-for-browser.js");

    let writer = EnvironmentSnapshotWriter::new(SnapshotConfig::new().with_output_path(&output))
        .with_clock(fixed_clock());
    writer.run(&ProcessEnv, &FileSink).await.unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("at 2019-10-01T12:00:00.000+02:00."));
    assert!(text.contains("ACCESS_TOKEN: 'process-token',"));
    assert!(text.contains("COMPANY_ID: 'CO-process',"));
    assert!(text.contains("REACTOR_URL: 'https://reactor.adobe.io',"));
}

#[tokio::test]
#[serial]
async fn test_explicit_reactor_url_from_process_environment() {
    let _guard = EnvGuard::set(&[
        ("ACCESS_TOKEN", Some("process-token")),
        ("COMPANY_ID", Some("CO-process")),
        ("REACTOR_URL", Some("https://reactor-stage.example.test/")),
    ]);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("globals-for-browser.js");

    let writer = EnvironmentSnapshotWriter::new(SnapshotConfig::new().with_output_path(&output))
        .with_clock(fixed_clock());
    writer.run(&ProcessEnv, &FileSink).await.unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("REACTOR_URL: 'https://reactor-stage.example.test/',"));
}

#[tokio::test]
#[serial]
async fn test_missing_process_variables_write_nothing() {
    let _guard = EnvGuard::set(&[("ACCESS_TOKEN", None), ("COMPANY_ID", None)]);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("globals-for-browser.js");

    let writer = EnvironmentSnapshotWriter::new(SnapshotConfig::new().with_output_path(&output));
    let err = writer.run(&ProcessEnv, &FileSink).await.unwrap_err();

    assert_eq!(err.diagnostics().len(), 2);
    assert!(!output.exists());
}

#[test]
#[serial]
fn test_globals_from_process_environment() {
    let _guard = EnvGuard::set(&[
        ("ACCESS_TOKEN", Some("global-token")),
        ("COMPANY_ID", Some("CO-global")),
        ("REACTOR_URL", None),
    ]);

    let globals = ReactorGlobals::new();
    let env = globals.get_or_init_from(&ProcessEnv).unwrap();
    assert_eq!(env.access_token, "global-token");
    assert_eq!(env.reactor_url, DEFAULT_REACTOR_URL);
}
