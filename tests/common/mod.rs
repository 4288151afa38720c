#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn write_trace(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).expect("Failed to write trace file");
    path
}

/// Trace for a job whose execution already carries `execution_code`
pub fn trace_with_events(policy: &str, execution_code: &str, events: &[(&str, &str)]) -> String {
    let events_str = events
        .iter()
        .map(|(kind, code)| format!("  - {}: {}", kind, code))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"
policy: {}
job_name: import
initial_exit_status: {}
execution_exit_status: {}
events:
{}
"#,
        policy, execution_code, execution_code, events_str
    )
}
