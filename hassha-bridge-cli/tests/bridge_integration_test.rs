//! Integration tests driving the hassha-bridge binary against a fake
//! notifier installed under a temp HOME.
//!
//! Unix-only: the fake notifier is a shell script that needs an exec bit.
#![cfg(unix)]

use serde_json::Value;
use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Install a fake notifier script at the fixed discovery location under
/// `home`. The default script appends its argv on one line and its stdin on
/// the next, so tests can replay every invocation.
fn install_fake_notifier(home: &Path, body: &str) -> PathBuf {
    let bin_dir = home.join(".config").join("opencode").join("bin");
    fs::create_dir_all(&bin_dir).unwrap();
    let script = bin_dir.join("hassha");
    fs::write(&script, body).unwrap();
    let mut perms = fs::metadata(&script).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script, perms).unwrap();
    script
}

fn recording_script(log: &Path) -> String {
    format!(
        "#!/bin/sh\necho \"$@\" >> {log}\ncat >> {log}\n",
        log = log.display()
    )
}

/// Run the bridge with HOME pointing at the fake install, feeding `input` on
/// stdin
fn run_bridge(home: &Path, args: &[&str], input: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hassha-bridge"))
        .args(args)
        .env("HOME", home)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run hassha-bridge");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().expect("failed to wait for bridge")
}

/// Parse the recording log back into (argv, payload) pairs
fn recorded_invocations(log: &Path) -> Vec<(Vec<String>, Value)> {
    let Ok(content) = fs::read_to_string(log) else {
        return Vec::new();
    };
    let lines: Vec<&str> = content.lines().collect();
    lines
        .chunks(2)
        .map(|chunk| {
            let argv = chunk[0].split(' ').map(str::to_string).collect();
            let payload = serde_json::from_str(chunk[1]).unwrap();
            (argv, payload)
        })
        .collect()
}

#[test]
fn test_session_created_invokes_session_start() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("invocations.log");
    install_fake_notifier(home.path(), &recording_script(&log));

    let output = run_bridge(
        home.path(),
        &["event", "--dir", "/work/project"],
        r#"{"type": "session.created"}"#,
    );
    assert!(output.status.success());

    let invocations = recorded_invocations(&log);
    assert_eq!(invocations.len(), 1);
    let (argv, payload) = &invocations[0];
    assert_eq!(argv, &["hook", "SessionStart"]);
    assert_eq!(payload["hook_event_name"], "SessionStart");
    assert_eq!(payload["cwd"], "/work/project");
    assert_eq!(payload["source"], "startup");
}

#[test]
fn test_failed_tool_invokes_post_tool_use_failure() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("invocations.log");
    install_fake_notifier(home.path(), &recording_script(&log));

    let output = run_bridge(
        home.path(),
        &["event", "--dir", "/work/project"],
        r#"{"type": "tool.execute.after", "tool": "bash", "output": {"isError": true}}"#,
    );
    assert!(output.status.success());

    let invocations = recorded_invocations(&log);
    assert_eq!(invocations.len(), 1);
    let (argv, payload) = &invocations[0];
    assert_eq!(argv, &["hook", "PostToolUseFailure"]);
    assert_eq!(payload["hook_event_name"], "PostToolUseFailure");
    assert_eq!(payload["cwd"], "/work/project");
    assert_eq!(payload["tool_name"], "bash");
}

#[test]
fn test_permission_replied_is_silent() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("invocations.log");
    install_fake_notifier(home.path(), &recording_script(&log));

    let output = run_bridge(
        home.path(),
        &["event", "--dir", "/work"],
        r#"{"type": "permission.replied", "response": "always"}"#,
    );
    assert!(output.status.success());
    assert!(recorded_invocations(&log).is_empty());
}

#[test]
fn test_run_streams_events_in_order() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("invocations.log");
    install_fake_notifier(home.path(), &recording_script(&log));

    let stream = concat!(
        r#"{"type": "session.created"}"#,
        "\n",
        r#"{"type": "tool.execute.before", "tool": "edit"}"#,
        "\n",
        r#"{"type": "session.idle"}"#,
        "\n",
    );
    let output = run_bridge(home.path(), &["run", "--dir", "/work"], stream);
    assert!(output.status.success());

    let hooks: Vec<String> = recorded_invocations(&log)
        .iter()
        .map(|(argv, _)| argv[1].clone())
        .collect();
    assert_eq!(hooks, ["SessionStart", "PreToolUse", "Stop"]);
}

#[test]
fn test_malformed_and_unrecognized_lines_are_skipped() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("invocations.log");
    install_fake_notifier(home.path(), &recording_script(&log));

    let stream = concat!(
        "{not json\n",
        r#"{"type": "message.updated"}"#,
        "\n",
        r#"{"type": "session.idle"}"#,
        "\n",
    );
    let output = run_bridge(home.path(), &["run", "--dir", "/work"], stream);
    assert!(output.status.success());

    let invocations = recorded_invocations(&log);
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].0, ["hook", "Stop"]);
}

#[test]
fn test_failing_notifier_does_not_fail_the_bridge() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("invocations.log");
    // Records the attempt, then fails
    let body = format!(
        "#!/bin/sh\necho \"$@\" >> {log}\ncat >> {log}\nexit 7\n",
        log = log.display()
    );
    install_fake_notifier(home.path(), &body);

    let stream = concat!(
        r#"{"type": "session.created"}"#,
        "\n",
        r#"{"type": "session.idle"}"#,
        "\n",
    );
    let output = run_bridge(home.path(), &["run", "--dir", "/work"], stream);

    // Best effort: the bridge exits clean and keeps routing after failures
    assert!(output.status.success());
    assert_eq!(recorded_invocations(&log).len(), 2);
}

#[test]
fn test_missing_notifier_binary_is_tolerated() {
    let home = TempDir::new().unwrap();
    // No notifier installed at all

    let output = run_bridge(
        home.path(),
        &["event", "--dir", "/work"],
        r#"{"type": "session.idle"}"#,
    );
    assert!(output.status.success());
}

#[test]
fn test_default_dir_is_the_current_directory() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("invocations.log");
    install_fake_notifier(home.path(), &recording_script(&log));

    let output = run_bridge(home.path(), &["event"], r#"{"type": "session.idle"}"#);
    assert!(output.status.success());

    let invocations = recorded_invocations(&log);
    assert_eq!(invocations.len(), 1);
    let cwd = invocations[0].1["cwd"].as_str().unwrap();
    assert!(!cwd.is_empty());
}
