// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use assert_cmd::Command;

const CYCLE: &str = "550e8400-e29b-41d4-a716-446655440000";
const TASK: &str = "660f8400-e29b-41d4-a716-446655440111";
const BRAND: &str = "770f8400-e29b-41d4-a716-446655440222";

/// Binary with dummy store credentials so credential resolution never gets in
/// the way of the case under test. No network request is made on any path
/// exercised here.
fn orc() -> Command {
    let mut cmd = Command::cargo_bin("orc").unwrap();
    cmd.env("SUPABASE_URL", "https://example.supabase.co")
        .env("SUPABASE_SERVICE_KEY", "spec-key")
        .env("NO_COLOR", "1");
    cmd
}

fn run(cmd: &mut Command) -> (i32, String, String) {
    let output = cmd.output().unwrap();
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn help_lists_both_subcommands() {
    let (code, stdout, _) = run(orc().arg("--help"));
    assert_eq!(code, 0);
    assert!(stdout.contains("dispatch"));
    assert!(stdout.contains("status"));
}

#[test]
fn version_flag_works() {
    let (code, stdout, _) = run(orc().arg("--version"));
    assert_eq!(code, 0);
    assert!(stdout.contains("orc"));
}

#[test]
fn unknown_agent_fails_validation_with_dispatch_failed_code() {
    let (code, stdout, _) = run(orc().args([
        "dispatch",
        "--agent", "growth-hacker",
        "--cycle", CYCLE,
        "--task", TASK,
        "--brand", BRAND,
        "--host", "machine-b",
        "--no-preflight",
    ]));
    assert_eq!(code, 1);
    assert!(stdout.contains("DISPATCH_FAILED"));
    assert!(stdout.contains("unknown agent"));
}

#[test]
fn malformed_task_id_fails_validation() {
    let (code, stdout, _) = run(orc().args([
        "dispatch",
        "--agent", "post-click",
        "--cycle", CYCLE,
        "--task", "not-a-uuid",
        "--brand", BRAND,
        "--host", "machine-b",
        "--no-preflight",
    ]));
    assert_eq!(code, 1);
    assert!(stdout.contains("not a UUID"));
}

#[test]
fn timeout_below_the_floor_fails_validation() {
    let (code, stdout, _) = run(orc().args([
        "dispatch",
        "--agent", "post-click",
        "--cycle", CYCLE,
        "--task", TASK,
        "--brand", BRAND,
        "--host", "machine-b",
        "--no-preflight",
        "--timeout", "30s",
    ]));
    assert_eq!(code, 1);
    assert!(stdout.contains("below the minimum"));
}

#[test]
fn unparseable_duration_is_rejected_before_dispatch() {
    let (code, _, stderr) = run(orc().args([
        "dispatch",
        "--agent", "post-click",
        "--cycle", CYCLE,
        "--task", TASK,
        "--brand", BRAND,
        "--host", "machine-b",
        "--timeout", "soon",
    ]));
    assert_eq!(code, 1);
    assert!(stderr.contains("invalid duration"));
}

#[test]
fn missing_store_url_is_reported() {
    let (code, _, stderr) = run(orc()
        .env_remove("SUPABASE_URL")
        .args([
            "dispatch",
            "--agent", "post-click",
            "--cycle", CYCLE,
            "--task", TASK,
            "--brand", BRAND,
            "--host", "machine-b",
        ]));
    assert_eq!(code, 1);
    assert!(stderr.contains("missing store URL"));
}

#[test]
fn status_rejects_a_malformed_task_id() {
    let (code, _, stderr) = run(orc().args(["status", "--task", "abc"]));
    assert_eq!(code, 1);
    assert!(stderr.contains("invalid task id"));
}

#[test]
fn unknown_platform_is_rejected_by_clap() {
    let (code, _, stderr) = run(orc().args([
        "dispatch",
        "--agent", "post-click",
        "--cycle", CYCLE,
        "--task", TASK,
        "--brand", BRAND,
        "--host", "machine-b",
        "--platform", "tiktok",
    ]));
    assert_ne!(code, 0);
    assert!(stderr.contains("tiktok"));
}
