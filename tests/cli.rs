use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::{predicate, PredicateBooleanExt};
use std::fs;
use tempfile::TempDir;

/// Command with HOME pointed at an empty directory so no user config is read.
fn phoenix(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("phoenix");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn stdin_lines(lines: &[&str]) -> String {
    lines.iter().map(|l| format!("{l}\n")).collect()
}

/// Test CLI version flag
#[test]
fn test_cli_version() {
    let home = TempDir::new().unwrap();
    phoenix(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0.0"));

    phoenix(&home)
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0.0"));
}

/// Test CLI shows help information
#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    phoenix(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lightweight DnD source/target"))
        .stdout(predicate::str::contains("source"))
        .stdout(predicate::str::contains("target"));
}

/// Test source without files is a usage error
#[test]
fn test_source_requires_files() {
    let home = TempDir::new().unwrap();
    phoenix(&home)
        .arg("source")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

/// Test unknown log level is a usage error
#[test]
fn test_unknown_log_level() {
    let home = TempDir::new().unwrap();
    phoenix(&home)
        .args(["--log-level", "loud", "target"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loud"));
}

/// Test missing explicit config file exits with status 1
#[test]
fn test_missing_config_file() {
    let home = TempDir::new().unwrap();
    phoenix(&home)
        .args(["-c", "/nonexistent/phoenix.toml", "target"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("/nonexistent/phoenix.toml"));
}

/// Test target prints one absolute path per dropped file, in order
#[test]
fn test_target_print_path_drop() {
    let home = TempDir::new().unwrap();
    let input = stdin_lines(&[
        r#"{"event":"drop_enter","formats":["text/uri-list"]}"#,
        r#"{"event":"drop","uris":["file:///tmp/one.txt","file:///tmp/two%20words.txt"]}"#,
    ]);

    phoenix(&home)
        .args(["target", "--print-path"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("/tmp/one.txt\n/tmp/two words.txt\n");
}

/// Test target prints URIs by default and survives enter/leave cycles
#[test]
fn test_target_uri_output() {
    let home = TempDir::new().unwrap();
    let input = stdin_lines(&[
        r#"{"event":"drop_enter","formats":["text/uri-list"]}"#,
        r#"{"event":"drop_leave"}"#,
        r#"{"event":"drop_enter","formats":["text/uri-list"]}"#,
        r#"{"event":"drop_leave"}"#,
        r#"{"event":"drop_enter","formats":["text/uri-list"]}"#,
        r##"{"event":"drop","uri_list":"# dragged\r\nfile:///tmp/a.txt\r\n"}"##,
    ]);

    phoenix(&home)
        .arg("target")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("file:///tmp/a.txt\n");
}

/// Test malformed drop prints nothing and the process keeps running
#[test]
fn test_target_malformed_drop() {
    let home = TempDir::new().unwrap();
    let input = stdin_lines(&[
        r#"{"event":"drop_enter","formats":["text/uri-list"]}"#,
        r#"{"event":"drop","uris":["http://example.com/x"]}"#,
        "garbage",
        r#"{"event":"drop_enter","formats":["text/uri-list"]}"#,
        r#"{"event":"drop","uris":["file:///tmp/ok"]}"#,
    ]);

    phoenix(&home)
        .args(["target", "-p"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("/tmp/ok\n")
        .stderr(predicate::str::contains("drop rejected"));
}

/// Test a stdin line that is not UTF-8 is skipped, not fatal
#[test]
fn test_target_skips_non_utf8_line() {
    let home = TempDir::new().unwrap();
    let mut input = b"\xff\xfe\n".to_vec();
    input.extend_from_slice(
        stdin_lines(&[
            r#"{"event":"drop_enter","formats":["text/uri-list"]}"#,
            r#"{"event":"drop","uris":["file:///tmp/still-here"]}"#,
        ])
        .as_bytes(),
    );

    phoenix(&home)
        .args(["target", "-p"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("/tmp/still-here\n");
}

/// Test source view lists only existing local files
#[test]
fn test_source_skips_missing_and_remote() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(work.path().join("a.txt"), "a").unwrap();

    let assert = phoenix(&home)
        .current_dir(work.path())
        .args(["source", "a.txt", "ghost.txt", "http://x/y"])
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("ghost.txt").and(predicate::str::contains("http://x/y")));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let view: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    let items = view["view"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["label"], "a.txt");
}

/// Test --all offers every file from any per-file affordance
#[test]
fn test_source_all_payload() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    for name in ["a", "b", "c"] {
        fs::write(work.path().join(name), name).unwrap();
    }

    let assert = phoenix(&home)
        .current_dir(work.path())
        .args(["source", "--all", "a", "b", "c"])
        .write_stdin(stdin_lines(&[r#"{"event":"drag_begin","item":1}"#]))
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let payload: serde_json::Value = serde_json::from_str(stdout.lines().nth(1).unwrap()).unwrap();
    assert_eq!(payload["reply"], "payload");
    assert_eq!(payload["kind"], "aggregate");
    assert_eq!(payload["uris"].as_array().unwrap().len(), 3);
}

/// Test --and-exit terminates after the first completed drag
#[test]
fn test_source_and_exit() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(work.path().join("a"), "a").unwrap();

    let assert = phoenix(&home)
        .current_dir(work.path())
        .args(["source", "-x", "a"])
        .write_stdin(stdin_lines(&[
            r#"{"event":"drag_begin","item":0}"#,
            r#"{"event":"drag_end","accepted":true}"#,
            r#"{"event":"drag_begin","item":0}"#,
        ]))
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    // view + one payload; the second drag is never read
    assert_eq!(stdout.lines().count(), 2);
}

/// Test config file flags merge with command-line flags
#[test]
fn test_config_file_merge() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("phoenix");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("phoenix.toml"), "[target]\nprint_path = true\n").unwrap();

    let input = stdin_lines(&[
        r#"{"event":"drop_enter","formats":["text/uri-list"]}"#,
        r#"{"event":"drop","uris":["file:///tmp/from-config"]}"#,
    ]);

    phoenix(&home)
        .arg("target")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("/tmp/from-config\n");
}

/// Test --log-file keeps logs out of stderr
#[test]
fn test_log_file() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("logs").join("phoenix.log");

    phoenix(&home)
        .args(["--log-level", "debug", "--log-file", log.to_str().unwrap(), "target"])
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("starting"));
}
