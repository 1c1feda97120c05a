use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::process::{Command as StdCommand, Stdio};
use std::thread;
use std::time::Duration;
use tempfile::{NamedTempFile, TempDir};

fn count_uniq() -> Command {
    Command::new(env!("CARGO_BIN_EXE_count_uniq"))
}

#[test]
fn shows_help() {
    count_uniq()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tool for counting unique lines"))
        .stdout(predicate::str::contains("--dist"));
}

#[test]
fn shows_version() {
    count_uniq()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn counts_distinct_lines_from_stdin() {
    count_uniq()
        .write_stdin("a\nb\na\n")
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn dash_reads_stdin() {
    count_uniq()
        .arg("-")
        .write_stdin("x\nx\nx")
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn empty_input_counts_zero() {
    count_uniq().write_stdin("").assert().success().stdout("0\n");
}

#[test]
fn crlf_and_lf_lines_are_the_same() {
    count_uniq()
        .write_stdin("a\r\na\nb\r\n")
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn reads_file_argument() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "one\ntwo\nthree\ntwo\n").unwrap();

    count_uniq()
        .arg(file.path())
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn empty_file_is_accepted() {
    let file = NamedTempFile::new().unwrap();
    count_uniq().arg(file.path()).assert().success().stdout("0\n");
}

#[test]
fn max_stops_at_the_cap() {
    count_uniq()
        .args(["-m", "1"])
        .write_stdin("a\nb\nc\n")
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn max_accepts_suffixes() {
    count_uniq()
        .args(["--max", "1k"])
        .write_stdin("a\nb\n")
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn invalid_max_fails() {
    count_uniq()
        .args(["--max", "abc"])
        .write_stdin("a\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("abc"));
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");

    count_uniq()
        .arg(&missing)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn directory_input_fails() {
    let dir = TempDir::new().unwrap();

    count_uniq()
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn unknown_option_fails() {
    count_uniq().arg("--frobnicate").assert().code(1);
}

#[test]
fn distribution_is_sorted_by_count() {
    count_uniq()
        .arg("-d")
        .write_stdin("b\na\nb\nc\nb\na\n")
        .assert()
        .success()
        .stdout("       3 b\n       2 a\n       1 c\n");
}

#[test]
fn distribution_ties_keep_first_seen_order() {
    count_uniq()
        .arg("--dist=simple")
        .write_stdin("z\ny\nx\n")
        .assert()
        .success()
        .stdout("1 z\n1 y\n1 x\n");
}

#[test]
fn distribution_with_file_after_flag() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "k\nk\n").unwrap();

    count_uniq()
        .arg("-d")
        .arg(file.path())
        .assert()
        .success()
        .stdout("       2 k\n");
}

#[test]
fn distribution_as_table() {
    count_uniq()
        .arg("--dist=table")
        .write_stdin("a\nb\na\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("COUNT"))
        .stdout(predicate::str::contains("LINE"))
        .stdout(predicate::str::contains("a"));
}

#[test]
fn distribution_as_json() {
    let output = count_uniq()
        .arg("--dist=json")
        .write_stdin("a\nb\na\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"count": 2, "line": "a"},
            {"count": 1, "line": "b"},
        ])
    );
}

#[test]
fn long_lines_are_truncated_in_samples() {
    let long = "x".repeat(600);
    let output = count_uniq()
        .arg("--dist=simple")
        .write_stdin(format!("{long}\n{long}\n"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text, format!("2 {}\n", "x".repeat(512)));
}

#[test]
fn no_progress_and_no_color_are_accepted() {
    count_uniq()
        .args(["-P", "-C"])
        .write_stdin("a\n")
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn prints_completion_scripts() {
    for shell in ["bash", "fish", "zsh"] {
        count_uniq()
            .args(["--completion", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains("count_uniq"))
            .stdout(predicate::str::contains("no-progress"));
    }
}

#[test]
fn unknown_completion_target_fails() {
    count_uniq()
        .args(["--completion", "tcsh"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("tcsh"));
}

#[test]
fn prints_man_page() {
    count_uniq()
        .arg("--generate-man")
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH"))
        .stdout(predicate::str::contains("Tool for counting unique lines"));
}

/// Feeds `input` through a pipe that stays open, then delivers `signal`.
#[cfg(unix)]
fn signal_while_reading(extra: &[&str], input: &str, signal: &str) -> std::process::Output {
    let mut child = StdCommand::new(env!("CARGO_BIN_EXE_count_uniq"))
        .args(extra)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(input.as_bytes()).unwrap();
    stdin.flush().unwrap();
    thread::sleep(Duration::from_millis(500));

    let pid = child.id().to_string();
    let status = StdCommand::new("kill")
        .args([signal, pid.as_str()])
        .status()
        .unwrap();
    assert!(status.success());

    let output = child.wait_with_output().unwrap();
    drop(stdin);
    output
}

#[cfg(unix)]
#[test]
fn interrupt_reports_partial_count_once() {
    let output = signal_while_reading(&[], "a\nb\na\n", "-INT");
    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2\n");
}

#[cfg(unix)]
#[test]
fn interrupt_reports_partial_distribution() {
    let output = signal_while_reading(&["-d"], "a\nb\na\n", "-INT");
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "       2 a\n       1 b\n"
    );
}

#[cfg(unix)]
#[test]
fn terminate_reports_partial_count() {
    let output = signal_while_reading(&[], "x\ny\nz\n", "-TERM");
    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3\n");
}
