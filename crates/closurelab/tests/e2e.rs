//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn closurelab() -> Command {
    Command::cargo_bin("closurelab").expect("binary not found")
}

#[test]
fn help_flag() {
    closurelab()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("demos"));
}

#[test]
fn version_flag() {
    closurelab()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("closurelab"));
}

#[test]
fn fib_demo_quiet_first_ten() {
    closurelab()
        .args(["--demo", "fib", "-q"])
        .assert()
        .success()
        .stdout("0\n1\n1\n2\n3\n5\n8\n13\n21\n34\n");
}

#[test]
fn fib_demo_take_five() {
    closurelab()
        .args(["--demo", "fib", "--take", "5", "-q"])
        .assert()
        .success()
        .stdout("0\n1\n1\n2\n3\n");
}

#[test]
fn fib_demo_take_zero_prints_nothing() {
    closurelab()
        .args(["--demo", "fib", "--take", "0", "-q"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn filter_demo_quiet() {
    closurelab()
        .args(["--demo", "filter", "-q"])
        .assert()
        .success()
        .stdout("[2, 4, 6, 8]\n[1, 3, 5, 7, 9]\n[3, 6, 9]\n");
}

#[test]
fn filter_demo_single_predicate() {
    closurelab()
        .args(["--demo", "filter", "--predicates", "mult3", "-q"])
        .assert()
        .success()
        .stdout("[3, 6, 9]\n");
}

#[test]
fn visit_demo_quiet() {
    let expected = "3 - printed from the callback\n\
                    6 - printed from the callback\n\
                    9 - printed from the callback\n\
                    12 - printed from the callback\n\
                    3 - printed from the second callback\n\
                    6 - printed from the second callback\n\
                    9 - printed from the second callback\n\
                    12 - printed from the second callback\n";
    closurelab()
        .args(["--demo", "visit", "-q"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn all_demos_by_default() {
    closurelab()
        .assert()
        .success()
        .stdout(predicate::str::contains("--- fib ---"))
        .stdout(predicate::str::contains("--- filter ---"))
        .stdout(predicate::str::contains("--- visit ---"))
        .stdout(predicate::str::contains("34"))
        .stdout(predicate::str::contains("[2, 4, 6, 8]"))
        .stdout(predicate::str::contains("12 - printed from the second callback"));
}

#[test]
fn quiet_suppresses_headers() {
    closurelab()
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("---").not());
}

#[test]
fn unknown_demo_is_config_error() {
    closurelab()
        .args(["--demo", "tui"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("unknown demo: tui"));
}

#[test]
fn unknown_predicate_is_config_error() {
    closurelab()
        .args(["--demo", "filter", "--predicates", "prime"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("unknown predicate: prime"));
}

#[test]
fn output_writes_last_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fib.txt");
    let path_str = path.to_str().unwrap();

    closurelab()
        .args(["--demo", "fib", "-q", "--output", path_str])
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "34");
}

#[test]
fn demo_env_variable() {
    closurelab()
        .env("CLOSURELAB_DEMO", "filter")
        .arg("-q")
        .assert()
        .success()
        .stdout("[2, 4, 6, 8]\n[1, 3, 5, 7, 9]\n[3, 6, 9]\n");
}

#[test]
fn completion_bash() {
    closurelab()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("closurelab"));
}
