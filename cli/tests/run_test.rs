//! Integration tests for the `run` command.

mod common;

use common::{check_stdout, dynarr, temp_file};
use expect_test::expect;
use predicates::prelude::*;

#[test]
fn run_script_file() {
    let file = temp_file("append 1\nappend 2\nadd 0\n");
    check_stdout(
        &["run", file.path().to_str().unwrap()],
        None,
        expect!["[0, 1, 2] (len=3, capacity=4)\n"],
    );
}

#[test]
fn run_with_comments_and_shebang() {
    let file = temp_file(
        r#"#!/usr/bin/env dynarr run
# build up
append 10
append 20   # second
append 30

# inspect
get 1
len
"#,
    );
    check_stdout(
        &["run", file.path().to_str().unwrap()],
        None,
        expect![[r#"
            20
            3
            [10, 20, 30] (len=3, capacity=4)
        "#]],
    );
}

#[test]
fn run_with_steps() {
    let file = temp_file("append 1\nappend 2\nappend 3\ndelete\n");
    check_stdout(
        &["run", "--steps", file.path().to_str().unwrap()],
        None,
        expect![[r#"
            append 1 -> [1] (len=1, capacity=2)
            append 2 -> [1, 2] (len=2, capacity=2)
            append 3 -> [1, 2, 3] (len=3, capacity=4)
            delete = 1 -> [2, 3] (len=2, capacity=4)
        "#]],
    );
}

#[test]
fn run_from_stdin() {
    check_stdout(
        &["run", "-"],
        Some("append 5\nappend 6\nclear\ncapacity\n"),
        expect![[r#"
            2
            [] (len=0, capacity=2)
        "#]],
    );
}

#[test]
fn run_reports_failing_line() {
    let file = temp_file("append 1\nget 3\n");
    dynarr()
        .args(["--no-color", "run", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("get: index 3 is out of range for length 1")
                .and(predicate::str::contains("rejected here")),
        );
}

#[test]
fn run_missing_file() {
    dynarr()
        .args(["run", "definitely-missing.dynarr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("definitely-missing.dynarr"));
}
