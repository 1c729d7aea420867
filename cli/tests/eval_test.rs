//! Integration tests for the `eval` command.

mod common;

use common::{check_stdout, dynarr};
use expect_test::expect;
use predicates::prelude::*;

#[test]
fn eval_appends() {
    dynarr()
        .args(["eval", "append 1; append 2; append 3"])
        .assert()
        .success()
        .stdout("[1, 2, 3] (len=3, capacity=4)\n");
}

#[test]
fn eval_prints_produced_values() {
    check_stdout(
        &["eval", "append 1; append 2; pop; len"],
        None,
        expect![[r#"
            2
            1
            [1] (len=1, capacity=2)
        "#]],
    );
}

#[test]
fn eval_front_inserts_with_steps() {
    check_stdout(
        &["eval", "--steps", "add 1; add 2"],
        None,
        expect![[r#"
            add 1 -> [1] (len=1, capacity=2)
            add 2 -> [2, 1] (len=2, capacity=2)
        "#]],
    );
}

#[test]
fn eval_insert_remove_symmetry() {
    check_stdout(
        &[
            "eval",
            "append 1; append 2; append 3; append 4; append 5; append 6; append 7; append 8;
             insert 55 4; capacity; get 4; remove_one 4",
        ],
        None,
        expect![[r#"
            16
            55
            55
            [1, 2, 3, 4, 5, 6, 7, 8] (len=8, capacity=16)
        "#]],
    );
}

#[test]
fn eval_insert_at_end_is_allowed() {
    dynarr()
        .args(["eval", "append 1; insert 2 1"])
        .assert()
        .success()
        .stdout("[1, 2] (len=2, capacity=2)\n");
}

#[test]
fn eval_empty_script() {
    dynarr()
        .args(["eval", "# nothing"])
        .assert()
        .success()
        .stdout("[] (len=0, capacity=0)\n");
}

#[test]
fn eval_pop_empty_fails() {
    dynarr()
        .args(["--no-color", "eval", "pop"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("pop: array is empty"));
}

#[test]
fn eval_output_before_failure_is_kept() {
    dynarr()
        .args(["--no-color", "eval", "append 1; pop; delete"])
        .assert()
        .failure()
        .stdout("1\n")
        .stderr(predicate::str::contains("delete: array is empty"));
}

#[test]
fn eval_insert_past_end_fails() {
    dynarr()
        .args(["--no-color", "eval", "append 1; insert 9 5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "insert: index 5 is out of range for length 1",
        ));
}

#[test]
fn eval_remove_one_out_of_range_fails() {
    dynarr()
        .args(["--no-color", "eval", "append 1; append 2; remove_one 2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "remove_one: index 2 is out of range for length 2",
        ));
}

#[test]
fn eval_unknown_operation() {
    dynarr()
        .args(["--no-color", "eval", "append 1; push 2"])
        .assert()
        .failure()
        .stdout("")
        .stderr(
            predicate::str::contains("unknown operation `push`")
                .and(predicate::str::contains("expected one of")),
        );
}

#[test]
fn eval_wrong_arguments() {
    dynarr()
        .args(["--no-color", "eval", "insert 1"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("wrong arguments for `insert`")
                .and(predicate::str::contains("usage: insert <value> <index>")),
        );
}
