use assert_cmd::Command;
use predicates::prelude::*;

fn merge_sort() -> Command {
    let mut cmd = Command::cargo_bin("merge-sort").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn sorts_the_default_sample() {
    merge_sort().assert().success().stdout(
        "before: [5, 0, 1, 7, 3, 2, 4, 9, 6, 8]\n\
         after: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]\n",
    );
}

#[test]
fn sorts_provided_values() {
    merge_sort()
        .args(["3", "2,-1", "3"])
        .assert()
        .success()
        .stdout("before: [3, 2, -1, 3]\nafter: [-1, 2, 3, 3]\n");
}

#[test]
fn explicit_stack_strategy_prints_the_same_result() {
    merge_sort()
        .args(["--strategy", "explicit-stack"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "after: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]\n",
        ));
}

#[test]
fn single_value() {
    merge_sort()
        .arg("42")
        .assert()
        .success()
        .stdout("before: [42]\nafter: [42]\n");
}

#[test]
fn debug_logs_go_to_stderr() {
    merge_sort()
        .env("RUST_LOG", "debug")
        .arg("2,1")
        .assert()
        .success()
        .stdout("before: [2, 1]\nafter: [1, 2]\n")
        .stderr(predicate::str::contains("merge sort"));
}

#[test]
fn invalid_value_is_a_usage_error() {
    merge_sort()
        .arg("1,x")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid integer"));
}
