use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the godepr binary.
#[allow(deprecated)]
fn godepr_cmd() -> Command {
    Command::cargo_bin("godepr").unwrap()
}

#[test]
fn help_works() {
    godepr_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("go list -json ./... | godepr"));
}

#[test]
fn version_works() {
    godepr_cmd().arg("--version").assert().success();
}
