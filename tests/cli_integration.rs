//! Integration tests for the CLI surface. None of these reach the
//! network: every asserted path settles before a request is made.

use assert_cmd::cargo::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_help_describes_the_lookup() {
    let mut cmd = Command::new(cargo_bin("remapq"));
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("registration"))
        .stdout(predicate::str::contains("--power-unit"))
        .stdout(predicate::str::contains("--torque-unit"));
}

#[test]
fn test_invalid_power_unit_exits_with_code_1() {
    let mut cmd = Command::new(cargo_bin("remapq"));
    cmd.args(["AB12CDE", "--power-unit", "furlongs", "--no-progress"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid power unit 'furlongs'"))
        .stderr(predicate::str::contains("BHP, kW, PS"));
}

#[test]
fn test_invalid_torque_unit_exits_with_code_1() {
    let mut cmd = Command::new(cargo_bin("remapq"));
    cmd.args(["AB12CDE", "--torque-unit", "kgm", "--no-progress"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid torque unit 'kgm'"))
        .stderr(predicate::str::contains("Nm, lb/ft"));
}

#[test]
fn test_invalid_output_mode_is_reported_without_failing() {
    let mut cmd = Command::new(cargo_bin("remapq"));
    cmd.args(["AB12CDE", "csv", "--no-progress"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Invalid output mode: csv"))
        .stdout(predicate::str::contains("pretty, all"));
}

#[test]
fn test_no_registration_prints_usage() {
    let mut cmd = Command::new(cargo_bin("remapq"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage: remapq <REGISTRATION>"));
}

#[test]
fn test_config_path_names_the_config_file() {
    let mut cmd = Command::new(cargo_bin("remapq"));
    cmd.args(["config", "path"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
