mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use crate::common::{get_program_path, read_bytes, TestFixture, PROGRAM_BYTES};

#[test]
fn two_arguments_convert_and_exit_0() {
    let fixture = TestFixture::new();
    let output = fixture.path("program.bin");

    let mut cmd = cargo_bin_cmd!("makebin");
    cmd.arg(get_program_path()).arg(&output);

    cmd.assert().success().code(0).stdout("");
    assert_eq!(read_bytes(&output), PROGRAM_BYTES);
}

#[test]
fn single_argument_derives_output_name() {
    let fixture = TestFixture::new();
    let input = fixture.write_input("firmware.hex", "00 FF\n10FF 1");

    let mut cmd = cargo_bin_cmd!("makebin");
    cmd.arg(&input);

    cmd.assert().success();
    assert_eq!(read_bytes(fixture.path("firmware")), vec![0, 0, 0, 255, 16, 255, 0, 1]);
}

#[test]
fn no_arguments_is_a_usage_error() {
    let mut cmd = cargo_bin_cmd!("makebin");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn too_many_arguments_is_a_usage_error_without_io() {
    let fixture = TestFixture::new();
    let input = fixture.write_input("a.hex", "1234");

    let mut cmd = cargo_bin_cmd!("makebin");
    cmd.arg(&input).arg(fixture.path("b.bin")).arg(fixture.path("c.bin"));

    cmd.assert().failure().code(1);
    assert!(!fixture.path("b.bin").exists());
    assert!(!fixture.path("c.bin").exists());
}

#[test]
fn invalid_token_exits_nonzero_with_context() {
    let fixture = TestFixture::new();
    let input = fixture.write_input("bad.hex", "00 GG");
    let output = fixture.path("bad.bin");

    let mut cmd = cargo_bin_cmd!("makebin");
    cmd.arg(&input).arg(&output);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("GG").and(predicate::str::contains("line 1")));
    assert!(!output.exists());
}

#[test]
fn missing_input_exits_nonzero() {
    let fixture = TestFixture::new();

    let mut cmd = cargo_bin_cmd!("makebin");
    cmd.arg(fixture.path("nope.hex")).arg(fixture.path("nope.bin"));

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn dump_prints_byte_list() {
    let fixture = TestFixture::new();
    let input = fixture.write_input("dump.hex", "00 FF\n10FF 1");

    let mut cmd = cargo_bin_cmd!("makebin");
    cmd.arg("--dump").arg(&input).arg(fixture.path("dump.bin"));

    cmd.assert()
        .success()
        .stdout("[0, 0, 0, 255, 16, 255, 0, 1]\n");
}

#[test]
fn help_exits_0() {
    let mut cmd = cargo_bin_cmd!("makebin");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<INPUT>"));
}
