use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;

fn display_mode() -> Command {
    Command::new(cargo::cargo_bin!("display-mode"))
}

#[test]
fn test_help_displays() {
    display_mode()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--px-width"))
        .stdout(predicate::str::contains("refresh rate"));
}

#[test]
fn test_version_displays() {
    display_mode()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("display-mode"));
}

#[test]
fn test_invalid_rate_rejected() {
    display_mode()
        .args(["--rate", "fast"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--rate"));
}

#[test]
fn test_negative_width_rejected() {
    display_mode()
        .args(["-w", "-1440"])
        .assert()
        .code(2);
}

#[test]
fn test_short_h_is_height_not_help() {
    display_mode()
        .args(["-h", "abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--height"));
}

#[cfg(not(target_os = "macos"))]
#[test]
fn test_unsupported_platform_fails() {
    display_mode()
        .args(["-w", "1440", "-h", "900", "-m", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported platform"));
}
