use std::process::Command;

#[test]
fn test_version_flag_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_fetch-dogs"))
        .arg("--version")
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("fetch-dogs "));
    assert!(stdout.trim().ends_with(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_argument_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_fetch-dogs"))
        .arg("--bogus")
        .output()
        .expect("failed to run binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unexpected argument '--bogus'"));
    assert!(stderr.contains("Usage: fetch-dogs"));
}
