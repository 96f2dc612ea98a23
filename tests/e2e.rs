/// End-to-end tests: run the `cstress` binary in a scratch directory and
/// inspect the file it leaves behind.
use memchr::memmem;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn cstress(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cstress"))
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run cstress")
}

fn cstress_ok(dir: &Path, args: &[&str]) -> String {
    let output = cstress(dir, args);
    assert!(
        output.status.success(),
        "cstress {:?} exited with {}: stderr={}",
        args,
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("cstress output was not valid UTF-8")
}

fn count(haystack: &[u8], needle: &str) -> usize {
    memmem::find_iter(haystack, needle.as_bytes()).count()
}

#[test]
fn big_writes_test_big_c() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = cstress_ok(dir.path(), &["big"]);
    assert_eq!(stdout, "test_big.c created\n");

    let src = std::fs::read(dir.path().join("test_big.c")).unwrap();
    assert!(src.starts_with(b"#include <stdio.h>\n\n"));
    assert_eq!(count(&src, "void func"), 100_000);
    assert_eq!(count(&src, "    func"), 100_000);
    assert!(src.ends_with(b"    printf(\"Done!\\n\");\n    return 0;\n}\n"));
    assert_eq!(count(&src, "void func99999() { int x=99999; x+=1; }\n"), 1);
    assert_eq!(count(&src, "\n    func99999();\n    printf"), 1);
}

#[test]
fn long_writes_many_lines_c() {
    let dir = tempfile::tempdir().unwrap();
    let stdout = cstress_ok(dir.path(), &["long"]);
    assert_eq!(stdout, "many_lines.c created\n");

    let src = std::fs::read(dir.path().join("many_lines.c")).unwrap();
    assert!(src.starts_with(b"#include <stdio.h>\n\nint a0=0;\nint a1=0;\n"));
    assert_eq!(count(&src, "int a"), 2_000_000);
    assert!(src.ends_with(b"int a1999999=0;\n\nint main(){ printf(\"done\\n\"); return 0; }\n"));
    // header (2) + units + blank (1) + main (1)
    assert_eq!(memchr::memchr_iter(b'\n', &src).count(), 2_000_004);
}

#[test]
fn rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    cstress_ok(dir.path(), &["big"]);
    let first = std::fs::read(dir.path().join("test_big.c")).unwrap();
    cstress_ok(dir.path(), &["big"]);
    let second = std::fs::read(dir.path().join("test_big.c")).unwrap();
    assert!(first == second, "regenerated test_big.c differs");
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test_big.c");
    std::fs::write(&path, "garbage that should disappear").unwrap();
    cstress_ok(dir.path(), &["big"]);
    let src = std::fs::read(&path).unwrap();
    assert_eq!(count(&src, "garbage"), 0);
    assert!(src.starts_with(b"#include <stdio.h>\n"));
}

#[test]
fn unwritable_output_fails_without_success_line() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should go makes File::create fail.
    std::fs::create_dir(dir.path().join("many_lines.c")).unwrap();

    let output = cstress(dir.path(), &["long"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to create file: many_lines.c"),
        "stderr={stderr}"
    );
}

#[test]
fn debug_timing_goes_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let output = cstress(dir.path(), &["--debug-timing", "big"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "test_big.c created\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("debug-timing: test_big.c (100000 units"), "stderr={stderr}");
}

#[test]
fn missing_subcommand_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = cstress(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn count_is_not_a_flag() {
    let dir = tempfile::tempdir().unwrap();
    let output = cstress(dir.path(), &["big", "--count", "3"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("test_big.c").exists());
}
