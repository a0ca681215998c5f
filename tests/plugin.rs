use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const CODES: [(&str, &str); 4] = [
    ("RC_OKAY", "10"),
    ("RC_SKIPPED", "11"),
    ("RC_INFO", "12"),
    ("RC_FAILED", "13"),
];

fn plugin(vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_citellus-cpu-count"))
        .env_clear()
        .envs(CODES)
        .envs(vars.iter().copied())
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn write_cpuinfo(root: &Path, content: &str) {
    fs::create_dir_all(root.join("proc")).unwrap();
    fs::write(root.join("proc/cpuinfo"), content).unwrap();
}

#[test]
fn live_mode_reports_cpu_count() {
    let output = plugin(&[("CITELLUS_LIVE", "1")]);

    let count: usize = stderr(&output).parse().unwrap();
    assert_eq!(output.status.code(), Some(12));
    assert!(count >= std::thread::available_parallelism().unwrap().get());
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_snapshot_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_str().unwrap();
    let output = plugin(&[("CITELLUS_LIVE", "0"), ("CITELLUS_ROOT", root)]);

    assert_eq!(output.status.code(), Some(11));
    assert_eq!(
        stderr(&output),
        format!("Failure to open required file {root}/proc/cpuinfo")
    );
    assert!(output.stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn non_utf8_root_is_not_dropped() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let mut root = dir.path().as_os_str().as_bytes().to_vec();
    root.extend_from_slice(b"/snap\xff");
    let root = OsStr::from_bytes(&root);

    let output = Command::new(env!("CARGO_BIN_EXE_citellus-cpu-count"))
        .env_clear()
        .envs(CODES)
        .env("CITELLUS_LIVE", "0")
        .env("CITELLUS_ROOT", root)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(11));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        format!(
            "Failure to open required file {}/snap\u{FFFD}/proc/cpuinfo",
            dir.path().display()
        )
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn snapshot_reports_processor_count() {
    let dir = tempfile::tempdir().unwrap();
    write_cpuinfo(
        dir.path(),
        "processor : 0\nflags : fpu vme\n\nprocessor : 1\nflags : fpu vme\n\n\
         processor : 2\nflags : fpu vme\n\nprocessor : 3\nflags : fpu vme\n",
    );
    let root = dir.path().to_str().unwrap();
    let output = plugin(&[("CITELLUS_LIVE", "0"), ("CITELLUS_ROOT", root)]);

    assert_eq!(output.status.code(), Some(12));
    assert_eq!(stderr(&output), "4");
    assert!(output.stdout.is_empty());
}

#[test]
fn snapshot_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    write_cpuinfo(dir.path(), "Processor : 0\nPROCESSOR : 1\nprocessor : 2\n");
    let root = dir.path().to_str().unwrap();
    let output = plugin(&[("CITELLUS_LIVE", "0"), ("CITELLUS_ROOT", root)]);

    assert_eq!(stderr(&output), "3");
}

#[test]
fn undefined_mode_fails() {
    for vars in [&[("CITELLUS_LIVE", "5")][..], &[][..]] {
        let output = plugin(vars);

        assert_eq!(output.status.code(), Some(13));
        assert_eq!(stderr(&output), "Undefined CITELLUS_LIVE status");
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn padded_live_flag_is_undefined() {
    let output = plugin(&[("CITELLUS_LIVE", " 1 ")]);

    assert_eq!(output.status.code(), Some(13));
    assert_eq!(stderr(&output), "Undefined CITELLUS_LIVE status");
}

#[test]
fn missing_codes_exit_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_citellus-cpu-count"))
        .env_clear()
        .env("RC_FAILED", "not-a-number")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stderr(&output), "Undefined CITELLUS_LIVE status");
}

#[test]
fn repeated_invocations_match() {
    let dir = tempfile::tempdir().unwrap();
    write_cpuinfo(dir.path(), "processor : 0\nprocessor : 1\n");
    let root = dir.path().to_str().unwrap();
    let vars = [("CITELLUS_LIVE", "0"), ("CITELLUS_ROOT", root)];

    let first = plugin(&vars);
    let second = plugin(&vars);
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stderr, second.stderr);
}

#[test]
fn dry_run_exits_okay() {
    let output = Command::new(env!("CARGO_BIN_EXE_citellus-cpu-count"))
        .arg("--dry-run")
        .env_clear()
        .envs(CODES)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(10));
    assert!(output.stderr.is_empty());
    assert!(output.stdout.is_empty());
}
