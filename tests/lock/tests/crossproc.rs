//! Cross-process determinism: the `solve_fixture` binary prints identical
//! output regardless of working directory and locale or logging variables.

use std::path::Path;
use std::process::Command;

/// Resolve the workspace root.
fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

/// Run the fixture with the given cwd and environment overrides, returning
/// `(stdout, stderr)`.
fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> (String, String) {
    let bin = env!("CARGO_BIN_EXE_solve_fixture");

    let mut command = Command::new(bin);
    command.current_dir(work_dir);
    command
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    (
        String::from_utf8(output.stdout).expect("stdout is valid UTF-8"),
        String::from_utf8(output.stderr).expect("stderr is valid UTF-8"),
    )
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let (baseline, _) = run_variant(&root, &[]);

    assert_eq!(baseline.lines().count(), 6, "one line per world and algorithm");
    for line in baseline.lines() {
        assert!(line.contains("termination=goal_reached"), "{line}");
        assert!(line.contains("outcome_digest=sha256:"), "{line}");
    }

    let temp = tempfile::tempdir().expect("temp dir");
    let temp_dir = temp.path().to_string_lossy().to_string();
    let variants: [(&str, &[(&str, &str)]); 3] = [
        (temp_dir.as_str(), &[]),
        (&root, &[("LANG", "C"), ("LC_ALL", "C")]),
        (&root, &[("RUST_LOG", "trace"), ("TZ", "Pacific/Auckland")]),
    ];
    for (dir, overrides) in variants {
        assert_eq!(
            run_variant(dir, overrides).0,
            baseline,
            "output differs for dir={dir} overrides={overrides:?}"
        );
    }
}

#[test]
fn engine_logs_reach_stderr_without_touching_stdout() {
    let root = workspace_root();
    let (quiet_out, quiet_err) = run_variant(&root, &[]);
    assert!(!quiet_err.contains("solve finished"), "{quiet_err}");

    let (out, err) = run_variant(&root, &[("RUST_LOG", "quarry_search=debug")]);
    assert_eq!(out, quiet_out);
    assert!(err.contains("solve finished"), "{err}");
    assert!(!out.contains("solve finished"));
}
