//! Cross-process determinism: spawns the `solve_fixture` binary under four
//! environment variants and asserts byte-identical stdout.

use std::path::Path;
use std::process::Command;

use statecraft_harness::digest::ContentHash;

const FIXTURE: &str = env!("CARGO_BIN_EXE_solve_fixture");

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let mut command = Command::new(FIXTURE);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {FIXTURE} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn fixture_output_is_stable_across_processes() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(baseline.contains("crossing.breadth_first.moves=7"));
    assert!(baseline.contains("jugs.depth_first.digest=sha256:"));
    assert!(baseline.contains("jugs_unreachable.greedy=no_solution"));
    assert!(baseline.contains("routes.greedy.route=N -> "));
    let digests: Vec<ContentHash> = baseline
        .lines()
        .filter(|l| l.contains(".digest="))
        .map(|l| {
            let (_, value) = l.split_once('=').expect("key=value line");
            ContentHash::parse(value).unwrap_or_else(|| panic!("unparsable digest line: {l}"))
        })
        .collect();
    assert_eq!(digests.len(), 9, "one digest per solved case:\n{baseline}");
    for digest in &digests {
        assert_eq!(digest.algorithm(), "sha256");
        assert_eq!(digest.hex_digest().len(), 64);
    }

    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    assert_eq!(baseline, run_variant(alt_cwd, &[]), "cwd changed output");

    assert_eq!(
        baseline,
        run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "locale changed output"
    );

    // Logging goes to stderr; a verbose filter must not touch stdout.
    assert_eq!(
        baseline,
        run_variant(&root, &[("RUST_LOG", "trace")]),
        "log level changed output"
    );
}
