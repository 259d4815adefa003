//! Cross-process determinism: spawns the `search_fixture` binary under
//! several working directories and environment variants and asserts all
//! produce identical output. Each process gets a fresh hash seed, so any
//! dependence on `HashSet` iteration order would show up here.

use std::path::Path;
use std::process::{Command, Output};

use waypoint_search::digest::ContentHash;

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn spawn_fixture(work_dir: &str, args: &[&str], env_overrides: &[(&str, &str)]) -> Output {
    let bin = env!("CARGO_BIN_EXE_search_fixture");

    let mut command = Command::new(bin);
    command.current_dir(work_dir).args(args);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    })
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let output = spawn_fixture(work_dir, &[], env_overrides);

    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn search_fixture_output_identical_across_processes() {
    let root = workspace_root();
    let scratch = tempfile::tempdir().expect("create temp dir");
    let scratch = scratch.path().to_string_lossy().to_string();

    let baseline = run_variant(&root, &[]);
    let variants = [
        run_variant(&scratch, &[]),
        run_variant(&root, &[("LC_ALL", "C")]),
        run_variant(&scratch, &[("LANG", "tr_TR.UTF-8"), ("TZ", "Asia/Tokyo")]),
    ];

    for (i, output) in variants.iter().enumerate() {
        assert_eq!(&baseline, output, "variant {i} output differs from baseline");
    }
}

#[test]
fn search_fixture_reports_every_strategy() {
    let output = run_variant(&workspace_root(), &[]);
    for problem in ["diamond", "random_graph", "tiny_maze"] {
        for strategy in ["dfs", "bfs", "ucs", "astar"] {
            let prefix = format!("{problem}.{strategy}.trace_digest=sha256:");
            assert!(
                output.lines().any(|l| l.starts_with(&prefix)),
                "missing {prefix} in output"
            );
        }
    }
    assert!(output.contains("diamond.ucs.cost=2\n"));
    assert!(output.contains("diamond.astar.cost=2\n"));
    assert!(output.contains("tiny_maze.astar.cost=8\n"));
}

#[test]
fn trace_digests_are_well_formed_sha256() {
    let output = run_variant(&workspace_root(), &[]);
    let digests: Vec<ContentHash> = output
        .lines()
        .filter_map(|line| line.split_once(".trace_digest="))
        .map(|(_, value)| ContentHash::parse(value).expect("digest parses"))
        .collect();

    assert_eq!(digests.len(), 3 * 4);
    for digest in digests {
        assert_eq!(digest.algorithm(), "sha256");
        assert_eq!(digest.hex_digest().len(), 64);
        assert!(digest.hex_digest().bytes().all(|b| b.is_ascii_hexdigit()));
    }
}

#[test]
fn strategy_argument_selects_one_strategy() {
    let output = spawn_fixture(&workspace_root(), &["aStarSearch"], &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is valid UTF-8");

    assert!(stdout.contains("tiny_maze.astar.cost=8\n"));
    assert!(stdout.lines().all(|l| l.contains(".astar.")), "{stdout}");

    // Same lines as the full run restricted to A*.
    let full = run_variant(&workspace_root(), &[]);
    let astar_only: Vec<&str> = full.lines().filter(|l| l.contains(".astar.")).collect();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), astar_only);
}

#[test]
fn unknown_strategy_argument_fails() {
    let output = spawn_fixture(&workspace_root(), &["greedy"], &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("greedy"), "{stderr}");
}
