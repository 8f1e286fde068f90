//! Phase 5 tests: the `mgraph` binary end to end.

use std::path::PathBuf;
use std::process::{Command, Output};

// ==================== CLI Helpers ====================

/// Locate the `mgraph` binary built alongside test binaries.
fn mgraph_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove "deps"
    path.push("mgraph");
    path
}

/// Run the `mgraph` CLI with the given arguments and return the output.
fn run_mgraph(args: &[&str]) -> Output {
    Command::new(mgraph_bin())
        .args(args)
        .output()
        .expect("Failed to run mgraph")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "mgraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Global flags describing the seven-vertex DAG, followed by `rest`.
fn seven_vertex_args<'a>(rest: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["--directed"];
    for edge in [
        "1,2", "1,3", "1,4", "2,4", "2,5", "4,3", "4,5", "4,6", "4,7", "5,7", "6,3", "6,7",
    ] {
        args.push("--edge");
        args.push(edge);
    }
    args.extend_from_slice(rest);
    args
}

/// Global flags describing the eight-cycle with chords 2-6 and 3-7, followed by `rest`.
fn cycle_args<'a>(rest: &[&'a str]) -> Vec<&'a str> {
    let mut args = Vec::new();
    for edge in ["1,2", "2,3", "3,4", "4,5", "5,6", "6,7", "7,8", "8,1", "2,6", "3,7"] {
        args.push("--edge");
        args.push(edge);
    }
    args.extend_from_slice(rest);
    args
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_info() {
    let output = run_mgraph(&seven_vertex_args(&["info"]));
    assert_success(&output);
    let stdout = stdout_str(&output);
    assert!(stdout.starts_with("Directed, Unweighted, Acyclic, Disconnected, Simple graph"));
    assert!(stdout.contains("1 -> 2(1), 3(1), 4(1)"));
    assert!(stdout.contains("Vertices: 7"));
    assert!(stdout.contains("Edges: 12"));
}

#[test]
fn test_cli_info_json() {
    let output = run_mgraph(&seven_vertex_args(&["--format", "json", "info"]));
    assert_success(&output);
    let info: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(info["directed"], true);
    assert_eq!(info["vertices"], 7);
    assert_eq!(info["edges"], 12);
    assert_eq!(info["acyclic"], true);
}

#[test]
fn test_cli_isolated_vertex() {
    let output = run_mgraph(&["--vertex", "solo", "--edge", "a,b", "info"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("Vertices: 3"));
}

#[test]
fn test_cli_traverse() {
    let output = run_mgraph(&seven_vertex_args(&["traverse", "--start", "1"]));
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim(), "1 2 3 4 5 6 7");

    let output = run_mgraph(&seven_vertex_args(&[
        "traverse", "--start", "1", "--order", "dfs",
    ]));
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim(), "1 2 4 3 5 7 6");
}

#[test]
fn test_cli_hops() {
    let output = run_mgraph(&seven_vertex_args(&["hops", "--from", "4"]));
    assert_success(&output);
    let stdout = stdout_str(&output);
    assert!(stdout.contains("4: 0"));
    assert!(stdout.contains("7: 1"));
    assert!(!stdout.contains("1:"));
}

#[test]
fn test_cli_topo() {
    let output = run_mgraph(&seven_vertex_args(&["topo"]));
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim(), "1 2 4 5 6 3 7");
}

#[test]
fn test_cli_topo_on_undirected_graph_fails() {
    let output = run_mgraph(&["--edge", "a,b", "topo"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_str(&output).contains("Error:"));
}

#[test]
fn test_cli_path_json() {
    let output = run_mgraph(&[
        "--directed",
        "--edge",
        "a,b,4",
        "--edge",
        "a,c,1",
        "--edge",
        "c,b,2",
        "--edge",
        "b,d,1",
        "--format",
        "json",
        "path",
        "--from",
        "a",
    ]);
    assert_success(&output);
    let result: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(result["algorithm"], "dag");
    let d = result["paths"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["vertex"] == "d")
        .unwrap();
    assert_eq!(d["distance"], 4);
    assert_eq!(d["path"], serde_json::json!(["a", "c", "b", "d"]));
}

#[test]
fn test_cli_path_negative_cycle() {
    let output = run_mgraph(&[
        "--directed",
        "--edge",
        "a,b,1",
        "--edge",
        "b,c,-1",
        "--edge",
        "c,a,-1",
        "path",
        "--from",
        "a",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_str(&output).contains("negative"));
}

#[test]
fn test_cli_all_pairs() {
    let output = run_mgraph(&["--directed", "--edge", "a,b,2", "--edge", "b,c,3", "all-pairs"]);
    assert_success(&output);
    let stdout = stdout_str(&output);
    assert!(stdout.contains("a\t0\t2\t5"));
    assert!(stdout.contains("c\tinf\tinf\t0"));
}

#[test]
fn test_cli_components() {
    let output = run_mgraph(&[
        "--directed", "--edge", "a,b", "--edge", "b,a", "--edge", "b,c", "components",
    ]);
    assert_success(&output);
    let stdout = stdout_str(&output);
    assert!(stdout.contains("a b"));
    assert!(stdout.lines().count() == 2);
}

#[test]
fn test_cli_mst() {
    let output = run_mgraph(&[
        "--edge", "1,2,1", "--edge", "2,3,2", "--edge", "1,3,3", "--edge", "3,4,4", "mst",
    ]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("Total cost: 7"));
}

#[test]
fn test_cli_mincut() {
    let output = run_mgraph(&cycle_args(&["mincut", "--trials", "500", "--seed", "3"]));
    assert_success(&output);
    assert!(stdout_str(&output).contains("Min cut: 2"));
}

#[test]
fn test_cli_mincut_json() {
    let output = run_mgraph(&cycle_args(&["--format", "json", "mincut"]));
    assert_success(&output);
    let result: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(result["size"], 2);
    assert_eq!(result["trials"], 2000);
    let sides = result["partition"].as_array().unwrap();
    let total: usize = sides.iter().map(|side| side.as_array().unwrap().len()).sum();
    assert_eq!(total, 8);
}

#[test]
fn test_cli_malformed_edge() {
    let output = run_mgraph(&["--edge", "a", "info"]);
    assert_eq!(output.status.code(), Some(2));

    let output = run_mgraph(&["--edge", "a,b,heavy", "info"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_missing_vertex() {
    let output = run_mgraph(&seven_vertex_args(&["hops", "--from", "99"]));
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_str(&output).contains("not found"));
}
