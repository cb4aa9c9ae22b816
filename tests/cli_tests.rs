//! Integration tests for the malha CLI
//!
//! These tests run the malha binary against small CSV datasets and verify
//! output, exit codes, and the JSON error envelope.

use std::fs;
use std::path::PathBuf;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for malha
fn malha() -> Command {
    cargo_bin_cmd!("malha")
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// The weighted sample used across tests: best A -> E route is
/// A -> B -> C -> E at cost 5.
fn sample_edges(dir: &TempDir) -> PathBuf {
    write_file(
        dir,
        "edges.csv",
        "source,target,weight\n\
         A,B,1\n\
         A,C,4\n\
         B,C,2\n\
         B,D,6\n\
         C,D,3\n\
         C,E,2\n\
         D,E,1\n",
    )
}

// ============================================================================
// Help, version, and usage errors
// ============================================================================

#[test]
fn test_help_flag() {
    malha()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: malha"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("metrics"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("rank"));
}

#[test]
fn test_version_flag() {
    malha()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("malha"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    malha().args(["--format", "invalid", "cycle"]).assert().code(2);
}

#[test]
fn test_missing_edges_flag_exit_code_2() {
    malha().arg("cycle").assert().code(2);
}

#[test]
fn test_json_error_envelope_for_usage_error() {
    let output = malha()
        .args(["--format", "json", "cycle"])
        .assert()
        .code(2)
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stderr).unwrap();
    assert_eq!(parsed["error"]["code"], 2);
    assert_eq!(parsed["error"]["type"], "usage_error");
}

// ============================================================================
// Path queries
// ============================================================================

#[test]
fn test_path_dijkstra_human() {
    let dir = tempfile::tempdir().unwrap();
    let edges = sample_edges(&dir);

    malha()
        .args(["--edges", edges.to_str().unwrap(), "path", "A", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cost 5"))
        .stdout(predicate::str::contains("A -> B -> C -> E"));
}

#[test]
fn test_path_dijkstra_json() {
    let dir = tempfile::tempdir().unwrap();
    let edges = sample_edges(&dir);

    let output = malha()
        .args([
            "--edges",
            edges.to_str().unwrap(),
            "--format",
            "json",
            "path",
            "A",
            "E",
        ])
        .assert()
        .success()
        .get_output()
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["reachable"], true);
    assert_eq!(parsed["cost"], 5.0);
    assert_eq!(
        parsed["path"],
        serde_json::json!(["A", "B", "C", "E"])
    );
}

#[test]
fn test_path_no_route_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let edges = write_file(&dir, "edges.csv", "source,target\nA,B\nC,D\n");

    malha()
        .args(["--edges", edges.to_str().unwrap(), "path", "A", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from A to D"));
}

#[test]
fn test_path_bfs_counts_hops() {
    let dir = tempfile::tempdir().unwrap();
    let edges = sample_edges(&dir);

    malha()
        .args([
            "--edges",
            edges.to_str().unwrap(),
            "path",
            "A",
            "E",
            "--algo",
            "bfs",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("hops 2"));
}

#[test]
fn test_path_negative_weight_exit_code_3() {
    let dir = tempfile::tempdir().unwrap();
    let edges = write_file(
        &dir,
        "edges.csv",
        "source,target,weight\nA,B,1\nB,C,-2\n",
    );

    let output = malha()
        .args([
            "--edges",
            edges.to_str().unwrap(),
            "--format",
            "json",
            "path",
            "A",
            "C",
        ])
        .assert()
        .code(3)
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stderr).unwrap();
    assert_eq!(parsed["error"]["type"], "negative_weight");
}

#[test]
fn test_path_bellman_ford_negative_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let edges = write_file(
        &dir,
        "edges.csv",
        "source,target,weight\nA,B,1\nB,C,-3\nC,A,1\n",
    );

    malha()
        .args([
            "--edges",
            edges.to_str().unwrap(),
            "path",
            "A",
            "C",
            "--algo",
            "bellman-ford",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("negative cycle detected"));
}

// ============================================================================
// Tree traversal
// ============================================================================

#[test]
fn test_tree_bfs_levels() {
    let dir = tempfile::tempdir().unwrap();
    let edges = sample_edges(&dir);

    malha()
        .args(["--edges", edges.to_str().unwrap(), "tree", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A: level 0, root"))
        .stdout(predicate::str::contains("B: level 1, parent A"))
        .stdout(predicate::str::contains("E: level 2, parent C"));
}

#[test]
fn test_tree_dfs_discovery() {
    let dir = tempfile::tempdir().unwrap();
    let edges = sample_edges(&dir);

    malha()
        .args([
            "--edges",
            edges.to_str().unwrap(),
            "tree",
            "A",
            "--algo",
            "dfs",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("A: discovered 0, root"));
}

#[test]
fn test_tree_unknown_origin_exit_code_3() {
    let dir = tempfile::tempdir().unwrap();
    let edges = sample_edges(&dir);

    malha()
        .args(["--edges", edges.to_str().unwrap(), "tree", "Zed"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no such origin node: Zed"));
}

// ============================================================================
// Cycle detection and edge classification
// ============================================================================

#[test]
fn test_cycle_detected() {
    let dir = tempfile::tempdir().unwrap();
    let edges = sample_edges(&dir);

    malha()
        .args(["--edges", edges.to_str().unwrap(), "cycle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cycle detected"));
}

#[test]
fn test_cycle_absent_on_tree() {
    let dir = tempfile::tempdir().unwrap();
    let edges = write_file(&dir, "edges.csv", "source,target\nA,B\nB,C\n");

    malha()
        .args(["--edges", edges.to_str().unwrap(), "cycle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no cycle"));
}

#[test]
fn test_classify_triangle() {
    let dir = tempfile::tempdir().unwrap();
    let edges = write_file(
        &dir,
        "edges.csv",
        "source,target\nA,B\nB,C\nC,A\n",
    );

    malha()
        .args(["--edges", edges.to_str().unwrap(), "classify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -- B: tree"))
        .stdout(predicate::str::contains("B -- C: tree"))
        .stdout(predicate::str::contains("A -- C: back"));
}

// ============================================================================
// Metrics
// ============================================================================

#[test]
fn test_metrics_human() {
    let dir = tempfile::tempdir().unwrap();
    let edges = sample_edges(&dir);

    malha()
        .args(["--edges", edges.to_str().unwrap(), "metrics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nodes: 5"))
        .stdout(predicate::str::contains("edges: 7"));
}

#[test]
fn test_metrics_by_group_requires_node_list() {
    let dir = tempfile::tempdir().unwrap();
    let edges = sample_edges(&dir);

    malha()
        .args([
            "--edges",
            edges.to_str().unwrap(),
            "metrics",
            "--by-group",
        ])
        .assert()
        .code(2);
}

#[test]
fn test_metrics_by_group_with_node_list() {
    let dir = tempfile::tempdir().unwrap();
    let edges = sample_edges(&dir);
    let nodes = write_file(
        &dir,
        "nodes.csv",
        "node,group\nA,west\nB,west\nC,west\nD,east\nE,east\n",
    );

    malha()
        .args([
            "--edges",
            edges.to_str().unwrap(),
            "--nodes",
            nodes.to_str().unwrap(),
            "metrics",
            "--by-group",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("group east:"))
        .stdout(predicate::str::contains("group west:"));
}

#[test]
fn test_metrics_out_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let edges = sample_edges(&dir);
    let out = dir.path().join("report");

    malha()
        .args([
            "--edges",
            edges.to_str().unwrap(),
            "metrics",
            "--ego",
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = fs::read_to_string(out.join("metrics.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["global"]["order"], 5);
    assert_eq!(parsed["ego"].as_array().unwrap().len(), 5);
}

// ============================================================================
// Rankings
// ============================================================================

#[test]
fn test_rank_by_degree_with_top() {
    let dir = tempfile::tempdir().unwrap();
    let edges = sample_edges(&dir);

    malha()
        .args([
            "--edges",
            edges.to_str().unwrap(),
            "rank",
            "--top",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. C (degree 4)"))
        .stdout(predicate::str::contains("2. B (degree 3)"))
        .stdout(predicate::str::contains("3.").not());
}

#[test]
fn test_rank_by_wins() {
    let dir = tempfile::tempdir().unwrap();
    let edges = write_file(
        &dir,
        "edges.csv",
        "source,target,weight,winner\nA,B,1,A\nA,C,1,A\nB,C,1,C\n",
    );

    malha()
        .args([
            "--edges",
            edges.to_str().unwrap(),
            "rank",
            "--by",
            "wins",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. A (2 wins)"))
        .stdout(predicate::str::contains("2. C (1 wins)"));
}

#[test]
fn test_rank_by_wins_without_winner_column_exit_code_2() {
    let dir = tempfile::tempdir().unwrap();
    let edges = sample_edges(&dir);

    malha()
        .args([
            "--edges",
            edges.to_str().unwrap(),
            "rank",
            "--by",
            "wins",
        ])
        .assert()
        .code(2);
}
