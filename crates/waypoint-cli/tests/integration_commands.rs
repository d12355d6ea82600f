//! End-to-end tests for the `waypoint` binary.
//!
//! Every test runs inside a fresh temp directory with the WAYPOINT_*
//! variables cleared so a developer's environment cannot leak in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CITY: &str = "3\nAurora Street\nBellevue Square\nCedar Park\n1 2 50\n2 3 20\n1 3 90\n0 0 0\n";

const TWO_GRAPHS: &str = "2\nNorth\nSouth\n1 2 4\n0 0 0\n2\nEast\nWest\n2 1 6\n0 0 0\n";

fn waypoint(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("waypoint").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("FORCE_COLOR")
        .env_remove("RUST_LOG");
    for var in [
        "WAYPOINT_MAX_VERTICES",
        "WAYPOINT_UNREACHABLE_MARKER",
        "WAYPOINT_FORMAT",
        "WAYPOINT_SHOW_LABELS",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn workspace(input: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("graph.txt"), input).unwrap();
    temp
}

#[test]
fn test_show_prints_all_pairs_table() {
    let temp = workspace(CITY);

    waypoint(temp.path())
        .args(["show", "graph.txt"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Description                  From  To    Dist  Path\nAurora Street\n",
        ))
        .stdout(predicate::str::contains(
            "                             1     3     70    1 2 3\n",
        ))
        .stdout(predicate::str::contains(
            "                             3     1     --\n",
        ));
}

#[test]
fn test_show_separates_graphs_with_blank_line() {
    let temp = workspace(TWO_GRAPHS);

    waypoint(temp.path())
        .args(["show", "graph.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2     1     --\n\nDescription"))
        .stdout(predicate::str::contains("2     1     6     2 1\n"));
}

#[test]
fn test_show_json_output() {
    let temp = workspace(CITY);

    let output = waypoint(temp.path())
        .args(["--format", "json", "show", "graph.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let graphs = json.as_array().unwrap();
    assert_eq!(graphs.len(), 1);
    assert_eq!(graphs[0]["graph"], 1);
    assert_eq!(graphs[0]["vertices"][2]["label"], "Cedar Park");
    assert_eq!(graphs[0]["routes"].as_array().unwrap().len(), 6);
}

#[test]
fn test_show_reads_stdin() {
    let temp = TempDir::new().unwrap();

    waypoint(temp.path())
        .args(["show", "-"])
        .write_stdin(CITY)
        .assert()
        .success()
        .stdout(predicate::str::contains("2     3     20    2 3"));
}

#[test]
fn test_show_empty_input() {
    let temp = workspace("");

    waypoint(temp.path())
        .args(["show", "graph.txt"])
        .assert()
        .success()
        .stdout("No graph to print. Please enter graph.\n");
}

#[test]
fn test_path_prints_route_and_labels() {
    let temp = workspace(CITY);

    waypoint(temp.path())
        .args(["path", "graph.txt", "1", "3"])
        .assert()
        .success()
        .stdout("1  3  70    1 2 3\nAurora Street\nBellevue Square\nCedar Park\n");
}

#[test]
fn test_path_unreachable_pair() {
    let temp = workspace(CITY);

    waypoint(temp.path())
        .args(["path", "graph.txt", "3", "1"])
        .assert()
        .success()
        .stdout("3  1  --\n");
}

#[test]
fn test_path_selects_graph() {
    let temp = workspace(TWO_GRAPHS);

    waypoint(temp.path())
        .args(["path", "graph.txt", "2", "1", "--graph", "2"])
        .assert()
        .success()
        .stdout("2  1  6    2 1\nWest\nEast\n");
}

#[test]
fn test_path_missing_graph_index() {
    let temp = workspace(CITY);

    waypoint(temp.path())
        .args(["path", "graph.txt", "1", "2", "--graph", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("graph 3 does not exist"));
}

#[test]
fn test_path_invalid_vertex() {
    let temp = workspace(CITY);

    waypoint(temp.path())
        .args(["path", "graph.txt", "1", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid vertex 9"));
}

#[test]
fn test_path_rejects_vertex_zero() {
    let temp = workspace(CITY);

    waypoint(temp.path())
        .args(["path", "graph.txt", "0", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vertex ids start at 1"));
}

#[test]
fn test_path_json_output() {
    let temp = workspace(CITY);

    let output = waypoint(temp.path())
        .args(["path", "graph.txt", "1", "3", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["route"]["kind"], "reachable");
    assert_eq!(json["route"]["distance"], 70);
    assert_eq!(json["labels"][1], "Bellevue Square");
}

#[test]
fn test_check_summarizes_graph() {
    let temp = workspace(CITY);

    waypoint(temp.path())
        .args(["check", "graph.txt"])
        .assert()
        .success()
        .stdout("Graph 1 (line 1): 3 vertices, 3 edges, 2 sources\n");
}

#[test]
fn test_check_reports_rejected_edges() {
    let temp = workspace("2\nA\nB\n1 2 3\n1 7 2\n0 0 0\n");

    waypoint(temp.path())
        .args(["check", "graph.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line 5: edge 1 -> 7 (weight 2) rejected"))
        .stderr(predicate::str::contains("1 edge rejected"));
}

#[test]
fn test_check_strict_fails_on_rejected_edges() {
    let temp = workspace("2\nA\nB\n1 2 3\n1 7 2\n0 0 0\n");

    waypoint(temp.path())
        .args(["check", "--strict", "graph.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 edge(s) were rejected"));
}

#[test]
fn test_missing_file() {
    let temp = TempDir::new().unwrap();

    waypoint(temp.path())
        .args(["show", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_malformed_count() {
    let temp = workspace("three\nA\n");

    waypoint(temp.path())
        .args(["show", "graph.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("three"));
}

#[test]
fn test_max_vertices_flag_limits_capacity() {
    let temp = workspace(CITY);

    waypoint(temp.path())
        .args(["--max-vertices", "2", "show", "graph.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_quiet_suppresses_status_messages() {
    let temp = workspace("2\nA\nB\n1 2 3\n1 7 2\n0 0 0\n");

    waypoint(temp.path())
        .args(["--quiet", "check", "graph.txt"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
