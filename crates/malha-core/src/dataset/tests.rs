use super::*;

use std::fs;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_normalize_name() {
    assert_eq!(normalize_name("  Vila Nova  "), "Vila Nova");
    assert_eq!(normalize_name("Vila   Nova"), "Vila Nova");
    assert_eq!(normalize_name("Centro"), "Centro");
    assert_eq!(normalize_name("   "), "");
}

/// Edge rows define the node set when no node list is given
#[test]
fn test_load_graph_edges_only() {
    let dir = tempfile::tempdir().unwrap();
    let edges = write_csv(
        &dir,
        "edges.csv",
        "source,target,weight\nA,B,1.5\nB,C,2.0\n",
    );

    let loaded = load_graph(None, &edges).unwrap();

    assert_eq!(loaded.graph.order(), 3);
    assert_eq!(loaded.graph.size(), 2);
    assert!(loaded.groups.is_empty());
    assert!(loaded.wins.is_empty());
    assert!(loaded
        .graph
        .neighbors(&"A".to_string())
        .iter()
        .any(|(v, w)| v == "B" && *w == 1.5));
}

/// Names with stray whitespace collapse to a single node
#[test]
fn test_load_graph_normalizes_names() {
    let dir = tempfile::tempdir().unwrap();
    let edges = write_csv(
        &dir,
        "edges.csv",
        "source,target,weight\n Vila  Nova ,Centro,1.0\nVila Nova,Leste,2.0\n",
    );

    let loaded = load_graph(None, &edges).unwrap();

    assert_eq!(loaded.graph.order(), 3);
    assert_eq!(loaded.graph.degree(&"Vila Nova".to_string()), 2);
}

/// A missing weight column defaults every edge to 1.0
#[test]
fn test_load_graph_default_weight() {
    let dir = tempfile::tempdir().unwrap();
    let edges = write_csv(&dir, "edges.csv", "source,target\nA,B\nB,C\n");

    let loaded = load_graph(None, &edges).unwrap();

    for u in loaded.graph.nodes() {
        for (_, w) in loaded.graph.neighbors(u) {
            assert_eq!(*w, 1.0);
        }
    }
}

/// A missing required column is a data error
#[test]
fn test_load_graph_missing_column() {
    let dir = tempfile::tempdir().unwrap();
    let edges = write_csv(&dir, "edges.csv", "from,to\nA,B\n");

    let err = load_graph(None, &edges).unwrap_err();
    assert!(matches!(err, MalhaError::MissingColumn { ref column, .. } if column == "source"));
}

/// An unparseable weight is a data error, not a silent default
#[test]
fn test_load_graph_invalid_weight() {
    let dir = tempfile::tempdir().unwrap();
    let edges = write_csv(&dir, "edges.csv", "source,target,weight\nA,B,heavy\n");

    let err = load_graph(None, &edges).unwrap_err();
    assert!(matches!(err, MalhaError::InvalidWeight { ref value, .. } if value == "heavy"));
}

/// Node list declares the node set; undeclared edge endpoints are dropped
#[test]
fn test_load_graph_with_node_list() {
    let dir = tempfile::tempdir().unwrap();
    let nodes = write_csv(
        &dir,
        "nodes.csv",
        "node,group\nA,north\nB,north\nC,south\nIsolated,south\n",
    );
    let edges = write_csv(
        &dir,
        "edges.csv",
        "source,target,weight\nA,B,1.0\nB,C,2.0\nC,Ghost,3.0\n",
    );

    let loaded = load_graph(Some(nodes.as_path()), &edges).unwrap();

    // Ghost is undeclared, so the C-Ghost edge is skipped entirely
    assert_eq!(loaded.graph.order(), 4);
    assert_eq!(loaded.graph.size(), 2);
    assert!(!loaded.graph.contains(&"Ghost".to_string()));
    assert!(loaded.graph.contains(&"Isolated".to_string()));
    assert_eq!(loaded.graph.degree(&"Isolated".to_string()), 0);

    assert_eq!(loaded.groups[&"A".to_string()], "north");
    assert_eq!(loaded.groups[&"C".to_string()], "south");
}

/// Node list preserves first-occurrence order and deduplicates
#[test]
fn test_load_node_list_order_and_dedup() {
    let dir = tempfile::tempdir().unwrap();
    let nodes = write_csv(
        &dir,
        "nodes.csv",
        "node,group\nB,x\nA,y\nB,z\n",
    );

    let (order, groups) = load_node_list(&nodes).unwrap();

    assert_eq!(order, vec!["B".to_string(), "A".to_string()]);
    // Later rows overwrite group membership
    assert_eq!(groups[&"B".to_string()], "z");
}

/// A winner column feeds the win ledger
#[test]
fn test_load_graph_winner_column() {
    let dir = tempfile::tempdir().unwrap();
    let edges = write_csv(
        &dir,
        "edges.csv",
        "source,target,weight,winner\nA,B,1.0,A\nA,C,1.0,A\nB,C,1.0,C\nA,B,1.0,\n",
    );

    let loaded = load_graph(None, &edges).unwrap();

    assert_eq!(loaded.wins.wins("A"), 2);
    assert_eq!(loaded.wins.wins("C"), 1);
    assert_eq!(loaded.wins.wins("B"), 0);
    // The parallel A-B rematch is kept as its own edge
    assert_eq!(loaded.graph.size(), 4);
}

#[test]
fn test_win_ledger_ranking() {
    let mut ledger = WinLedger::default();
    ledger.record_win("B".to_string());
    ledger.record_win("A".to_string());
    ledger.record_win("B".to_string());
    ledger.record_win("C".to_string());

    assert_eq!(
        ledger.ranking(),
        vec![
            ("B".to_string(), 2),
            ("A".to_string(), 1),
            ("C".to_string(), 1),
        ]
    );
}
