use std::fs;

use tempfile::TempDir;

use astopology::as_graph::ASGraph;
use astopology::classify::classify_nodes;
use astopology::output::{NODE_TABLE_FILE, RUN_SUMMARY_FILE, RunReport, write_node_table_csv};
use astopology::tier1::{find_clique_basic, grow_clique_if_small};

fn create_small_graph() -> ASGraph {
    let mut graph = ASGraph::new();
    graph.add_peer_link(1, 2);
    graph.add_customer_provider(1, 3);
    graph.add_ip_space(3, 256);
    graph
}

#[test]
fn test_node_table_header_and_rows() {
    let mut graph = create_small_graph();
    classify_nodes(&mut graph);

    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join(NODE_TABLE_FILE);
    write_node_table_csv(&graph, &csv_path).unwrap();

    let contents = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(
        lines[0],
        "ASN,CustomerDegree,PeerDegree,ProviderDegree,GlobalDegree,TotalIpSpace,Classification"
    );
    assert_eq!(lines.len(), 4);
    // Rows come out in ASN order
    assert_eq!(lines[1], "1,1,1,0,2,0,Transit");
    assert_eq!(lines[2], "2,0,1,0,1,0,Content");
    assert_eq!(lines[3], "3,0,0,1,1,256,Enterprise");
}

#[test]
fn test_node_table_empty_graph() {
    let graph = ASGraph::new();

    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join(NODE_TABLE_FILE);
    write_node_table_csv(&graph, &csv_path).unwrap();

    let contents = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(contents.lines().count(), 1);
}

#[test]
fn test_run_report_round_trips_through_json() {
    let mut graph = create_small_graph();
    let classification_counts = classify_nodes(&mut graph);
    let tier1_basic = find_clique_basic(&graph);
    let tier1_grown = grow_clique_if_small(&graph, 10, 50);

    let report = RunReport {
        node_count: graph.len(),
        classification_counts,
        caida_agreement: None,
        tier1_basic,
        tier1_grown,
    };

    let temp_dir = TempDir::new().unwrap();
    report.save_to_file(temp_dir.path()).unwrap();

    let contents = fs::read_to_string(temp_dir.path().join(RUN_SUMMARY_FILE)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();

    assert_eq!(parsed["node_count"], 3);
    assert_eq!(parsed["classification_counts"]["transit"], 1);
    assert_eq!(parsed["classification_counts"]["content"], 1);
    assert_eq!(parsed["classification_counts"]["enterprise"], 1);
    assert!(parsed["caida_agreement"].is_null());

    // Both clique results are reported under their own names
    assert!(parsed["tier1_basic"].is_array());
    assert!(parsed["tier1_grown"].is_array());
    assert_eq!(parsed["tier1_basic"][0]["asn"], 1);
    assert_eq!(parsed["tier1_basic"][0]["global_degree"], 2);
}
