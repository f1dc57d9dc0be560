use std::collections::HashSet;

use astopology::as_graph::{AS, ASGraph};
use astopology::classify::classify_nodes;
use astopology::shared::Classification;

/// No customers and no peers, regardless of providers
#[test]
fn test_enterprise_rule() {
    let mut graph = ASGraph::new();
    graph.insert(AS::new(1));
    graph.insert(AS::from_asn_sets(
        2,
        HashSet::new(),
        HashSet::from([10, 11]), // providers only
        HashSet::new(),
    ));

    classify_nodes(&mut graph);

    assert_eq!(graph.get(&1).unwrap().classification, Classification::Enterprise);
    assert_eq!(graph.get(&2).unwrap().classification, Classification::Enterprise);
}

/// Peers but no customers, providers irrelevant
#[test]
fn test_content_rule() {
    let mut graph = ASGraph::new();
    graph.insert(AS::from_asn_sets(
        1,
        HashSet::from([5]),
        HashSet::new(),
        HashSet::new(),
    ));
    graph.insert(AS::from_asn_sets(
        2,
        HashSet::from([5, 6]),
        HashSet::from([7]),
        HashSet::new(),
    ));

    classify_nodes(&mut graph);

    assert_eq!(graph.get(&1).unwrap().classification, Classification::Content);
    assert_eq!(graph.get(&2).unwrap().classification, Classification::Content);
}

/// Any customer at all makes the AS Transit
#[test]
fn test_transit_rule() {
    let mut graph = ASGraph::new();
    graph.insert(AS::from_asn_sets(
        1,
        HashSet::new(),
        HashSet::new(),
        HashSet::from([5]),
    ));
    // Customers win over peers
    graph.insert(AS::from_asn_sets(
        2,
        HashSet::from([6, 7]),
        HashSet::from([8]),
        HashSet::from([5]),
    ));

    classify_nodes(&mut graph);

    assert_eq!(graph.get(&1).unwrap().classification, Classification::Transit);
    assert_eq!(graph.get(&2).unwrap().classification, Classification::Transit);
}

#[test]
fn test_counts_match_assignments() {
    let mut graph = ASGraph::new();
    // 1 is a provider of 3 and 4, 2 peers with 3
    graph.add_customer_provider(1, 3);
    graph.add_customer_provider(1, 4);
    graph.add_peer_link(2, 3);

    let counts = classify_nodes(&mut graph);

    // 1: Transit; 2: Content; 3: Content (peer, no customers); 4: Enterprise
    assert_eq!(counts.transit, 1);
    assert_eq!(counts.content, 2);
    assert_eq!(counts.enterprise, 1);
    assert_eq!(counts.unclassified, 0);
    assert_eq!(counts.total(), graph.len());
}

#[test]
fn test_every_node_gets_a_class() {
    let mut graph = ASGraph::new();
    graph.add_peer_link(1, 2);
    graph.add_customer_provider(2, 3);
    graph.add_customer_provider(4, 2);
    graph.get_or_create(5);

    classify_nodes(&mut graph);

    for as_obj in graph.iter() {
        assert_ne!(
            as_obj.classification,
            Classification::Unclassified,
            "AS{} was left unclassified",
            as_obj.asn
        );
    }
}

#[test]
fn test_classification_is_pure_function_of_degrees() {
    // Same degree profile through different construction paths
    let mut first = ASGraph::new();
    first.add_peer_link(1, 2);
    first.add_peer_link(1, 3);

    let mut second = ASGraph::new();
    second.insert(AS::from_asn_sets(
        1,
        HashSet::from([20, 30]),
        HashSet::new(),
        HashSet::new(),
    ));

    classify_nodes(&mut first);
    classify_nodes(&mut second);

    assert_eq!(
        first.get(&1).unwrap().classification,
        second.get(&1).unwrap().classification
    );
}

#[test]
fn test_empty_graph() {
    let mut graph = ASGraph::new();
    let counts = classify_nodes(&mut graph);

    assert_eq!(counts.total(), 0);
}
