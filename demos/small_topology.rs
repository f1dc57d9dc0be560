use astopology::as_graph::ASGraph;
use astopology::classify::classify_nodes;
use astopology::tier1::find_clique_basic;

fn main() {
    // Build a small topology by hand: three peered transit ASes on top,
    // one stub customer under each
    let mut graph = ASGraph::new();
    graph.add_peer_link(1, 2);
    graph.add_peer_link(1, 3);
    graph.add_peer_link(2, 3);
    graph.add_customer_provider(1, 10);
    graph.add_customer_provider(2, 20);
    graph.add_customer_provider(3, 30);
    graph.add_ip_space(10, 256);

    let counts = classify_nodes(&mut graph);
    println!(
        "{} ASes: {} transit, {} content, {} enterprise",
        graph.len(),
        counts.transit,
        counts.content,
        counts.enterprise
    );

    // Walk one node's relationships
    if let Some(as1) = graph.get(&1) {
        println!(
            "\nAS1 is {} with global degree {}",
            as1.classification,
            as1.global_degree()
        );
        for customer in &as1.customers {
            println!("  AS1 -> AS{} (customer)", customer);
        }
        for peer in &as1.peers {
            println!("  AS1 <-> AS{} (peer)", peer);
        }
    }

    // The peered mesh at the top comes out as the clique
    let clique = find_clique_basic(&graph);
    println!("\nTier-1 clique:");
    for member in &clique {
        println!("  AS{} (global degree {})", member.asn, member.global_degree);
    }
}
