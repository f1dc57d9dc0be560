use serde::Serialize;

use crate::as_graph::ASGraph;
use crate::shared::Classification;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationCounts {
    pub enterprise: usize,
    pub content: usize,
    pub transit: usize,
    pub unclassified: usize,
}

impl ClassificationCounts {
    pub fn total(&self) -> usize {
        self.enterprise + self.content + self.transit + self.unclassified
    }
}

/// Assigns a business role to every node from its final degrees. Must run
/// after ingestion has finished; rules are checked in priority order.
pub fn classify_nodes(graph: &mut ASGraph) -> ClassificationCounts {
    let mut counts = ClassificationCounts::default();

    for as_obj in graph.as_dict.values_mut() {
        let customer_degree = as_obj.customer_degree();
        let peer_degree = as_obj.peer_degree();

        let classification = if customer_degree == 0 && peer_degree == 0 {
            Classification::Enterprise
        } else if customer_degree == 0 && peer_degree > 0 {
            Classification::Content
        } else if customer_degree > 0 {
            Classification::Transit
        } else {
            Classification::Unclassified
        };

        as_obj.classification = classification;
        match classification {
            Classification::Enterprise => counts.enterprise += 1,
            Classification::Content => counts.content += 1,
            Classification::Transit => counts.transit += 1,
            Classification::Unclassified => counts.unclassified += 1,
        }
    }

    counts
}
