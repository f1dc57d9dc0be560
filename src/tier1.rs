use serde::Serialize;

use crate::as_graph::{ASGraph, ASN};

pub const DESIRED_MIN_CLIQUE_SIZE: usize = 10;
pub const MAX_RANK_TO_INSPECT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CliqueMember {
    pub asn: ASN,
    pub global_degree: usize,
}

/// Every AS ordered by global degree descending. Ties break on the AS number
/// ascending so the ranking is identical across runs.
pub fn rank_by_global_degree(graph: &ASGraph) -> Vec<CliqueMember> {
    let mut ranked: Vec<CliqueMember> = graph
        .iter()
        .map(|as_obj| CliqueMember {
            asn: as_obj.asn,
            global_degree: as_obj.global_degree(),
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.global_degree
            .cmp(&a.global_degree)
            .then(a.asn.cmp(&b.asn))
    });
    ranked
}

fn connected_to_all(graph: &ASGraph, candidate: ASN, clique: &[CliqueMember]) -> bool {
    clique
        .iter()
        .all(|member| graph.are_connected(candidate, member.asn))
}

/// Greedy clique walk down the degree ranking: seed with the top-ranked AS,
/// then extend while each next candidate connects to every current member.
/// The first candidate that fails ends the walk.
pub fn find_clique_basic(graph: &ASGraph) -> Vec<CliqueMember> {
    let ranked = rank_by_global_degree(graph);

    let mut clique: Vec<CliqueMember> = Vec::new();
    for member in ranked {
        if clique.is_empty() || connected_to_all(graph, member.asn, &clique) {
            clique.push(member);
        } else {
            break;
        }
    }
    clique
}

/// Extends a too-small basic clique by scanning further down the ranking,
/// skipping candidates that fail the connectivity test instead of stopping.
/// The scan ends at the rank ceiling or once the clique reaches
/// `desired_min_size`, whichever comes first.
pub fn grow_clique_if_small(
    graph: &ASGraph,
    desired_min_size: usize,
    max_rank_to_inspect: usize,
) -> Vec<CliqueMember> {
    let mut clique = find_clique_basic(graph);
    if clique.len() >= desired_min_size {
        return clique;
    }

    let ranked = rank_by_global_degree(graph);
    let limit = max_rank_to_inspect.min(ranked.len());

    for i in clique.len()..limit {
        if clique.len() >= desired_min_size {
            break;
        }
        let candidate = ranked[i];
        if connected_to_all(graph, candidate.asn, &clique) {
            clique.push(candidate);
        }
    }

    clique
}
