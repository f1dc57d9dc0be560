use std::collections::{HashMap, HashSet};

use crate::shared::Classification;

pub type ASN = u32;

#[derive(Debug, Clone)]
pub struct AS {
    pub asn: ASN,
    pub peers: HashSet<ASN>,
    pub providers: HashSet<ASN>,
    pub customers: HashSet<ASN>,
    pub total_ip_space: u64,
    pub classification: Classification,
}

impl AS {
    pub fn new(asn: ASN) -> Self {
        AS {
            asn,
            peers: HashSet::new(),
            providers: HashSet::new(),
            customers: HashSet::new(),
            total_ip_space: 0,
            classification: Classification::Unclassified,
        }
    }

    pub fn from_asn_sets(
        asn: ASN,
        peer_asns: HashSet<ASN>,
        provider_asns: HashSet<ASN>,
        customer_asns: HashSet<ASN>,
    ) -> Self {
        AS {
            asn,
            peers: peer_asns,
            providers: provider_asns,
            customers: customer_asns,
            total_ip_space: 0,
            classification: Classification::Unclassified,
        }
    }

    pub fn customer_degree(&self) -> usize {
        self.customers.len()
    }

    pub fn peer_degree(&self) -> usize {
        self.peers.len()
    }

    pub fn provider_degree(&self) -> usize {
        self.providers.len()
    }

    pub fn neighbor_asns(&self) -> HashSet<ASN> {
        let mut result = HashSet::new();
        result.extend(&self.peers);
        result.extend(&self.providers);
        result.extend(&self.customers);
        result
    }

    // Distinct neighbors: an AS related through more than one role counts once.
    pub fn global_degree(&self) -> usize {
        self.neighbor_asns().len()
    }

    pub fn has_relationship_with(&self, asn: ASN) -> bool {
        self.customers.contains(&asn) || self.peers.contains(&asn) || self.providers.contains(&asn)
    }
}

#[derive(Debug, Clone)]
pub struct ASGraph {
    pub as_dict: HashMap<ASN, AS>,
}

impl ASGraph {
    pub fn new() -> Self {
        ASGraph {
            as_dict: HashMap::new(),
        }
    }

    pub fn get(&self, asn: &ASN) -> Option<&AS> {
        self.as_dict.get(asn)
    }

    pub fn get_mut(&mut self, asn: &ASN) -> Option<&mut AS> {
        self.as_dict.get_mut(asn)
    }

    pub fn insert(&mut self, as_obj: AS) {
        self.as_dict.insert(as_obj.asn, as_obj);
    }

    pub fn get_or_create(&mut self, asn: ASN) -> &mut AS {
        self.as_dict.entry(asn).or_insert_with(|| AS::new(asn))
    }

    pub fn len(&self) -> usize {
        self.as_dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_dict.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AS> {
        self.as_dict.values()
    }

    // Recorded on both endpoints, creating nodes as needed.
    pub fn add_customer_provider(&mut self, provider_asn: ASN, customer_asn: ASN) {
        self.get_or_create(provider_asn)
            .customers
            .insert(customer_asn);
        self.get_or_create(customer_asn)
            .providers
            .insert(provider_asn);
    }

    pub fn add_peer_link(&mut self, asn1: ASN, asn2: ASN) {
        self.get_or_create(asn1).peers.insert(asn2);
        self.get_or_create(asn2).peers.insert(asn1);
    }

    pub fn add_ip_space(&mut self, asn: ASN, addresses: u64) {
        self.get_or_create(asn).total_ip_space += addresses;
    }

    // Any relationship in either direction counts as connected.
    pub fn are_connected(&self, asn1: ASN, asn2: ASN) -> bool {
        match (self.as_dict.get(&asn1), self.as_dict.get(&asn2)) {
            (Some(first), Some(second)) => {
                first.has_relationship_with(asn2) || second.has_relationship_with(asn1)
            }
            _ => false,
        }
    }
}

impl Default for ASGraph {
    fn default() -> Self {
        Self::new()
    }
}
