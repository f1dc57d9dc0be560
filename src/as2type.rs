use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::as_graph::{ASGraph, ASN};
use crate::shared::{CaidaClass, Classification, InputNotFoundError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CaidaTypeCounts {
    pub enterprise: usize,
    pub content: usize,
    pub transit_access: usize,
}

impl CaidaTypeCounts {
    pub fn total(&self) -> usize {
        self.enterprise + self.content + self.transit_access
    }
}

/// Agreement between inferred roles and the CAIDA as2type labels. Pairs where
/// either side maps to Unknown are skipped outright, so `common` always
/// equals `agree + disagree`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AgreementStats {
    pub common: usize,
    pub agree: usize,
    pub disagree: usize,
}

// as2type line: "asn|source|type".
pub fn parse_as2type_line(line: &str) -> Option<(ASN, CaidaClass)> {
    if line.starts_with('#') {
        return None;
    }
    let parts: Vec<&str> = line.split('|').filter(|p| !p.is_empty()).collect();
    if parts.len() < 3 {
        return None;
    }
    let asn = parts[0].trim().parse::<ASN>().ok()?;
    Some((asn, class_from_label(parts[2])))
}

fn class_from_label(label: &str) -> CaidaClass {
    let lowered = label.to_lowercase();
    if lowered.contains("transit") {
        CaidaClass::TransitAccess
    } else if lowered.contains("content") {
        CaidaClass::Content
    } else if lowered.contains("enterprise") {
        CaidaClass::Enterprise
    } else {
        CaidaClass::Unknown
    }
}

pub fn load_as_type_map(
    path: &Path,
) -> Result<HashMap<ASN, CaidaClass>, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(InputNotFoundError {
            path: path.to_path_buf(),
        }
        .into());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut map = HashMap::new();
    for line in reader.lines() {
        let line = line?;
        if let Some((asn, class)) = parse_as2type_line(&line) {
            map.insert(asn, class);
        }
    }
    Ok(map)
}

pub fn count_types(map: &HashMap<ASN, CaidaClass>) -> CaidaTypeCounts {
    let mut counts = CaidaTypeCounts::default();
    for class in map.values() {
        match class {
            CaidaClass::Enterprise => counts.enterprise += 1,
            CaidaClass::Content => counts.content += 1,
            CaidaClass::TransitAccess => counts.transit_access += 1,
            CaidaClass::Unknown => {}
        }
    }
    counts
}

pub fn to_caida_class(classification: Classification) -> CaidaClass {
    match classification {
        Classification::Enterprise => CaidaClass::Enterprise,
        Classification::Content => CaidaClass::Content,
        Classification::Transit => CaidaClass::TransitAccess,
        Classification::Unclassified => CaidaClass::Unknown,
    }
}

pub fn compare_with_inferred(
    graph: &ASGraph,
    reference: &HashMap<ASN, CaidaClass>,
) -> AgreementStats {
    let mut stats = AgreementStats::default();

    for as_obj in graph.iter() {
        if let Some(&reference_class) = reference.get(&as_obj.asn) {
            let inferred = to_caida_class(as_obj.classification);
            if reference_class == CaidaClass::Unknown || inferred == CaidaClass::Unknown {
                continue;
            }

            stats.common += 1;
            if inferred == reference_class {
                stats.agree += 1;
            } else {
                stats.disagree += 1;
            }
        }
    }

    stats
}
