use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::as_graph::{ASGraph, ASN};
use crate::shared::{InputNotFoundError, RelTypes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipRecord {
    pub as1: ASN,
    pub as2: ASN,
    pub rel_type: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRecord {
    pub prefix_len: u8,
    pub asn: ASN,
}

// Serial-2 line: "AS1|AS2|relType[|source]". Comments, blank lines and
// malformed records all come back as None.
pub fn parse_relationship_line(line: &str) -> Option<RelationshipRecord> {
    let parts: Vec<&str> = line.split('|').filter(|p| !p.is_empty()).collect();
    if parts.len() < 3 {
        return None;
    }
    let as1 = parts[0].trim().parse::<ASN>().ok()?;
    let as2 = parts[1].trim().parse::<ASN>().ok()?;
    let rel_type = parts[2].trim().parse::<i32>().ok()?;
    Some(RelationshipRecord { as1, as2, rel_type })
}

// RouteViews pfx2as line: "prefix\tlength\tasn". The prefix text itself is
// never needed, only the length. Multi-origin rows ("AS1_AS2") fail the ASN
// parse and are skipped like any other malformed record.
pub fn parse_pfx2as_line(line: &str) -> Option<PrefixRecord> {
    let parts: Vec<&str> = line.split('\t').filter(|p| !p.is_empty()).collect();
    if parts.len() < 3 {
        return None;
    }
    let prefix_len = parts[1].trim().parse::<i32>().ok()?;
    if !(0..=32).contains(&prefix_len) {
        return None;
    }
    let asn = parts[2].trim().parse::<ASN>().ok()?;
    Some(PrefixRecord {
        prefix_len: prefix_len as u8,
        asn,
    })
}

// Number of IPv4 addresses covered by one prefix of this length.
pub fn block_size(prefix_len: u8) -> u64 {
    1u64 << (32 - prefix_len as u32)
}

pub fn apply_relationship(graph: &mut ASGraph, record: &RelationshipRecord) {
    // Both endpoints exist even when the relationship type is unmodeled.
    graph.get_or_create(record.as1);
    graph.get_or_create(record.as2);

    match record.rel_type {
        RelTypes::PROVIDER_CUSTOMER => graph.add_customer_provider(record.as1, record.as2),
        RelTypes::PEER_PEER => graph.add_peer_link(record.as1, record.as2),
        _ => {}
    }
}

pub fn apply_prefix(graph: &mut ASGraph, record: &PrefixRecord) {
    graph.add_ip_space(record.asn, block_size(record.prefix_len));
}

/// Feeds every parseable relationship record into the graph. Returns how many
/// records were applied.
pub fn read_relationships<R: BufRead>(reader: R, graph: &mut ASGraph) -> std::io::Result<usize> {
    let mut applied = 0;
    for line in reader.lines() {
        let line = line?;
        if let Some(record) = parse_relationship_line(&line) {
            apply_relationship(graph, &record);
            applied += 1;
        }
    }
    Ok(applied)
}

pub fn read_ip_space<R: BufRead>(reader: R, graph: &mut ASGraph) -> std::io::Result<usize> {
    let mut applied = 0;
    for line in reader.lines() {
        let line = line?;
        if let Some(record) = parse_pfx2as_line(&line) {
            apply_prefix(graph, &record);
            applied += 1;
        }
    }
    Ok(applied)
}

/// Builds a fresh graph from a relationship file. The file is mandatory, so a
/// missing path is an error rather than a warning.
pub fn load_relationships_file(path: &Path) -> Result<ASGraph, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(InputNotFoundError {
            path: path.to_path_buf(),
        }
        .into());
    }

    let file = File::open(path)?;
    let total_bytes = file.metadata()?.len();
    let reader = BufReader::new(file);

    let pb = ProgressBar::new(total_bytes);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {bytes}/{total_bytes} relationships")?
            .progress_chars("##-"),
    );

    let mut graph = ASGraph::new();
    for line in reader.lines() {
        let line = line?;
        pb.inc(line.len() as u64 + 1);
        if let Some(record) = parse_relationship_line(&line) {
            apply_relationship(&mut graph, &record);
        }
    }
    pb.finish();

    Ok(graph)
}

pub fn load_ip_space_file(
    path: &Path,
    graph: &mut ASGraph,
) -> Result<usize, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(InputNotFoundError {
            path: path.to_path_buf(),
        }
        .into());
    }

    let file = File::open(path)?;
    let applied = read_ip_space(BufReader::new(file), graph)?;
    Ok(applied)
}
