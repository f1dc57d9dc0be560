use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::as2type::AgreementStats;
use crate::as_graph::{ASGraph, ASN};
use crate::classify::ClassificationCounts;
use crate::tier1::CliqueMember;

pub const NODE_TABLE_FILE: &str = "as_degrees_and_ip_space.csv";
pub const RUN_SUMMARY_FILE: &str = "run_summary.json";

const NODE_TABLE_HEADER: &str =
    "ASN,CustomerDegree,PeerDegree,ProviderDegree,GlobalDegree,TotalIpSpace,Classification";

/// Writes the per-AS table, one row per node, rows ordered by AS number so
/// output is stable across runs.
pub fn write_node_table_csv(graph: &ASGraph, path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", NODE_TABLE_HEADER)?;

    let mut asns: Vec<ASN> = graph.as_dict.keys().copied().collect();
    asns.sort_unstable();

    for asn in asns {
        if let Some(as_obj) = graph.get(&asn) {
            writeln!(
                writer,
                "{},{},{},{},{},{},{}",
                as_obj.asn,
                as_obj.customer_degree(),
                as_obj.peer_degree(),
                as_obj.provider_degree(),
                as_obj.global_degree(),
                as_obj.total_ip_space,
                as_obj.classification
            )?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct RunReport {
    /// Total nodes in the final graph
    pub node_count: usize,

    /// Per-class tallies from the classification pass
    pub classification_counts: ClassificationCounts,

    /// Agreement with the CAIDA as2type labels, when that input was given
    pub caida_agreement: Option<AgreementStats>,

    /// Basic greedy clique, walk stopped at the first failure
    pub tier1_basic: Vec<CliqueMember>,

    /// Clique after the bounded growth pass
    pub tier1_grown: Vec<CliqueMember>,
}

impl RunReport {
    pub fn save_to_file(&self, output_dir: &Path) -> std::io::Result<()> {
        let file_path = output_dir.join(RUN_SUMMARY_FILE);

        let data = serde_json::json!({
            "node_count": self.node_count,
            "classification_counts": self.classification_counts,
            "caida_agreement": self.caida_agreement,
            "tier1_basic": self.tier1_basic,
            "tier1_grown": self.tier1_grown,
        });

        let json = serde_json::to_string_pretty(&data)?;
        fs::write(file_path, json)?;

        Ok(())
    }
}
