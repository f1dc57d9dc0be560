mod as2type;
mod as_graph;
mod classify;
mod collector;
mod ingest;
mod output;
mod shared;
mod tier1;

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use log::warn;

use crate::as2type::CaidaTypeCounts;
use crate::classify::{ClassificationCounts, classify_nodes};
use crate::collector::CaidaRelationshipCollector;
use crate::output::RunReport;
use crate::shared::InputNotFoundError;
use crate::tier1::{
    CliqueMember, DESIRED_MIN_CLIQUE_SIZE, MAX_RANK_TO_INSPECT, find_clique_basic,
    grow_clique_if_small,
};

struct RunConfig {
    /// Local relationship file; the CAIDA snapshot is downloaded when absent
    relationship_file: Option<PathBuf>,

    /// Optional RouteViews pfx2as file for IP space totals
    pfx2as_file: Option<PathBuf>,

    /// Optional CAIDA as2type file to compare classifications against
    as2type_file: Option<PathBuf>,

    /// Where the CSV node table and JSON summary land
    output_dir: PathBuf,

    /// Target snapshot age for the collector
    days_ago: u32,

    /// Cache directory override for the collector
    cache_dir: Option<PathBuf>,
}

impl RunConfig {
    fn new() -> Self {
        RunConfig {
            relationship_file: None,
            pfx2as_file: None,
            as2type_file: None,
            output_dir: PathBuf::from("."),
            days_ago: 10,
            cache_dir: None,
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run with --help for usage.");
            process::exit(2);
        }
    };

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<RunConfig, String> {
    let mut config = RunConfig::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            "--pfx2as" => {
                i += 1;
                config.pfx2as_file = Some(PathBuf::from(flag_value(args, i, "--pfx2as")?));
            }
            "--as2type" => {
                i += 1;
                config.as2type_file = Some(PathBuf::from(flag_value(args, i, "--as2type")?));
            }
            "--out" => {
                i += 1;
                config.output_dir = PathBuf::from(flag_value(args, i, "--out")?);
            }
            "--days-ago" => {
                i += 1;
                let value = flag_value(args, i, "--days-ago")?;
                config.days_ago = value
                    .parse::<u32>()
                    .map_err(|_| format!("--days-ago expects a number, got {:?}", value))?;
            }
            "--cache-dir" => {
                i += 1;
                config.cache_dir = Some(PathBuf::from(flag_value(args, i, "--cache-dir")?));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            arg => {
                if config.relationship_file.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                config.relationship_file = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("{} expects a value", flag))
}

fn print_usage() {
    println!("Usage: astopology [OPTIONS] [RELATIONSHIP_FILE]");
    println!();
    println!("Infers per-AS degrees, business roles and the Tier-1 clique from CAIDA");
    println!("serial-2 relationship data. Without RELATIONSHIP_FILE the most recent");
    println!("monthly snapshot is downloaded and cached.");
    println!();
    println!("Options:");
    println!("  --pfx2as <FILE>    RouteViews pfx2as file for IP space totals");
    println!("  --as2type <FILE>   CAIDA as2type file to compare classifications against");
    println!("  --out <DIR>        Output directory (default: current directory)");
    println!("  --days-ago <N>     Target snapshot age in days for downloads (default: 10)");
    println!("  --cache-dir <DIR>  Download cache directory");
    println!("  -h, --help         Show this help");
}

fn run(config: RunConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("AS Topology Inference\n");

    let relationship_file = match &config.relationship_file {
        Some(path) => {
            if !path.exists() {
                return Err(InputNotFoundError { path: path.clone() }.into());
            }
            path.clone()
        }
        None => {
            let mut caida_collector =
                CaidaRelationshipCollector::new().with_days_ago(config.days_ago);
            if let Some(dir) = &config.cache_dir {
                caida_collector = caida_collector.with_cache_dir(dir.clone());
            }
            caida_collector.run()?
        }
    };

    println!("Building AS graph from {:?}", relationship_file);
    let mut graph = ingest::load_relationships_file(&relationship_file)?;
    println!("Loaded {} ASes", graph.len());

    let classification_counts = classify_nodes(&mut graph);
    print_classification(&classification_counts);

    match &config.pfx2as_file {
        Some(path) if path.exists() => {
            let applied = ingest::load_ip_space_file(path, &mut graph)?;
            println!("\nAggregated IP space from {} prefix records", applied);
        }
        Some(path) => {
            warn!(
                "pfx2as file not found: {:?}; skipping IP space aggregation",
                path
            );
        }
        None => {}
    }

    let caida_agreement = match &config.as2type_file {
        Some(path) if path.exists() => {
            let reference = as2type::load_as_type_map(path)?;
            print_caida_counts(&as2type::count_types(&reference));

            let stats = as2type::compare_with_inferred(&graph, &reference);
            println!(
                "Agreement over {} common ASes: {} agree, {} disagree",
                stats.common, stats.agree, stats.disagree
            );
            Some(stats)
        }
        Some(path) => {
            warn!("as2type file not found: {:?}; skipping comparison", path);
            None
        }
        None => None,
    };

    let tier1_basic = find_clique_basic(&graph);
    let tier1_grown = grow_clique_if_small(&graph, DESIRED_MIN_CLIQUE_SIZE, MAX_RANK_TO_INSPECT);
    print_clique("Tier-1 clique (basic)", &tier1_basic);
    print_clique("Tier-1 clique (grown)", &tier1_grown);

    fs::create_dir_all(&config.output_dir)?;
    let csv_path = config.output_dir.join(output::NODE_TABLE_FILE);
    output::write_node_table_csv(&graph, &csv_path)?;

    let report = RunReport {
        node_count: graph.len(),
        classification_counts,
        caida_agreement,
        tier1_basic,
        tier1_grown,
    };
    report.save_to_file(&config.output_dir)?;

    println!("\nNode table written to {:?}", csv_path);
    println!(
        "Run summary written to {:?}",
        config.output_dir.join(output::RUN_SUMMARY_FILE)
    );

    Ok(())
}

fn print_classification(counts: &ClassificationCounts) {
    println!("\nClassification results");
    println!("----------------------");
    println!("  Enterprise:   {}", counts.enterprise);
    println!("  Content:      {}", counts.content);
    println!("  Transit:      {}", counts.transit);
    println!("  Unclassified: {}", counts.unclassified);
    println!("  Total:        {}", counts.total());
}

fn print_caida_counts(counts: &CaidaTypeCounts) {
    println!("\nCAIDA as2type labels");
    println!("--------------------");
    println!("  Enterprise:     {}", counts.enterprise);
    println!("  Content:        {}", counts.content);
    println!("  Transit/Access: {}", counts.transit_access);
    println!("  Total:          {}", counts.total());
}

fn print_clique(label: &str, clique: &[CliqueMember]) {
    println!("\n{} - {} members:", label, clique.len());
    for member in clique {
        println!("  AS{:<8} global degree {}", member.asn, member.global_degree);
    }
}
