// Re-export all public modules
pub mod as2type;
pub mod as_graph;
pub mod classify;
pub mod collector;
pub mod ingest;
pub mod output;
pub mod shared;
pub mod tier1;

// Re-export commonly used types at the crate root
pub use as_graph::{AS, ASGraph, ASN};
pub use classify::{ClassificationCounts, classify_nodes};
pub use collector::CaidaRelationshipCollector;
pub use shared::{CaidaClass, Classification};
pub use tier1::{CliqueMember, find_clique_basic, grow_clique_if_small};
