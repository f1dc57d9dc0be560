use std::fmt;
use std::path::PathBuf;

/// Coarse business role inferred for an AS from its relationship degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum Classification {
    Enterprise = 0,
    Content = 1,
    Transit = 2,
    Unclassified = 3,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Classification::Enterprise => "Enterprise",
            Classification::Content => "Content",
            Classification::Transit => "Transit",
            Classification::Unclassified => "Unclassified",
        };
        write!(f, "{}", s)
    }
}

/// Classes used by the CAIDA as2type dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CaidaClass {
    Enterprise = 0,
    Content = 1,
    TransitAccess = 2,
    Unknown = 3,
}

impl fmt::Display for CaidaClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CaidaClass::Enterprise => "Enterprise",
            CaidaClass::Content => "Content",
            CaidaClass::TransitAccess => "Transit/Access",
            CaidaClass::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// Relationship type values used by the CAIDA serial-2 format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelTypes;

impl RelTypes {
    pub const PROVIDER_CUSTOMER: i32 = -1;
    pub const PEER_PEER: i32 = 0;
}

#[derive(Debug)]
pub struct InputNotFoundError {
    pub path: PathBuf,
}

impl fmt::Display for InputNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input file not found: {}", self.path.display())
    }
}

impl std::error::Error for InputNotFoundError {}
