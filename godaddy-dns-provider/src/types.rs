use serde::{Deserialize, Serialize};

use crate::providers::common::rrset_key;

// ============ DNS Record Types ============

/// A DNS resource record as exchanged with the host.
///
/// `name` may be relative to the zone (`"www"`, `"@"`) or absolute
/// (`"www.example.com"`, with or without trailing dot). Records have no identity
/// beyond the `(type, name)` pair understood by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Record type, e.g. `"A"`, `"TXT"`, `"CNAME"`.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Ownership name.
    pub name: String,
    /// Value payload.
    pub data: String,
    /// Time to live in seconds.
    pub ttl: u32,
}

impl Record {
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        data: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            name: name.into(),
            data: data.into(),
            ttl,
        }
    }

    /// TXT record, the shape used for DNS-01 challenges.
    pub fn txt(name: impl Into<String>, data: impl Into<String>, ttl: u32) -> Self {
        Self::new("TXT", name, data, ttl)
    }

    /// Whether both records address the same `(type, name)` pair within `zone`.
    ///
    /// Names are compared relative to the zone, so `"www"` and `"www.example.com."`
    /// match in zone `example.com`. Types compare case-insensitively.
    pub fn same_rrset(&self, other: &Self, zone: &str) -> bool {
        rrset_key(&self.record_type, &self.name, zone)
            == rrset_key(&other.record_type, &other.name, zone)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name, self.ttl, self.record_type, self.data
        )
    }
}

// ============ Capability Types ============

/// An operation a record provider can perform for its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// List all records of a zone.
    Get,
    /// Add records to a zone.
    Append,
    /// Remove records from a zone.
    Delete,
    /// Replace the records of the touched `(type, name)` pairs.
    Set,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Self; 4] = [Self::Get, Self::Append, Self::Delete, Self::Set];
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Append => write!(f, "append"),
            Self::Delete => write!(f, "delete"),
            Self::Set => write!(f, "set"),
        }
    }
}
