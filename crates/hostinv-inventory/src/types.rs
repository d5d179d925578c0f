//! Inventory type definitions

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::address;

/// Variables attached to a single host or group
pub type VarMap = IndexMap<String, String>;

/// Per-host variables, keyed by hostname
pub type HostVars = IndexMap<String, VarMap>;

// ============================================================================
// Host Records
// ============================================================================

/// A managed host as supplied by a [`HostSource`](crate::source::HostSource)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostRecord {
    /// Hostname, expected to be unique within one export
    pub hostname: String,
    /// Network address, `host:port` or bare host
    pub address: String,
    /// Labels attached to the host
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl HostRecord {
    /// Create a host record without labels
    pub fn new(hostname: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            address: address.into(),
            labels: BTreeMap::new(),
        }
    }

    /// Attach a label
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Bare IP (or host name) part of the address
    #[must_use]
    pub fn host_ip(&self) -> &str {
        address::host_ip(&self.address)
    }
}

// ============================================================================
// Inventory
// ============================================================================

/// A group of hosts sharing a label key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Hostnames in scan order
    pub hosts: Vec<String>,
    /// Group variables (always empty, there is no upstream source for them)
    #[serde(default)]
    pub vars: VarMap,
}

impl Group {
    /// Create a group from its hosts
    #[must_use]
    pub fn new(hosts: Vec<String>) -> Self {
        Self {
            hosts,
            vars: VarMap::new(),
        }
    }
}

/// The `_meta` block of a `--list` inventory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Variables of every host, grouped or not
    #[serde(default)]
    pub hostvars: HostVars,
}

/// Complete dynamic inventory as returned by `--list`
///
/// Groups are serialized first, in first-seen order, followed by `_meta`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Groups keyed by label name
    #[serde(flatten)]
    pub groups: IndexMap<String, Group>,
    /// Per-host variables
    #[serde(rename = "_meta", default)]
    pub meta: Meta,
}

impl Inventory {
    /// Look up a group by name
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    /// Variables of a single host
    #[must_use]
    pub fn hostvars(&self, hostname: &str) -> Option<&VarMap> {
        self.meta.hostvars.get(hostname)
    }

    /// Number of groups
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
