//! Inventory encoders
//!
//! Three renderers over the same host records:
//! - [`marshal_list`]: output for Ansible's `--list` flag
//! - [`marshal_host`]: output for Ansible's `--host <hostname>` flag
//! - [`write_static`]: INI static inventory

use std::io::Write;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::grouper::group_by_label;
use crate::hostvars::{build_hostvars, vars_for};
use crate::types::{Group, HostRecord, Inventory, Meta, VarMap};

/// JSON layout used by the encoders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Single line, no whitespace
    #[default]
    Compact,
    /// Indented, for humans
    Pretty,
}

impl JsonStyle {
    /// Pick a style from a `pretty` flag
    #[must_use]
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty { Self::Pretty } else { Self::Compact }
    }

    fn to_vec<T: Serialize + ?Sized>(self, value: &T) -> Result<Vec<u8>> {
        let out = match self {
            Self::Compact => serde_json::to_vec(value)?,
            Self::Pretty => serde_json::to_vec_pretty(value)?,
        };
        Ok(out)
    }
}

/// Build the full dynamic inventory for a set of hosts
#[must_use]
pub fn build_inventory(hosts: &[HostRecord]) -> Inventory {
    let groups = group_by_label(hosts)
        .into_iter()
        .map(|(name, members)| (name, Group::new(members)))
        .collect();

    Inventory {
        groups,
        meta: Meta {
            hostvars: build_hostvars(hosts),
        },
    }
}

/// Encode the `--list` inventory as JSON
///
/// ```json
/// {
///     "group_name": { "hosts": ["host1", "host2"], "vars": {} },
///     "_meta": { "hostvars": { "host1": { "ansible_host_ip": "10.0.0.1" } } }
/// }
/// ```
///
/// # Errors
/// Returns [`InventoryError::Encode`](crate::InventoryError::Encode) if serialization fails.
#[instrument(skip(hosts), fields(hosts = hosts.len()))]
pub fn marshal_list(hosts: &[HostRecord], style: JsonStyle) -> Result<Vec<u8>> {
    let inventory = build_inventory(hosts);
    let out = style.to_vec(&inventory)?;
    debug!(groups = inventory.group_count(), bytes = out.len(), "encoded inventory list");
    Ok(out)
}

/// Variables of a single host, empty if no record has that hostname
///
/// The first record with an exact hostname match wins.
#[must_use]
pub fn host_vars(hosts: &[HostRecord], hostname: &str) -> VarMap {
    hosts
        .iter()
        .find(|h| h.hostname == hostname)
        .map(vars_for)
        .unwrap_or_default()
}

/// Encode the `--host <hostname>` variables as JSON
///
/// An unknown host yields `{}`, as the inventory script protocol requires.
///
/// # Errors
/// Returns [`InventoryError::Encode`](crate::InventoryError::Encode) if serialization fails.
#[instrument(skip(hosts), fields(hosts = hosts.len()))]
pub fn marshal_host(hosts: &[HostRecord], hostname: &str, style: JsonStyle) -> Result<Vec<u8>> {
    let vars = host_vars(hosts, hostname);
    if vars.is_empty() {
        debug!("host not found, returning empty variables");
    }
    style.to_vec(&vars)
}

/// Write an INI static inventory, one `[group]` section per group
///
/// Sections follow each other without blank lines. Host variables are not
/// part of the static format and are left out.
///
/// # Errors
/// Returns [`InventoryError::Io`](crate::InventoryError::Io) if writing fails.
#[instrument(skip(hosts, out), fields(hosts = hosts.len()))]
pub fn write_static<W: Write>(hosts: &[HostRecord], out: &mut W) -> Result<()> {
    let groups = group_by_label(hosts);
    for (name, members) in &groups {
        writeln!(out, "[{name}]")?;
        for host in members {
            writeln!(out, "{host}")?;
        }
    }
    out.flush()?;
    debug!(groups = groups.len(), "wrote static inventory");
    Ok(())
}
