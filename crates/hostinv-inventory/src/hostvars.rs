//! Per-host variable derivation

use tracing::debug;

use crate::constants::HOST_IP_VAR;
use crate::types::{HostRecord, HostVars, VarMap};

/// Variables derived for a single host
#[must_use]
pub fn vars_for(host: &HostRecord) -> VarMap {
    let mut vars = VarMap::new();
    vars.insert(HOST_IP_VAR.to_string(), host.host_ip().to_string());
    vars
}

/// Build the `hostvars` table for every host record
///
/// Records sharing a hostname overwrite each other; the last one wins but the
/// entry keeps the position of the first.
#[must_use]
pub fn build_hostvars(hosts: &[HostRecord]) -> HostVars {
    let mut hostvars = HostVars::with_capacity(hosts.len());
    for host in hosts {
        hostvars.insert(host.hostname.clone(), vars_for(host));
    }
    debug!(hosts = hostvars.len(), "built hostvars");
    hostvars
}
