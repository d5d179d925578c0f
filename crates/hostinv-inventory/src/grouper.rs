//! Label-based host grouping

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::constants::{ANSIBLE_LABEL_VALUE, META_KEY};
use crate::types::HostRecord;

/// Check whether a label value marks its key as an inventory group
///
/// Only ASCII letters are folded: `Ansible` and `ANSIBLE` match, but a value
/// spelled with non-ASCII look-alikes such as `ANSİBLE` (U+0130) does not.
#[must_use]
pub fn is_group_label(value: &str) -> bool {
    value.eq_ignore_ascii_case(ANSIBLE_LABEL_VALUE)
}

/// Partition hostnames into groups keyed by label name
///
/// A host joins group `K` when it carries label `K` with value `ansible`
/// (ASCII case-insensitive). Groups appear in first-seen order and keep hosts in scan
/// order; duplicates in the input are kept. The reserved `_meta` key never
/// becomes a group.
#[must_use]
pub fn group_by_label(hosts: &[HostRecord]) -> IndexMap<String, Vec<String>> {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();

    for host in hosts {
        for (label, value) in &host.labels {
            if !is_group_label(value) {
                continue;
            }
            if label == META_KEY {
                warn!(host = %host.hostname, "skipping label with reserved name {META_KEY}");
                continue;
            }
            groups
                .entry(label.clone())
                .or_default()
                .push(host.hostname.clone());
        }
    }

    debug!(hosts = hosts.len(), groups = groups.len(), "grouped hosts by label");
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_group_label_ignores_case() {
        assert!(is_group_label("ansible"));
        assert!(is_group_label("Ansible"));
        assert!(is_group_label("ANSIBLE"));
        assert!(!is_group_label("ansible "));
        assert!(!is_group_label("no"));
        assert!(!is_group_label("ANS\u{130}BLE"));
        assert!(!is_group_label("ansi\u{307}ble"));
    }

    #[test]
    fn test_group_by_label() {
        let hosts = vec![
            HostRecord::new("h1", "10.0.0.1:22").with_label("web", "ansible"),
            HostRecord::new("h2", "10.0.0.2:22").with_label("web", "no"),
            HostRecord::new("h3", "10.0.0.3:22")
                .with_label("web", "ANSIBLE")
                .with_label("db", "Ansible"),
        ];

        let groups = group_by_label(&hosts);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["web"], vec!["h1", "h3"]);
        assert_eq!(groups["db"], vec!["h3"]);
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["web", "db"]);
    }

    #[test]
    fn test_group_key_keeps_case() {
        let hosts = vec![
            HostRecord::new("h1", "10.0.0.1").with_label("Web", "ansible"),
            HostRecord::new("h2", "10.0.0.2").with_label("web", "ansible"),
        ];

        let groups = group_by_label(&hosts);

        assert_eq!(groups["Web"], vec!["h1"]);
        assert_eq!(groups["web"], vec!["h2"]);
    }

    #[test]
    fn test_hosts_without_labels_join_no_group() {
        let hosts = vec![HostRecord::new("h1", "10.0.0.1")];
        assert!(group_by_label(&hosts).is_empty());
        assert!(group_by_label(&[]).is_empty());
    }

    #[test]
    fn test_duplicate_hosts_are_kept() {
        let host = HostRecord::new("h1", "10.0.0.1").with_label("web", "ansible");
        let groups = group_by_label(&[host.clone(), host]);
        assert_eq!(groups["web"], vec!["h1", "h1"]);
    }

    #[test]
    fn test_meta_label_is_reserved() {
        let hosts = vec![
            HostRecord::new("h1", "10.0.0.1")
                .with_label(META_KEY, "ansible")
                .with_label("web", "ansible"),
        ];

        let groups = group_by_label(&hosts);

        assert!(!groups.contains_key(META_KEY));
        assert_eq!(groups["web"], vec!["h1"]);
    }
}
