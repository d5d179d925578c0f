//! Well-known names of the Ansible inventory protocol

/// Label value that marks a label key as an inventory group (compared ignoring case)
pub const ANSIBLE_LABEL_VALUE: &str = "ansible";

/// Reserved top-level key carrying per-host variables in `--list` output
pub const META_KEY: &str = "_meta";

/// Key of the per-host variable table inside the `_meta` block
pub const HOSTVARS_KEY: &str = "hostvars";

/// Host variable holding the host's bare IP address
pub const HOST_IP_VAR: &str = "ansible_host_ip";
