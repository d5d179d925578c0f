//! hostinv-inventory: Ansible inventory export
//!
//! Groups host records by label and renders them in the formats consumed by
//! Ansible's dynamic (`--list` / `--host`) and static (INI) inventory protocols.

pub mod address;
pub mod constants;
pub mod encode;
pub mod error;
pub mod grouper;
pub mod hostvars;
pub mod source;
pub mod types;

pub use encode::{JsonStyle, build_inventory, host_vars, marshal_host, marshal_list, write_static};
pub use error::{InventoryError, Result};
pub use grouper::group_by_label;
pub use hostvars::build_hostvars;
pub use source::{FileSource, HostSource, StaticSource};
pub use types::{Group, HostRecord, HostVars, Inventory, Meta, VarMap};
