use std::io::Write;

use hostinv_inventory::constants::HOST_IP_VAR;
use hostinv_inventory::*;

const HOSTS_TOML: &str = r#"
[[host]]
hostname = "web-1"
address = "10.0.0.1:3022"
labels = { web = "ansible", env = "prod" }

[[host]]
hostname = "web-2"
address = "[2001:db8::2]:3022"
labels = { web = "Ansible" }

[[host]]
hostname = "db-1"
address = "10.0.0.3"
labels = { db = "ANSIBLE", web = "no" }

[[host]]
hostname = "bastion"
address = "10.0.0.4:22"
"#;

fn hosts_file(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_list_from_hosts_file() {
    let file = hosts_file(HOSTS_TOML, ".toml");
    let source = FileSource::new(file.path());

    let hosts = source.hosts().await.unwrap();
    let out = marshal_list(&hosts, JsonStyle::Compact).unwrap();
    let inventory: Inventory = serde_json::from_slice(&out).unwrap();

    assert_eq!(inventory.group_count(), 2);
    assert_eq!(inventory.group("web").unwrap().hosts, vec!["web-1", "web-2"]);
    assert_eq!(inventory.group("db").unwrap().hosts, vec!["db-1"]);
    assert!(inventory.group("env").is_none());
    assert!(inventory.groups.values().all(|g| g.vars.is_empty()));

    assert_eq!(inventory.meta.hostvars.len(), 4);
    assert_eq!(inventory.hostvars("web-2").unwrap()[HOST_IP_VAR], "2001:db8::2");
    assert_eq!(inventory.hostvars("db-1").unwrap()[HOST_IP_VAR], "10.0.0.3");
    assert_eq!(inventory.hostvars("bastion").unwrap()[HOST_IP_VAR], "10.0.0.4");
}

#[tokio::test]
async fn test_host_query_from_hosts_file() {
    let file = hosts_file(HOSTS_TOML, ".toml");
    let hosts = FileSource::new(file.path()).hosts().await.unwrap();

    let out = marshal_host(&hosts, "bastion", JsonStyle::Compact).unwrap();
    assert_eq!(out, br#"{"ansible_host_ip":"10.0.0.4"}"#);

    let out = marshal_host(&hosts, "missing", JsonStyle::Compact).unwrap();
    assert_eq!(out, b"{}");
}

#[tokio::test]
async fn test_static_from_hosts_file() {
    let file = hosts_file(HOSTS_TOML, ".toml");
    let hosts = FileSource::new(file.path()).hosts().await.unwrap();

    let mut out = Vec::new();
    write_static(&hosts, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "[web]\nweb-1\nweb-2\n[db]\ndb-1\n"
    );
}

#[tokio::test]
async fn test_file_source_rereads_file() {
    let file = hosts_file(r#"[{"hostname": "h1", "address": "10.0.0.1"}]"#, ".json");
    let source = FileSource::new(file.path());

    assert_eq!(source.hosts().await.unwrap().len(), 1);

    std::fs::write(
        file.path(),
        r#"[{"hostname": "h1", "address": "10.0.0.1"}, {"hostname": "h2", "address": "10.0.0.2"}]"#,
    )
    .unwrap();

    assert_eq!(source.hosts().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_missing_hosts_file() {
    let source = FileSource::new("/nonexistent/hostinv/hosts.toml");
    let err = source.hosts().await.unwrap_err();
    assert!(matches!(err, InventoryError::SourceRead(_)));
    assert!(err.is_source_error());
}
