//! Command-line arguments and inventory script dispatch

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use eyre::WrapErr;
use hostinv_inventory::{HostSource, JsonStyle, marshal_host, marshal_list, write_static};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "hostinv")]
#[command(about = "Ansible dynamic inventory from labelled hosts", long_about = None)]
#[command(version)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["list", "host", "static_inventory"])
))]
pub struct Cli {
    /// Print all groups and host variables as JSON
    #[arg(long)]
    pub list: bool,

    /// Print the variables of a single host as JSON
    #[arg(long, value_name = "HOSTNAME")]
    pub host: Option<String>,

    /// Print an INI static inventory
    #[arg(long = "static")]
    pub static_inventory: bool,

    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Hosts file to read, overrides the configured source
    #[arg(long, value_name = "FILE")]
    pub hosts_file: Option<PathBuf>,

    /// Indent JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// What the inventory script was asked to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    List,
    Host(String),
    Static,
}

impl Cli {
    /// Selected output mode
    #[must_use]
    pub fn mode(&self) -> Mode {
        if let Some(host) = &self.host {
            Mode::Host(host.clone())
        } else if self.static_inventory {
            Mode::Static
        } else {
            Mode::List
        }
    }
}

/// Fetch hosts from the source and write the requested inventory to `out`
///
/// # Errors
/// Returns an error if the source fails, encoding fails, or writing fails.
pub async fn run<W: Write>(
    mode: &Mode,
    source: &dyn HostSource,
    style: JsonStyle,
    out: &mut W,
) -> eyre::Result<()> {
    let hosts = source
        .hosts()
        .await
        .wrap_err_with(|| format!("failed to load hosts from {} source", source.source_type()))?;
    info!(hosts = hosts.len(), source = source.source_type(), ?mode, "exporting inventory");

    match mode {
        Mode::List => {
            let json = marshal_list(&hosts, style).wrap_err("failed to encode inventory list")?;
            out.write_all(&json)?;
            writeln!(out)?;
        }
        Mode::Host(name) => {
            let json = marshal_host(&hosts, name, style)
                .wrap_err_with(|| format!("failed to encode variables of host {name}"))?;
            out.write_all(&json)?;
            writeln!(out)?;
        }
        Mode::Static => {
            write_static(&hosts, out).wrap_err("failed to write static inventory")?;
        }
    }

    out.flush()?;
    Ok(())
}
