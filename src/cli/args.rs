//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::constants;
use crate::logger::LogLevel;
use crate::state::InterfaceFilter;

/// ipinfo - Get IP address information.
#[derive(Parser, Debug)]
#[command(name = "ipinfo", author, version, about = "Get IP address information.", long_about = None)]
pub struct Args {
    /// Directory holding config.toml
    #[arg(long, global = true, env = constants::CONFIG_DIR_ENV, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Diagnostic log level (overrides RUST_LOG)
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Get local IP address information
    #[command(visible_aliases = ["a", "local"])]
    Address {
        /// Skip the public address request
        #[arg(long)]
        no_public: bool,
        /// Interface exclusion policy
        #[arg(long, value_enum)]
        filter: Option<InterfaceFilter>,
        /// Report link-local (fe80::) addresses too
        #[arg(long)]
        keep_link_local: bool,
    },
    /// Lookup an IP address
    #[command(visible_alias = "l")]
    Lookup {
        /// IPv4 or IPv6 address to look up
        ip: Option<String>,
    },
}
