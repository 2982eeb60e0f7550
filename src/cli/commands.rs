//! Subcommand handlers.
//!
//! Handlers print everything, failures included, to `out` and return `Ok`
//! unless `out` itself cannot be written. Command failures never reach the
//! exit code.

use std::io::{self, Write};

use log::{debug, warn};

use crate::cli::args::Commands;
use crate::config::Config;
use crate::constants;
use crate::core::http::HttpGet;
use crate::core::interfaces;
use crate::core::lookup::{self, LookupService};
use crate::core::public_ip;
use crate::error::InterfaceError;
use crate::state::{InterfaceAddress, InterfaceFilter};
use crate::theme::Theme;

/// Settings for the `address` command after CLI flags are applied.
#[derive(Clone, Copy, Debug)]
pub struct AddressOptions<'a> {
    pub filter: InterfaceFilter,
    pub skip_link_local: bool,
    pub show_public: bool,
    pub public_ip_url: &'a str,
}

impl<'a> AddressOptions<'a> {
    /// Merges `address` flags over the loaded configuration.
    #[must_use]
    pub fn resolve(
        config: &'a Config,
        no_public: bool,
        filter: Option<InterfaceFilter>,
        keep_link_local: bool,
    ) -> Self {
        let filter = filter.unwrap_or(config.filter);
        Self {
            filter,
            skip_link_local: !keep_link_local && config.skips_link_local(filter),
            show_public: !no_public && config.show_public,
            public_ip_url: &config.public_ip_url,
        }
    }
}

/// Dispatches a parsed subcommand against the real network and interface table.
///
/// # Errors
///
/// Only if writing to `out` fails.
pub fn run<W: Write>(
    command: Commands,
    config: &Config,
    theme: Theme,
    http: &dyn HttpGet,
    out: &mut W,
) -> io::Result<()> {
    match command {
        Commands::Address {
            no_public,
            filter,
            keep_link_local,
        } => {
            let options = AddressOptions::resolve(config, no_public, filter, keep_link_local);
            address(out, theme, http, &options, interfaces::enumerate)
        }
        Commands::Lookup { ip } => {
            let service = LookupService {
                base_url: &config.lookup_url,
                token: config.token.as_deref(),
            };
            lookup(out, theme, http, service, ip.as_deref())
        }
    }
}

/// Runs `command` to completion for the process entry point.
///
/// A failing `out` (a closed pipe, a full disk) ends the report early but is
/// only logged, so the exit status stays zero.
pub fn execute<W: Write>(
    command: Commands,
    config: &Config,
    theme: Theme,
    http: &dyn HttpGet,
    out: &mut W,
) {
    if let Err(e) = run(command, config, theme, http, out) {
        debug!("Output stopped early: {e}");
    }
}

/// Prints the public address (optional) and the local interface report.
///
/// # Errors
///
/// Only if writing to `out` fails.
pub fn address<W, F>(
    out: &mut W,
    theme: Theme,
    http: &dyn HttpGet,
    options: &AddressOptions<'_>,
    enumerate: F,
) -> io::Result<()>
where
    W: Write,
    F: FnOnce() -> Result<Vec<InterfaceAddress>, InterfaceError>,
{
    let addresses = match enumerate() {
        Ok(addresses) => addresses,
        Err(e) => {
            warn!("{e}");
            return writeln!(out, "{}", theme.error(&e.to_string()));
        }
    };
    debug!(
        "{} interface addresses, filter={}, skip_link_local={}",
        addresses.len(),
        options.filter,
        options.skip_link_local
    );

    if options.show_public {
        match public_ip::fetch_public_ip(http, options.public_ip_url) {
            Ok(ip) => writeln!(
                out,
                "{} {}",
                theme.heading(constants::LABEL_PUBLIC_ADDRESS),
                theme.value(&ip)
            )?,
            Err(e) => {
                warn!("Public address unavailable: {e}");
                writeln!(out, "{}", theme.error(&e.to_string()))?;
            }
        }
    }

    writeln!(out, "{}", theme.heading(constants::LABEL_LOCAL_INTERFACES))?;
    for summary in interfaces::summarize(&addresses, options.filter, options.skip_link_local) {
        writeln!(out, "{}", interfaces::render_summary(&summary, theme))?;
    }
    Ok(())
}

/// Prints the metadata report for `argument`, or the reason it failed.
///
/// # Errors
///
/// Only if writing to `out` fails.
pub fn lookup<W: Write>(
    out: &mut W,
    theme: Theme,
    http: &dyn HttpGet,
    service: LookupService<'_>,
    argument: Option<&str>,
) -> io::Result<()> {
    match lookup::lookup(http, service, argument) {
        Ok(info) => writeln!(out, "{}", lookup::render(&info, theme)),
        Err(e) => {
            debug!("Lookup failed: {e:?}");
            writeln!(out, "{}", theme.error(&e.to_string()))
        }
    }
}
