use std::io;

use clap::{CommandFactory, Parser};
use color_eyre::Result;
use crossterm::tty::IsTty;
use log::debug;

use ipinfo::cli::args::Args;
use ipinfo::cli::commands;
use ipinfo::config;
use ipinfo::core::http;
use ipinfo::logger;
use ipinfo::theme::Theme;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let stderr_color =
        !args.no_color && std::env::var_os("NO_COLOR").is_none() && io::stderr().is_tty();
    logger::init_logger(args.log_level, stderr_color)?;

    let Some(command) = args.command else {
        Args::command().print_help()?;
        return Ok(());
    };

    let config = config::load_or_default(args.config_dir.as_deref());
    debug!(
        "Lookup service {}, public address service {}, filter {}",
        config.lookup_url, config.public_ip_url, config.filter
    );

    let theme = Theme::detect(config.color && !args.no_color);
    let http = http::client_or_unavailable(config.timeout);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::execute(command, &config, theme, http.as_ref(), &mut out);

    Ok(())
}
