pub mod cli;
pub mod core;

use crate::cli::paydays::PaydayQuery;
use crate::core::config::AppConfig;
use crate::core::{SortCriterion, SortFilter};
use anyhow::Result;
use tracing::{debug, info};

/// Commands that read the configuration file.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Holdings {
        sort_by: Option<SortCriterion>,
        reverse: bool,
    },
    SortOptions,
    Wallets,
    Sources,
}

pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

/// Resolves the sort settings: command line flags win over the configured view.
pub fn resolve_filter(
    view: &SortFilter,
    sort_by: Option<SortCriterion>,
    reverse: bool,
) -> SortFilter {
    SortFilter {
        sort_by: sort_by.unwrap_or(view.sort_by),
        sort_reverse: reverse || view.sort_reverse,
    }
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!(?command, "realtfolio starting...");
    let config = load_config(config_path)?;

    match command {
        AppCommand::Holdings { sort_by, reverse } => {
            let filter = resolve_filter(&config.view, sort_by, reverse);
            cli::holdings::run(&config.holdings, &filter)
        }
        AppCommand::SortOptions => {
            println!("{}", cli::holdings::render_sort_options(&config.view));
            Ok(())
        }
        AppCommand::Wallets => cli::wallets::run(&config.wallet),
        AppCommand::Sources => {
            println!("{}", cli::wallets::render_sources(&config.subgraphs));
            Ok(())
        }
    }
}

/// Counts paydays; needs no configuration.
pub fn run_paydays(start: &str, end: &str, after: Option<&str>, weekday: &str) -> Result<()> {
    let query = PaydayQuery::parse(start, end, after, weekday)?;
    cli::paydays::run(&query)
}
