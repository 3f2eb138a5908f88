use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use realtfolio::core::SortCriterion;
use realtfolio::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display holdings sorted by a criterion
    Holdings {
        /// Sort criterion, e.g. value, apr, occupancy, rent-start
        #[arg(short, long)]
        sort: Option<SortCriterion>,
        /// Reverse the natural order of the criterion
        #[arg(short, long)]
        reverse: bool,
    },
    /// List available sort criteria
    SortOptions,
    /// Count occurrences of a weekday in a date range
    Paydays {
        /// First day of the range (inclusive)
        #[arg(long)]
        start: String,
        /// Last day of the range (exclusive)
        #[arg(long)]
        end: String,
        /// Only count days on or after this date
        #[arg(long)]
        after: Option<String>,
        /// Full weekday name, e.g. Monday
        #[arg(long)]
        weekday: String,
    },
    /// Display the wallet address list
    Wallets,
    /// Display the subgraph endpoints
    Sources,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config_path = cli.config_path.as_deref();
    let result = match cli.command {
        Some(Commands::Setup) => match config_path {
            Some(path) => realtfolio::cli::setup::setup_at_path(path),
            None => realtfolio::cli::setup::setup(),
        },
        Some(Commands::Holdings { sort, reverse }) => realtfolio::run_command(
            realtfolio::AppCommand::Holdings {
                sort_by: sort,
                reverse,
            },
            config_path,
        ),
        Some(Commands::SortOptions) => {
            realtfolio::run_command(realtfolio::AppCommand::SortOptions, config_path)
        }
        Some(Commands::Paydays {
            start,
            end,
            after,
            weekday,
        }) => realtfolio::run_paydays(&start, &end, after.as_deref(), &weekday),
        Some(Commands::Wallets) => {
            realtfolio::run_command(realtfolio::AppCommand::Wallets, config_path)
        }
        Some(Commands::Sources) => {
            realtfolio::run_command(realtfolio::AppCommand::Sources, config_path)
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
