use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budgetwise::cli::{handle_report_command, ReportCommands};
use budgetwise::config::{paths::BudgetwisePaths, settings::Settings};

const LOG_ENV: &str = "BUDGETWISE_LOG";

#[derive(Parser)]
#[command(
    name = "budgetwise",
    version,
    about = "Financial analytics for budgeting snapshots",
    long_about = "Budgetwise reads a snapshot of transactions, categories, budgets \
                  and savings goals and reports cash flow, spending breakdowns, \
                  trends and budget progress from the command line."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        init: bool,
    },
}

fn setup_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let paths = BudgetwisePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Report(cmd) => {
            let output = handle_report_command(&settings, cmd)?;
            println!("{}", output.trim_end());
        }
        Commands::Config { init } => {
            if init {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
                println!();
            }
            println!("Budgetwise Configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Default window:   {}", settings.default_window_days);
            println!("  Top categories:   {}", settings.top_categories);
            println!("  Recent limit:     {}", settings.recent_limit);
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Default format:   {:?}", settings.default_format);
        }
    }

    Ok(())
}
