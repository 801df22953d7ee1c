//! CLI commands for reports
//!
//! Each subcommand loads a snapshot, runs one calculator (or the full
//! dashboard) and renders the result as a table, JSON or YAML.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;

use crate::config::{OutputFormat, Settings};
use crate::display::{
    format_achievements, format_breakdown, format_budgets, format_dashboard, format_flow,
    format_trends,
};
use crate::error::{BudgetwiseError, BudgetwiseResult};
use crate::models::WindowDays;
use crate::reports::{
    achievements, breakdown, budget_progress, buckets, trend, DashboardParams, DashboardReport,
    Granularity,
};
use crate::storage::Snapshot;

/// Options shared by every report
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Snapshot file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(short, long, env = "BUDGETWISE_SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub now: Option<String>,

    /// Window length in days: 7 or 30
    #[arg(short, long)]
    pub window: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// What the breakdown groups by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BreakdownBy {
    #[default]
    Category,
    PaymentMethod,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show the full dashboard
    Dashboard {
        #[command(flatten)]
        args: ReportArgs,
    },

    /// Show income and expense per day or per month
    Flow {
        #[command(flatten)]
        args: ReportArgs,

        /// Bucket size
        #[arg(short, long, value_enum, default_value_t = Granularity::Day)]
        granularity: Granularity,
    },

    /// Show spending grouped by category or payment method
    #[command(alias = "spending")]
    Breakdown {
        #[command(flatten)]
        args: ReportArgs,

        /// Grouping key
        #[arg(long, value_enum, default_value_t = BreakdownBy::Category)]
        by: BreakdownBy,

        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,
    },

    /// Compare the current window with the one before it
    Trends {
        #[command(flatten)]
        args: ReportArgs,
    },

    /// Show budget progress
    Budgets {
        #[command(flatten)]
        args: ReportArgs,
    },

    /// Show which achievements are unlocked
    Achievements {
        #[command(flatten)]
        args: ReportArgs,
    },
}

/// Resolved inputs for one report run
struct ReportContext {
    snapshot: Snapshot,
    now: NaiveDate,
    window: WindowDays,
    format: OutputFormat,
}

impl ReportContext {
    fn resolve(settings: &Settings, args: &ReportArgs) -> BudgetwiseResult<Self> {
        let now = parse_now(args.now.as_deref())?;
        let window = match args.window {
            Some(days) => WindowDays::try_from(days)?,
            None => settings.default_window_days,
        };
        let format = args.format.unwrap_or(settings.default_format);
        let snapshot = Snapshot::load(&args.snapshot)?;

        debug!(%now, %window, ?format, "Resolved report options");
        Ok(Self {
            snapshot,
            now,
            window,
            format,
        })
    }
}

/// Handle report commands, returning the rendered output
pub fn handle_report_command(settings: &Settings, cmd: ReportCommands) -> BudgetwiseResult<String> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Dashboard { args } => {
            let ctx = ReportContext::resolve(settings, &args)?;
            let params = DashboardParams::new(ctx.now, ctx.window)
                .with_top_categories(settings.top_categories)
                .with_recent_limit(settings.recent_limit);
            let report = DashboardReport::assemble(&ctx.snapshot, &params);
            render(&report, ctx.format, |r| format_dashboard(r, currency))
        }
        ReportCommands::Flow { args, granularity } => {
            let ctx = ReportContext::resolve(settings, &args)?;
            let series =
                buckets::flow_series(&ctx.snapshot.transactions, ctx.now, ctx.window, granularity);
            render(&series, ctx.format, |s| format_flow(s, currency))
        }
        ReportCommands::Breakdown { args, by, top } => {
            let ctx = ReportContext::resolve(settings, &args)?;
            let result = match by {
                BreakdownBy::Category => breakdown::by_category(
                    &ctx.snapshot.transactions,
                    &ctx.snapshot.categories,
                    Some(top.unwrap_or(settings.top_categories)),
                ),
                BreakdownBy::PaymentMethod => {
                    breakdown::by_payment_method(&ctx.snapshot.transactions)
                }
            };
            render(&result, ctx.format, |b| format_breakdown(b, currency))
        }
        ReportCommands::Trends { args } => {
            let ctx = ReportContext::resolve(settings, &args)?;
            let trends = trend::compare(&ctx.snapshot.transactions, ctx.now, ctx.window);
            render(&trends, ctx.format, |t| format_trends(t, currency))
        }
        ReportCommands::Budgets { args } => {
            let ctx = ReportContext::resolve(settings, &args)?;
            let cards = budget_progress::evaluate_all(
                &ctx.snapshot.effective_budgets(),
                &ctx.snapshot.transactions,
                &ctx.snapshot.categories,
                ctx.now,
            );
            render(&cards, ctx.format, |c| format_budgets(c, currency))
        }
        ReportCommands::Achievements { args } => {
            let ctx = ReportContext::resolve(settings, &args)?;
            let cards = achievements::achievement_cards(
                &ctx.snapshot.transactions,
                &ctx.snapshot.budgets,
                &ctx.snapshot.goals,
                ctx.now,
            );
            render(&cards, ctx.format, |c| format_achievements(c))
        }
    }
}

/// Parse `--now`, defaulting to the local calendar date
pub fn parse_now(now: Option<&str>) -> BudgetwiseResult<NaiveDate> {
    match now {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            BudgetwiseError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn render<T, F>(value: &T, format: OutputFormat, table: F) -> BudgetwiseResult<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Table => Ok(table(value)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
    }
}
