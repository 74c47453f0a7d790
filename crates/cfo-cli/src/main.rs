use anyhow::{Context, Result};
use cfo_core::render::render_report_text;
use cfo_core::{
    compute_scenario, run_scenario, AdvisoryGateway, AppConfig, GeminiClient, LedgerStore,
    ReportCoordinator, SnapshotStore,
};
use cfo_types::ScenarioInput;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line front end for the CFO scenario calculator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding usage.json
    #[arg(long, env = "CFO_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// JSON file replacing the built-in mock snapshot
    #[arg(long, env = "CFO_SNAPSHOT_PATH", global = true)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current financial snapshot
    Snapshot,
    /// Run a what-if scenario and print the comparison
    Scenario(ScenarioArgs),
    /// Ask the AI advisor a question
    Ask {
        question: String,
        // Scenario flags switch the context from the raw snapshot to a comparison
        #[command(flatten)]
        scenario: OptionalScenarioArgs,
    },
    /// Export a scenario report as paginated text
    Export {
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Advisory text for the second page
        #[arg(long)]
        ai_summary: Option<String>,
        /// Write the rendered report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the usage counters
    Usage,
}

#[derive(Args, Debug, Clone, Copy)]
struct ScenarioArgs {
    /// Change in headcount
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    hiring: i64,
    /// Proposed monthly marketing spend
    #[arg(long, allow_hyphen_values = true)]
    marketing_spend: f64,
    /// Price change in percent
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    price_change: f64,
}

impl From<ScenarioArgs> for ScenarioInput {
    fn from(args: ScenarioArgs) -> Self {
        ScenarioInput {
            hiring_delta: args.hiring,
            marketing_spend: args.marketing_spend,
            price_change_percent: args.price_change,
        }
    }
}

#[derive(Args, Debug, Clone, Copy)]
struct OptionalScenarioArgs {
    /// Change in headcount [default: 0]
    #[arg(long, allow_hyphen_values = true)]
    hiring: Option<i64>,
    /// Proposed monthly marketing spend [default: current spend]
    #[arg(long, allow_hyphen_values = true)]
    marketing_spend: Option<f64>,
    /// Price change in percent [default: 0]
    #[arg(long, allow_hyphen_values = true)]
    price_change: Option<f64>,
}

impl OptionalScenarioArgs {
    /// `None` when no scenario flag was given; missing flags default to "no change"
    fn to_input(self, current_marketing: f64) -> Option<ScenarioInput> {
        if self.hiring.is_none() && self.marketing_spend.is_none() && self.price_change.is_none() {
            return None;
        }
        Some(ScenarioInput {
            hiring_delta: self.hiring.unwrap_or(0),
            marketing_spend: self.marketing_spend.unwrap_or(current_marketing),
            price_change_percent: self.price_change.unwrap_or(0.0),
        })
    }
}

fn write_json<T: serde::Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Execute one command, writing its output to `out`
async fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let mut config = AppConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(path) = cli.snapshot {
        config.snapshot_path = Some(path);
    }

    let snapshots = SnapshotStore::from_optional_file(config.snapshot_path.as_deref())?;
    let snapshot = snapshots.get();

    match cli.command {
        Command::Snapshot => write_json(out, snapshot)?,
        Command::Scenario(args) => {
            let ledger = LedgerStore::load(config.usage_path()).await;
            let comparison = run_scenario(snapshot, &args.into(), &ledger)
                .await
                .context("Failed to calculate scenario")?;
            write_json(out, &comparison)?;
        }
        Command::Ask { question, scenario } => {
            let context = match scenario.to_input(snapshot.marketing_spend) {
                Some(input) => Some(serde_json::to_value(
                    compute_scenario(snapshot, &input).context("Failed to calculate scenario")?,
                )?),
                None => None,
            };
            let advisor = AdvisoryGateway::new(Arc::new(GeminiClient::new(&config.gemini)));
            let answer = advisor.ask(&question, context.as_ref(), snapshot).await;
            writeln!(out, "{answer}")?;
        }
        Command::Export {
            scenario,
            ai_summary,
            out: path,
        } => {
            let comparison = compute_scenario(snapshot, &scenario.into())
                .context("Failed to calculate scenario")?;
            let ledger = LedgerStore::load(config.usage_path()).await;
            let record = ReportCoordinator::new()
                .export(comparison, ai_summary, &ledger)
                .await;
            let text = render_report_text(&record);
            match path {
                Some(path) => {
                    std::fs::write(&path, text)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Report {} written to {}", record.export_id, path.display());
                    writeln!(out, "{} written to {}", record.export_id, path.display())?;
                }
                None => write!(out, "{text}")?,
            }
        }
        Command::Usage => {
            let ledger = LedgerStore::load(config.usage_path()).await;
            write_json(out, &ledger.read().await)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli, &mut std::io::stdout().lock()).await
}
