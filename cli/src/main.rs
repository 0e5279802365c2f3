//! veolas-votes — plan the order of veOLAS nominee vote changes.
//!
//! Reads a JSON snapshot (`allocations`, `userVotes`, `stakingContracts`)
//! and prints the vote instructions in an order the voting contract accepts.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use veolas_utils::LogFormat;
use veolas_voting::{PlannerConfig, VotePlanner, VoteSnapshot};

#[derive(Parser)]
#[command(
    name = "veolas-votes",
    about = "Plan budget-safe veOLAS nominee vote submissions"
)]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "VEOLAS_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "VEOLAS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "VEOLAS_LOG_FORMAT")]
    log_format: Option<String>,

    /// Per-user voting budget in base units (100 = 1%).
    #[arg(long, env = "VEOLAS_MAX_WEIGHT")]
    max_weight: Option<u64>,

    /// Skip replaying the planned order against the budget.
    #[arg(long)]
    no_verify: bool,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print the ordered vote instructions for a snapshot.
    Plan {
        /// Snapshot JSON file, or "-" for stdin.
        snapshot: PathBuf,

        /// Print only the parallel nominee/chain/weight arrays.
        #[arg(long)]
        batch: bool,

        /// Single-line JSON output.
        #[arg(long)]
        compact: bool,
    },
    /// Check a snapshot's allocation without planning.
    Validate {
        /// Snapshot JSON file, or "-" for stdin.
        snapshot: PathBuf,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    let format: LogFormat = config.log_format.parse()?;
    veolas_utils::init_logging(format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::info!(path = %path.display(), "loaded config");
    }

    let planner = VotePlanner::new(config);

    match cli.command {
        Command::Plan {
            snapshot,
            batch,
            compact,
        } => {
            let snapshot = read_snapshot(&snapshot)?;
            let plan = planner.plan(&snapshot)?;
            let output = if batch {
                to_json(&plan.batch, compact)?
            } else {
                to_json(&plan, compact)?
            };
            println!("{output}");
        }
        Command::Validate { snapshot } => {
            let snapshot = read_snapshot(&snapshot)?;
            let allocated = planner.validate(&snapshot)?;
            let unallocated = allocated.remaining_of(planner.config().budget());
            let report = serde_json::json!({
                "allocated": allocated,
                "allocatedPercent": allocated.to_percent().to_string(),
                "unallocated": unallocated,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Config => {
            print!("{}", planner.config().to_toml_string());
        }
    }

    Ok(())
}

/// File config (or defaults), then env vars and flags on top.
fn resolve_config(cli: &Cli) -> anyhow::Result<PlannerConfig> {
    let mut config = match &cli.config {
        Some(path) => PlannerConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlannerConfig::default(),
    };

    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.log_format = format.clone();
    }
    if let Some(max_weight) = cli.max_weight {
        config.max_weight = max_weight;
    }
    if cli.no_verify {
        config.verify_budget = false;
    }

    config.validate()?;
    Ok(config)
}

fn read_snapshot(path: &Path) -> anyhow::Result<VoteSnapshot> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading snapshot from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot {}", path.display()))?
    };
    let snapshot: VoteSnapshot =
        serde_json::from_str(&raw).context("snapshot is not valid JSON")?;
    tracing::debug!(
        allocations = snapshot.allocations.len(),
        user_votes = snapshot.user_votes.len(),
        staking_contracts = snapshot.staking_contracts.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}
