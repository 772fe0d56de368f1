use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use configuration::Config;
use core_types::NegotiationTarget;
use leverage::{LeverageEngine, TradePartnerLeverage};
use scenarios::{DemoScenarioSource, FileScenarioSource, ScenarioSource, TradeScenario};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use valuation::{TradePackage, ValuationEngine};

/// The main entry point for the Dugout front-office application.
fn main() {
    // Route engine diagnostics through the standard env-filtered subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = match configuration::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {}", e);
            std::process::exit(1);
        }
    };

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Package(args) => handle_package(args, &config),
        Commands::Leverage(args) => handle_leverage(args, &config),
        Commands::Evaluate(args) => handle_evaluate(args, &config),
    };

    if let Err(e) = result {
        eprintln!("Error during evaluation: {}", e);
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A front-office analytics engine for valuing trade packages and reading
/// negotiation leverage.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value both sides of the trade package and classify its fairness.
    Package(ScenarioArgs),
    /// Score the negotiating leverage between the two front offices.
    Leverage(ScenarioArgs),
    /// Run the full evaluation: package fairness plus negotiation leverage.
    Evaluate(ScenarioArgs),
}

#[derive(Parser)]
struct ScenarioArgs {
    /// Path to a scenario JSON file. Defaults to the seeded demo scenario.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Override the demo generator seed from config.toml.
    #[arg(long)]
    seed: Option<u64>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Resolves the scenario the command will evaluate: a JSON file if one was
/// given, otherwise the seeded demo scenario from config.toml.
fn load_scenario(args: &ScenarioArgs, config: &Config) -> anyhow::Result<TradeScenario> {
    let scenario = match &args.scenario {
        Some(path) => {
            tracing::debug!("Loading scenario from {}", path.display());
            FileScenarioSource::new(path.clone()).scenario()?
        }
        None => {
            let mut settings = config.demo.clone();
            if let Some(seed) = args.seed {
                settings.seed = seed;
            }
            DemoScenarioSource::new(settings).scenario()?
        }
    };
    Ok(scenario)
}

/// Handles the package appraisal command.
fn handle_package(args: ScenarioArgs, config: &Config) -> anyhow::Result<()> {
    let scenario = load_scenario(&args, config)?;
    let TradeScenario {
        target,
        side_a,
        side_b,
        ..
    } = scenario;

    let package = ValuationEngine::new().evaluate(side_a, side_b)?;
    print_package(&target, &package);

    Ok(())
}

/// Handles the negotiation leverage command.
fn handle_leverage(args: ScenarioArgs, config: &Config) -> anyhow::Result<()> {
    let scenario = load_scenario(&args, config)?;

    let report = LeverageEngine::new().evaluate(scenario.target, scenario.factors)?;
    print_leverage(&report);

    Ok(())
}

/// Handles the full evaluation: both pipelines, composed here and nowhere
/// deeper. The engines stay independent of each other.
fn handle_evaluate(args: ScenarioArgs, config: &Config) -> anyhow::Result<()> {
    let scenario = load_scenario(&args, config)?;
    let TradeScenario {
        target,
        side_a,
        side_b,
        factors,
    } = scenario;

    let package = ValuationEngine::new().evaluate(side_a, side_b)?;
    let report = LeverageEngine::new().evaluate(target, factors)?;

    println!(
        "Evaluating a move for {} ({}): {} talking to {}\n",
        report.target.player, report.target.position, report.target.your_team, report.target.their_team
    );
    print_package(&report.target, &package);
    println!();
    print_leverage(&report);

    Ok(())
}

// ==============================================================================
// Presentation
// ==============================================================================

fn print_package(target: &NegotiationTarget, package: &TradePackage) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Direction", "Asset", "Kind", "Position", "Value"]);

    for asset in &package.side_a {
        table.add_row(vec![
            format!("{} send", target.your_team),
            asset.name.clone(),
            asset.kind.to_string(),
            asset.position.clone(),
            asset.value.to_string(),
        ]);
    }
    for asset in &package.side_b {
        table.add_row(vec![
            format!("{} receive", target.your_team),
            asset.name.clone(),
            asset.kind.to_string(),
            asset.position.clone(),
            asset.value.to_string(),
        ]);
    }
    println!("{table}");

    println!(
        "Package value: {} sent vs {} received (differential {})",
        package.value_a, package.value_b, package.differential
    );
    println!("Fairness: {}", package.fairness);
}

fn print_leverage(report: &TradePartnerLeverage) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Factor", "Impact", "You", "Them", "Advantage"]);

    for factor in &report.factors {
        table.add_row(vec![
            factor.factor.clone(),
            factor.impact.to_string(),
            factor.your_score.to_string(),
            factor.their_score.to_string(),
            factor.advantage().to_string(),
        ]);
    }
    println!("{table}");

    println!("Leverage score: {}", report.leverage_score);
    println!(
        "Your position: {} / Their position: {}",
        report.your_leverage, report.their_leverage
    );
    println!("Overall advantage: {}", report.overall_advantage);
    println!("Suggested approach: {}", report.suggested_approach);
    println!("Deal likelihood: {}%", report.deal_likelihood);
}
