use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use combat_core::{AttackOutcome, CombatSession, Side, StatsTable, DEMON_LORD, HERO};
use duel_core::{run_duel, DuelConfig, DuelReport, RunOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Resolve turn-based duels between two combatants")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Attack a fixed number of times using the builtin roster.
    Strike(StrikeArgs),
    /// Play a scripted duel from a config file and emit a JSON report.
    Run(RunArgs),
    /// Pretty-print an existing report.
    Report(ReportArgs),
}

#[derive(Args)]
struct StrikeArgs {
    #[arg(long, default_value = HERO)]
    player: String,
    #[arg(long, default_value = DEMON_LORD)]
    enemy: String,
    #[arg(long, default_value_t = 1)]
    times: u32,
    /// Let the enemy strike back after each player attack.
    #[arg(long)]
    alternate: bool,
}

#[derive(Args)]
struct RunArgs {
    #[arg(long, default_value = "duel.toml")]
    config: PathBuf,
    #[arg(long)]
    id: Option<String>,
}

#[derive(Args)]
struct ReportArgs {
    #[arg(long)]
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Strike(args) => {
            init_tracing(None);
            handle_strike(args)
        }
        Commands::Run(args) => handle_run(args),
        Commands::Report(args) => {
            init_tracing(None);
            handle_report(args)
        }
    }
}

fn init_tracing(config_filter: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_filter.unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).try_init().ok();
}

fn handle_strike(args: StrikeArgs) -> Result<()> {
    let table = StatsTable::builtin();
    let mut session = CombatSession::from_provider(&table, args.player, args.enemy)?;
    print_status(&session);

    let mut side = Side::Player;
    for _ in 0..args.times {
        match session.perform_attack_as(side) {
            AttackOutcome::Resolved(exchange) => {
                let attacker = session.combatant(exchange.attacker).name();
                let defender = session.combatant(exchange.defender).name();
                println!(
                    "{attacker} hits {defender} for {} ({} HP left)",
                    exchange.damage, exchange.defender_hp
                );
            }
            AttackOutcome::AlreadyOver => {
                println!("The battle is already over.");
                break;
            }
        }
        if args.alternate {
            side = side.opponent();
        }
    }

    print_status(&session);
    Ok(())
}

fn handle_run(args: RunArgs) -> Result<()> {
    let config = DuelConfig::from_path(&args.config)?;
    init_tracing(config.trace_filter());

    let run_id = args
        .id
        .unwrap_or_else(|| format!("run-{}", Utc::now().format("%Y%m%dT%H%M%S")));
    let report = run_duel(&config, &RunOptions::new(run_id))?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(report_cfg) = config.report.as_ref() {
        if let Some(parent) = report_cfg.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&report_cfg.path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("failed to write {}", report_cfg.path.display()))?;
        println!("Report written to {}", report_cfg.path.display());
    }

    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<()> {
    let data = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let report: DuelReport = serde_json::from_str(&data)?;
    println!(
        "Report {} -> {:?} after {} exchanges (winner: {})",
        report.id,
        report.summary.status,
        report.summary.exchanges,
        report.summary.winner.as_deref().unwrap_or("none"),
    );
    for combatant in &report.combatants {
        println!(
            "  {:?} {}: {}/{} HP, attack {}",
            combatant.side,
            combatant.name,
            combatant.final_hp,
            combatant.max_hp,
            combatant.attack_power
        );
    }
    Ok(())
}

fn print_status(session: &CombatSession) {
    for side in [Side::Player, Side::Enemy] {
        let combatant = session.combatant(side);
        println!(
            "{} HP: {}/{}",
            combatant.name(),
            combatant.current_hp(),
            combatant.max_hp()
        );
    }
    if let Some(winner) = session.winner() {
        println!("{} wins!", session.combatant(winner).name());
    }
}
