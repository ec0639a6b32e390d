use anyhow::{Context, Result};
use combat_core::{AttackOutcome, CombatSession, Side};
use tracing::{info, warn};

use crate::config::{DuelConfig, TurnOrder};
use crate::report::{DuelReport, TurnRecord};

pub struct RunOptions {
    pub run_id: String,
}

impl RunOptions {
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
        }
    }
}

impl TurnOrder {
    /// Side that attacks on the zero-based `turn`.
    pub fn attacker_for(self, turn: u32) -> Side {
        match self {
            TurnOrder::PlayerOnly => Side::Player,
            TurnOrder::Alternate if turn % 2 == 0 => Side::Player,
            TurnOrder::Alternate => Side::Enemy,
        }
    }
}

pub fn run_duel(config: &DuelConfig, options: &RunOptions) -> Result<DuelReport> {
    config.validate()?;
    let table = config.stats_table();
    let mut session = CombatSession::from_provider(
        &table,
        config.combatants.player.as_str(),
        config.combatants.enemy.as_str(),
    )
    .context("failed to set up combat session")?;

    let turns = play_script(&mut session, config.script.order, config.script.max_turns());
    let report = DuelReport::new(options.run_id.clone(), &session, turns);
    info!(
        target: "duel_core.runner",
        run_id = %report.id,
        status = ?report.summary.status,
        exchanges = report.summary.exchanges,
        "duel finished"
    );
    Ok(report)
}

/// Drives `session` until it ends or `max_turns` attacks have been made.
pub fn play_script(
    session: &mut CombatSession,
    order: TurnOrder,
    max_turns: u32,
) -> Vec<TurnRecord> {
    let mut turns = Vec::new();
    for turn in 0..max_turns {
        match session.perform_attack_as(order.attacker_for(turn)) {
            AttackOutcome::Resolved(exchange) => {
                turns.push(TurnRecord::from_exchange(turn + 1, &exchange));
                if exchange.battle_over {
                    return turns;
                }
            }
            AttackOutcome::AlreadyOver => return turns,
        }
    }
    warn!(
        target: "duel_core.runner",
        max_turns,
        "turn limit reached before either side fell"
    );
    turns
}
