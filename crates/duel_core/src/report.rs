use chrono::Utc;
use combat_core::{CombatSession, Exchange, Side};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelReport {
    pub id: String,
    pub timestamp: String,
    pub combatants: Vec<CombatantSummary>,
    pub summary: DuelSummary,
    pub turns: Vec<TurnRecord>,
}

impl DuelReport {
    pub fn new(id: impl Into<String>, session: &CombatSession, turns: Vec<TurnRecord>) -> Self {
        let combatants = [Side::Player, Side::Enemy]
            .into_iter()
            .map(|side| CombatantSummary::from_session(session, side))
            .collect();
        Self {
            id: id.into(),
            timestamp: Utc::now().to_rfc3339(),
            combatants,
            summary: DuelSummary::from_session(session),
            turns,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CombatantSummary {
    pub side: Side,
    pub name: String,
    pub max_hp: u32,
    pub final_hp: u32,
    pub attack_power: u32,
}

impl CombatantSummary {
    fn from_session(session: &CombatSession, side: Side) -> Self {
        let combatant = session.combatant(side);
        Self {
            side,
            name: combatant.name().to_owned(),
            max_hp: combatant.max_hp(),
            final_hp: combatant.current_hp(),
            attack_power: combatant.attack_power(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DuelSummary {
    pub status: DuelStatus,
    pub winner: Option<String>,
    pub exchanges: u32,
}

impl DuelSummary {
    fn from_session(session: &CombatSession) -> Self {
        match session.winner() {
            Some(side) => Self {
                status: DuelStatus::Victory,
                winner: Some(session.combatant(side).name().to_owned()),
                exchanges: session.exchanges(),
            },
            None => Self {
                status: DuelStatus::Unfinished,
                winner: None,
                exchanges: session.exchanges(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DuelStatus {
    Victory,
    Unfinished,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnRecord {
    pub turn: u32,
    pub attacker: Side,
    pub damage: u32,
    pub defender_hp: u32,
    pub battle_over: bool,
}

impl TurnRecord {
    pub fn from_exchange(turn: u32, exchange: &Exchange) -> Self {
        Self {
            turn,
            attacker: exchange.attacker,
            damage: exchange.damage,
            defender_hp: exchange.defender_hp,
            battle_over: exchange.battle_over,
        }
    }
}
