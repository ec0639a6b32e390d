use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{self, Context, Result};
use combat_core::{StatsTable, DEMON_LORD, HERO};
use serde::Deserialize;

pub const DEFAULT_MAX_TURNS: u32 = 100;

#[derive(Debug, Deserialize)]
pub struct DuelConfig {
    #[serde(default)]
    pub combatants: CombatantsConfig,
    #[serde(default)]
    pub roster: Option<StatsTable>,
    #[serde(default)]
    pub script: ScriptConfig,
    #[serde(default)]
    pub report: Option<ReportConfig>,
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}

impl DuelConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read duel config {}", path.display()))?;
        Self::from_toml(&data).with_context(|| format!("invalid duel config {}", path.display()))
    }

    pub fn from_toml(data: &str) -> Result<Self> {
        let cfg: DuelConfig = toml::from_str(data)?;
        Ok(cfg)
    }

    /// The configured roster, or the builtin one when none is given.
    pub fn stats_table(&self) -> StatsTable {
        self.roster.clone().unwrap_or_else(StatsTable::builtin)
    }

    pub fn validate(&self) -> Result<()> {
        if self.script.max_turns() == 0 {
            anyhow::bail!("script.max_turns must be at least 1");
        }
        if let Some(roster) = self.roster.as_ref() {
            if roster.fallback().max_hp == 0 {
                anyhow::bail!("roster fallback must have a positive max_hp");
            }
            for (name, stats) in roster.iter() {
                if stats.max_hp == 0 {
                    anyhow::bail!("roster entry {name} must have a positive max_hp");
                }
            }
        }
        Ok(())
    }

    pub fn trace_filter(&self) -> Option<&str> {
        self.telemetry
            .as_ref()
            .and_then(|t| t.trace_filter.as_deref())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CombatantsConfig {
    pub player: String,
    pub enemy: String,
}

impl Default for CombatantsConfig {
    fn default() -> Self {
        Self {
            player: HERO.to_owned(),
            enemy: DEMON_LORD.to_owned(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TurnOrder {
    /// The player attacks every turn.
    #[default]
    PlayerOnly,
    /// Player and enemy take turns, player first.
    Alternate,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScriptConfig {
    #[serde(default)]
    pub order: TurnOrder,
    #[serde(default)]
    pub max_turns: Option<u32>,
}

impl ScriptConfig {
    pub fn max_turns(&self) -> u32 {
        self.max_turns.unwrap_or(DEFAULT_MAX_TURNS)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub trace_filter: Option<String>,
}
