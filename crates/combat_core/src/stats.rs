//! Name-keyed starting stats.
//!
//! Lookups never fail: a name missing from the table resolves to the
//! table's fallback block, which defaults to [`StatBlock::BASELINE`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const HERO: &str = "hero";
pub const DEMON_LORD: &str = "demon_lord";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub max_hp: u32,
    pub attack_power: u32,
}

impl StatBlock {
    /// Stats handed to any name the table does not know.
    pub const BASELINE: Self = Self::new(100, 10);

    pub const fn new(max_hp: u32, attack_power: u32) -> Self {
        Self {
            max_hp,
            attack_power,
        }
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// Resolves a combatant name to the stats it starts a session with.
pub trait StatsProvider {
    fn stats_for(&self, name: &str) -> StatBlock;
}

impl<F> StatsProvider for F
where
    F: Fn(&str) -> StatBlock,
{
    fn stats_for(&self, name: &str) -> StatBlock {
        self(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsTable {
    #[serde(default)]
    entries: BTreeMap<String, StatBlock>,
    #[serde(default)]
    fallback: StatBlock,
}

impl StatsTable {
    pub fn new(fallback: StatBlock) -> Self {
        Self {
            entries: BTreeMap::new(),
            fallback,
        }
    }

    /// The hero / demon lord roster the duel demo ships with.
    pub fn builtin() -> Self {
        Self::default()
            .with(HERO, StatBlock::new(100, 25))
            .with(DEMON_LORD, StatBlock::new(150, 15))
    }

    pub fn with(mut self, name: impl Into<String>, stats: StatBlock) -> Self {
        self.insert(name, stats);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, stats: StatBlock) -> Option<StatBlock> {
        self.entries.insert(name.into(), stats)
    }

    pub fn get(&self, name: &str) -> Option<&StatBlock> {
        self.entries.get(name)
    }

    pub fn fallback(&self) -> StatBlock {
        self.fallback
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatBlock)> {
        self.entries.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StatsProvider for StatsTable {
    fn stats_for(&self, name: &str) -> StatBlock {
        self.get(name).copied().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_roster_matches_demo_stats() {
        let table = StatsTable::builtin();
        assert_eq!(StatBlock::new(100, 25), table.stats_for(HERO));
        assert_eq!(StatBlock::new(150, 15), table.stats_for(DEMON_LORD));
        assert_eq!(2, table.len());
    }

    #[test]
    fn unknown_name_gets_baseline() {
        let table = StatsTable::builtin();
        let stats = table.stats_for("ostrich");
        assert_eq!(100, stats.max_hp);
        assert_eq!(10, stats.attack_power);
    }

    #[test]
    fn custom_fallback_is_used_for_unknown_names() {
        let table = StatsTable::new(StatBlock::new(40, 4)).with("slime", StatBlock::new(20, 2));
        assert_eq!(StatBlock::new(20, 2), table.stats_for("slime"));
        assert_eq!(StatBlock::new(40, 4), table.stats_for("bat"));
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut table = StatsTable::builtin();
        let previous = table.insert(HERO, StatBlock::new(120, 30));
        assert_eq!(Some(StatBlock::new(100, 25)), previous);
        assert_eq!(StatBlock::new(120, 30), table.stats_for(HERO));
    }

    #[test]
    fn closures_act_as_providers() {
        let provider = |name: &str| StatBlock::new(name.len() as u32 * 10, 1);
        assert_eq!(StatBlock::new(50, 1), provider.stats_for("golem"));
    }

    #[test]
    fn table_deserializes_with_defaults() {
        let table: StatsTable = toml::from_str(
            r#"
            [entries.knight]
            max_hp = 120
            attack_power = 18
            "#,
        )
        .unwrap();
        assert_eq!(StatBlock::new(120, 18), table.stats_for("knight"));
        assert_eq!(StatBlock::BASELINE, table.fallback());
    }
}
