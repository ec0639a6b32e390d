use crate::error::CombatError;
use crate::health::Health;
use crate::stats::{StatBlock, StatsProvider};

/// A named participant with hit points and a fixed attack power.
///
/// The name is only a label; two combatants in one session may share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    name: String,
    health: Health,
    attack_power: u32,
}

impl Combatant {
    /// Creates a combatant at full health.
    pub fn new(name: impl Into<String>, stats: StatBlock) -> Result<Self, CombatError> {
        Self::with_current_hp(name, stats, stats.max_hp)
    }

    /// Creates a combatant that starts below full health. `current_hp` above
    /// `stats.max_hp` is clamped down.
    pub fn with_current_hp(
        name: impl Into<String>,
        stats: StatBlock,
        current_hp: u32,
    ) -> Result<Self, CombatError> {
        let name = name.into();
        if stats.max_hp == 0 {
            return Err(CombatError::ZeroMaxHp { name });
        }
        Ok(Self {
            name,
            health: Health::with_current(current_hp, stats.max_hp),
            attack_power: stats.attack_power,
        })
    }

    /// Resolves stats for `name` with a single provider lookup.
    pub fn from_provider<P>(provider: &P, name: impl Into<String>) -> Result<Self, CombatError>
    where
        P: StatsProvider + ?Sized,
    {
        let name = name.into();
        let stats = provider.stats_for(&name);
        Self::new(name, stats)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn current_hp(&self) -> u32 {
        self.health.current()
    }

    pub fn max_hp(&self) -> u32 {
        self.health.max()
    }

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    pub fn stats(&self) -> StatBlock {
        StatBlock::new(self.max_hp(), self.attack_power)
    }

    pub fn is_defeated(&self) -> bool {
        self.health.is_depleted()
    }

    pub(crate) fn apply_damage(&mut self, amount: u32) {
        self.health.damage(amount);
    }
}
