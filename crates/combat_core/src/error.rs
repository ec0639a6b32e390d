use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombatError {
    #[error("combatant `{name}` must have a positive max HP")]
    ZeroMaxHp { name: String },
    #[error("combatant `{name}` cannot enter a session with no HP left")]
    AlreadyDefeated { name: String },
}
