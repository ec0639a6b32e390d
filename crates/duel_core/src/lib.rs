pub mod config;
pub mod report;
pub mod runner;

pub use config::{CombatantsConfig, DuelConfig, ScriptConfig, TurnOrder};
pub use report::{CombatantSummary, DuelReport, DuelStatus, DuelSummary, TurnRecord};
pub use runner::{play_script, run_duel, RunOptions};
