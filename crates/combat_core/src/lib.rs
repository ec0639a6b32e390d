//! Turn-based duel rules: two combatants, one deterministic hit per attack,
//! and a session that ends the moment a defender reaches zero HP.

pub mod combatant;
pub mod error;
pub mod health;
pub mod roles;
pub mod session;
pub mod stats;

pub use combatant::Combatant;
pub use error::CombatError;
pub use health::Health;
pub use roles::{strike, Attacker, Defender, Strike};
pub use session::{AttackOutcome, CombatSession, Exchange, SessionState, Side};
pub use stats::{StatBlock, StatsProvider, StatsTable, DEMON_LORD, HERO};
