use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::combatant::Combatant;
use crate::error::CombatError;
use crate::roles;
use crate::stats::StatsProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Active,
    Over,
}

/// One resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub attacker: Side,
    pub defender: Side,
    pub damage: u32,
    pub defender_hp: u32,
    pub battle_over: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    Resolved(Exchange),
    /// The session had already ended; nothing changed.
    AlreadyOver,
}

impl AttackOutcome {
    pub fn is_over(&self) -> bool {
        match self {
            AttackOutcome::Resolved(exchange) => exchange.battle_over,
            AttackOutcome::AlreadyOver => true,
        }
    }

    pub fn exchange(&self) -> Option<&Exchange> {
        match self {
            AttackOutcome::Resolved(exchange) => Some(exchange),
            AttackOutcome::AlreadyOver => None,
        }
    }
}

/// Two combatants and the terminal flag of one encounter.
///
/// The session is driven only through [`CombatSession::perform_attack`] and
/// [`CombatSession::perform_attack_as`]. Which side attacks can change between
/// calls; once the defender of some attack reaches zero HP the session is
/// over and every later attack is a no-op.
#[derive(Debug, Clone)]
pub struct CombatSession {
    player: Combatant,
    enemy: Combatant,
    attacker: Side,
    state: SessionState,
    winner: Option<Side>,
    exchanges: u32,
}

impl CombatSession {
    /// Starts an active session with the player assigned to attack.
    pub fn new(player: Combatant, enemy: Combatant) -> Result<Self, CombatError> {
        for combatant in [&player, &enemy] {
            if combatant.is_defeated() {
                return Err(CombatError::AlreadyDefeated {
                    name: combatant.name().to_owned(),
                });
            }
        }
        Ok(Self {
            player,
            enemy,
            attacker: Side::Player,
            state: SessionState::Active,
            winner: None,
            exchanges: 0,
        })
    }

    /// Looks each name up once; the provider is not kept.
    pub fn from_provider<P>(
        provider: &P,
        player_name: impl Into<String>,
        enemy_name: impl Into<String>,
    ) -> Result<Self, CombatError>
    where
        P: StatsProvider + ?Sized,
    {
        let player = Combatant::from_provider(provider, player_name)?;
        let enemy = Combatant::from_provider(provider, enemy_name)?;
        Self::new(player, enemy)
    }

    /// Resolves one attack from the current attacker onto the current defender.
    pub fn perform_attack(&mut self) -> AttackOutcome {
        if self.is_over() {
            debug!(
                target: "combat_core.session",
                attacker = ?self.attacker,
                "attack ignored, session is over"
            );
            return AttackOutcome::AlreadyOver;
        }

        let attacker_side = self.attacker;
        let (attacker, defender) = match attacker_side {
            Side::Player => (&self.player, &mut self.enemy),
            Side::Enemy => (&self.enemy, &mut self.player),
        };
        let hit = roles::strike(attacker, defender);
        info!(
            target: "combat_core.session",
            attacker = attacker.name(),
            defender = defender.name(),
            damage = hit.damage,
            remaining = hit.remaining_hp,
            "attack resolved"
        );

        self.exchanges = self.exchanges.saturating_add(1);
        if hit.defeated {
            self.state = SessionState::Over;
            self.winner = Some(attacker_side);
            info!(
                target: "combat_core.session",
                winner = ?attacker_side,
                exchanges = self.exchanges,
                "combat over"
            );
        }

        AttackOutcome::Resolved(Exchange {
            attacker: attacker_side,
            defender: attacker_side.opponent(),
            damage: hit.damage,
            defender_hp: hit.remaining_hp,
            battle_over: hit.defeated,
        })
    }

    /// Assigns `side` as attacker, then attacks.
    pub fn perform_attack_as(&mut self, side: Side) -> AttackOutcome {
        self.set_attacker(side);
        self.perform_attack()
    }

    pub fn set_attacker(&mut self, side: Side) {
        if self.attacker != side {
            debug!(target: "combat_core.session", attacker = ?side, "roles reassigned");
        }
        self.attacker = side;
    }

    pub fn swap_roles(&mut self) {
        self.set_attacker(self.attacker.opponent());
    }

    pub fn attacker_side(&self) -> Side {
        self.attacker
    }

    pub fn attacker(&self) -> &Combatant {
        self.combatant(self.attacker)
    }

    pub fn defender(&self) -> &Combatant {
        self.combatant(self.attacker.opponent())
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == SessionState::Over
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Number of attacks that actually resolved.
    pub fn exchanges(&self) -> u32 {
        self.exchanges
    }
}
