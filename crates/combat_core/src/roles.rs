//! Attacker / defender capabilities.
//!
//! A role is a trait a data type satisfies; nothing here reaches for shared
//! state. Participants are handed to [`strike`] explicitly.

use crate::combatant::Combatant;
use crate::health::Health;

pub trait Attacker {
    fn name(&self) -> &str;
    fn attack_power(&self) -> u32;
}

pub trait Defender {
    fn name(&self) -> &str;
    fn health(&self) -> Health;
    fn take_damage(&mut self, amount: u32);

    fn is_defeated(&self) -> bool {
        self.health().is_depleted()
    }
}

impl Attacker for Combatant {
    fn name(&self) -> &str {
        Combatant::name(self)
    }

    fn attack_power(&self) -> u32 {
        Combatant::attack_power(self)
    }
}

impl Defender for Combatant {
    fn name(&self) -> &str {
        Combatant::name(self)
    }

    fn health(&self) -> Health {
        Combatant::health(self)
    }

    fn take_damage(&mut self, amount: u32) {
        self.apply_damage(amount);
    }
}

/// Result of one hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    /// Always the attacker's full attack power; overkill is not tracked.
    pub damage: u32,
    pub remaining_hp: u32,
    pub defeated: bool,
}

/// Applies the attacker's attack power to the defender, flooring HP at zero.
pub fn strike<A, D>(attacker: &A, defender: &mut D) -> Strike
where
    A: Attacker + ?Sized,
    D: Defender + ?Sized,
{
    let damage = attacker.attack_power();
    defender.take_damage(damage);
    Strike {
        damage,
        remaining_hp: defender.health().current(),
        defeated: defender.is_defeated(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatBlock;

    struct Dummy {
        health: Health,
    }

    impl Defender for Dummy {
        fn name(&self) -> &str {
            "dummy"
        }

        fn health(&self) -> Health {
            self.health
        }

        fn take_damage(&mut self, amount: u32) {
            self.health.damage(amount);
        }
    }

    #[test]
    fn strike_subtracts_attack_power() {
        let hero = Combatant::new("hero", StatBlock::new(100, 25)).unwrap();
        let mut lord = Combatant::new("demon_lord", StatBlock::new(150, 15)).unwrap();
        let hit = strike(&hero, &mut lord);
        assert_eq!(
            Strike {
                damage: 25,
                remaining_hp: 125,
                defeated: false
            },
            hit
        );
    }

    #[test]
    fn lethal_strike_floors_at_zero() {
        let hero = Combatant::new("hero", StatBlock::new(100, 25)).unwrap();
        let mut dummy = Dummy {
            health: Health::with_current(20, 100),
        };
        let hit = strike(&hero, &mut dummy);
        assert_eq!(0, hit.remaining_hp);
        assert!(hit.defeated);
        assert_eq!(25, hit.damage);
    }

    #[test]
    fn zero_power_attacker_does_nothing() {
        let pacifist = Combatant::new("pacifist", StatBlock::new(10, 0)).unwrap();
        let mut dummy = Dummy {
            health: Health::new(30),
        };
        let hit = strike(&pacifist, &mut dummy);
        assert_eq!(30, hit.remaining_hp);
        assert!(!hit.defeated);
    }
}
