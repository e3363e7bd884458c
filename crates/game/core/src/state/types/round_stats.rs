//! Per-hero match counters. Only ever accumulate.

use super::combatant::CombatantCategory;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoundStats {
    pub experience: f64,
    pub hero_kills: u32,
    pub minion_kills: u32,
    pub turret_kills: u32,
    pub cradle_kills: u32,
    pub deaths: u32,
    pub damage_dealt: f64,
    pub damage_taken: f64,
}

impl RoundStats {
    pub fn record_kill(&mut self, category: CombatantCategory) {
        let counter = match category {
            CombatantCategory::Hero => &mut self.hero_kills,
            CombatantCategory::Warrior | CombatantCategory::Archer => &mut self.minion_kills,
            CombatantCategory::Turret => &mut self.turret_kills,
            CombatantCategory::Cradle => &mut self.cradle_kills,
        };
        *counter += 1;
    }

    pub fn total_kills(&self) -> u32 {
        self.hero_kills + self.minion_kills + self.turret_kills + self.cradle_kills
    }
}
