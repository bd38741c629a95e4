use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Gender,
    SpeciesData,
    StatTable,
    config::EngineOptions,
    error::general_error,
    mons::{
        MoveSlot,
        Nature,
        calculate_mon_stats,
    },
};

/// A single Mon owned by a player.
///
/// Stats are always derived from the species' base stats, the individual values, the nature, and
/// the level. Current HP never exceeds the maximum HP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonInstance {
    species: u32,
    pub nickname: Option<String>,
    level: u8,
    gender: Gender,
    nature: Nature,
    ivs: StatTable,
    stats: StatTable,
    current_hp: u16,
    shiny: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_stats: Option<StatTable>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub slot: u8,
    #[serde(default)]
    pub slot_pc: u32,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
}

impl MonInstance {
    /// Creates a new Mon at full HP.
    pub fn new(
        species: &SpeciesData,
        level: u8,
        ivs: StatTable,
        nature: Nature,
        gender: Gender,
        shiny: bool,
    ) -> Self {
        let stats = calculate_mon_stats(&species.base_stats, &ivs, nature, level);
        Self {
            species: species.pokedex_id,
            nickname: None,
            level,
            gender,
            nature,
            ivs,
            current_hp: stats.hp,
            stats,
            shiny,
            base_stats: None,
            active: false,
            slot: 0,
            slot_pc: 0,
            moves: Vec::new(),
        }
    }

    /// Creates a new Mon at full HP whose stats derive from the given base stats rather than the
    /// species'.
    ///
    /// The base stats stay with the Mon, so later recalculations keep using them.
    pub fn with_base_stats(
        species: &SpeciesData,
        base_stats: StatTable,
        level: u8,
        ivs: StatTable,
        nature: Nature,
        gender: Gender,
        shiny: bool,
    ) -> Self {
        let mut mon = Self::new(species, level, ivs, nature, gender, shiny);
        mon.base_stats = Some(base_stats);
        mon.stats = mon.derive_stats(species);
        mon.current_hp = mon.stats.hp;
        mon
    }

    /// Pokédex number of the Mon's species.
    pub fn species(&self) -> u32 {
        self.species
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn nature(&self) -> Nature {
        self.nature
    }

    pub fn ivs(&self) -> &StatTable {
        &self.ivs
    }

    pub fn stats(&self) -> &StatTable {
        &self.stats
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    pub fn shiny(&self) -> bool {
        self.shiny
    }

    /// Checks if the Mon has no HP missing.
    pub fn at_full_hp(&self) -> bool {
        self.current_hp >= self.stats.hp
    }

    fn derive_stats(&self, species: &SpeciesData) -> StatTable {
        let base_stats = self.base_stats.as_ref().unwrap_or(&species.base_stats);
        calculate_mon_stats(base_stats, &self.ivs, self.nature, self.level)
    }

    fn check_species(&self, species: &SpeciesData) -> Result<()> {
        if species.pokedex_id != self.species {
            return Err(general_error(format!(
                "{} is not the species of this mon ({})",
                species.name, self.species
            )));
        }
        Ok(())
    }

    /// Recalculates stats after a change to any of their inputs.
    ///
    /// Current HP is only ever lowered to fit the new maximum. It is never raised.
    pub fn recalculate_stats(&mut self, species: &SpeciesData) -> Result<()> {
        self.check_species(species)?;
        self.stats = self.derive_stats(species);
        self.current_hp = self.current_hp.min(self.stats.hp);
        Ok(())
    }

    /// Raises the Mon's level by one.
    pub fn level_up(&mut self, species: &SpeciesData, options: &EngineOptions) -> Result<()> {
        self.check_species(species)?;
        if self.level >= options.max_level {
            return Err(general_error(format!(
                "mon is already at the max level of {}",
                options.max_level
            )));
        }
        self.level += 1;
        self.recalculate_stats(species)
    }

    /// Sets current HP, capped at max HP.
    pub fn set_current_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(self.stats.hp);
    }

    /// Restores up to `amount` HP, returning the HP actually restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        let before = self.current_hp;
        self.set_current_hp(self.current_hp.saturating_add(amount));
        self.current_hp - before
    }
}
