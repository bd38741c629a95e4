use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::{
    LearnSet,
    PartialStatTable,
    Stat,
    StatTable,
    Type,
};

/// Error for a species record whose base stats do not define every stat.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{species} is missing base {missing}")]
pub struct IncompleteSpeciesDataError {
    pub species: String,
    pub missing: Stat,
}

/// A species record as exported by the catalog importer.
///
/// Base stats are loosely keyed. Converting into [`SpeciesData`] folds key aliases and checks that
/// all six stats exist.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesRecord {
    pub pokedex_id: u32,
    pub name: String,
    pub types: Vec<Type>,
    pub base_stats: PartialStatTable,
    #[serde(default)]
    pub ability: String,
    #[serde(default)]
    pub hidden_ability: Option<String>,
    #[serde(default)]
    pub sprite: String,
    #[serde(default)]
    pub gender_rate: Option<i8>,
    #[serde(default)]
    pub has_gender_differences: bool,
    #[serde(default)]
    pub learnset: LearnSet,
}

impl TryFrom<SpeciesRecord> for SpeciesData {
    type Error = IncompleteSpeciesDataError;

    fn try_from(record: SpeciesRecord) -> Result<Self, Self::Error> {
        let base_stats =
            StatTable::complete(&record.base_stats).map_err(|err| IncompleteSpeciesDataError {
                species: record.name.clone(),
                missing: err.missing,
            })?;
        Ok(Self {
            pokedex_id: record.pokedex_id,
            name: record.name,
            types: record.types,
            base_stats,
            ability: record.ability,
            hidden_ability: record.hidden_ability,
            sprite: record.sprite,
            gender_rate: record.gender_rate,
            has_gender_differences: record.has_gender_differences,
            learnset: record.learnset,
        })
    }
}

/// Data about a particular species.
///
/// Species data is common to all Mons of a given species and never changes after import. Data
/// about a specific Mon (such as its nature, stats, or level) does not belong here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SpeciesRecord")]
pub struct SpeciesData {
    /// National Pokédex number, unique across all species.
    pub pokedex_id: u32,
    /// Display name.
    pub name: String,
    /// Elemental types, primary first.
    pub types: Vec<Type>,
    /// Base stats.
    pub base_stats: StatTable,
    /// Primary ability.
    pub ability: String,
    /// Hidden ability, if it exists.
    pub hidden_ability: Option<String>,
    /// Sprite path.
    pub sprite: String,
    /// Gender rate, in eighths of the population that is female.
    ///
    /// There are three special values:
    /// - -1 = genderless
    /// - 0 = male only
    /// - 8 = female only
    ///
    /// Absent until gender data has been imported for the species.
    pub gender_rate: Option<i8>,
    /// Do male and female Mons look different?
    pub has_gender_differences: bool,
    /// Learnset, which contains all moves this species can learn.
    pub learnset: LearnSet,
}

impl SpeciesData {
    /// The primary type of the species.
    pub fn primary_type(&self) -> Option<Type> {
        self.types.first().cloned()
    }
}
