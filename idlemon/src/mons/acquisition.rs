use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    DataStore,
    Gender,
    IncompleteSpeciesDataError,
    PartialStatTable,
    SpeciesData,
    Stat,
    StatTable,
    config::EngineOptions,
    error::{
        WrapError,
        WrapOptionError,
        general_error,
    },
    mons::{
        MonInstance,
        Nature,
        assign_move_slots,
        assign_species_gender,
        parse_nature_or_neutral,
    },
    rng::{
        RandomSource,
        rand_util,
    },
};

/// Lowest individual value rolled for a new Mon.
pub const MIN_RANDOM_IV: u16 = 1;

/// Highest individual value rolled for a new Mon.
pub const MAX_RANDOM_IV: u16 = 31;

/// Properties of a new Mon that were decided before it was acquired.
///
/// A wild Mon already has individual values, a nature, and a gender by the time it is caught.
/// Anything left out is rolled.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonSeed {
    /// Individual values. Stats missing from the table are zero.
    #[serde(default)]
    pub ivs: Option<PartialStatTable>,
    /// Nature name. Unknown names are treated as neutral.
    #[serde(default)]
    pub nature: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Base stats used instead of the species' own. Must contain every stat.
    #[serde(default)]
    pub base_stats: Option<PartialStatTable>,
}

/// Rolls individual values for every stat, in stat order.
pub fn random_ivs(rng: &mut dyn RandomSource) -> StatTable {
    Stat::ALL
        .into_iter()
        .map(|stat| {
            let iv =
                rand_util::range_inclusive(rng, MIN_RANDOM_IV as u64, MAX_RANDOM_IV as u64) as u16;
            (stat, iv)
        })
        .collect()
}

/// Rolls whether a new Mon is shiny.
pub fn roll_shiny(rng: &mut dyn RandomSource, options: &EngineOptions) -> bool {
    options.shiny_chance > 0 && rand_util::chance(rng, 1, options.shiny_chance)
}

fn random_nature(rng: &mut dyn RandomSource) -> Result<Nature> {
    rand_util::sample_slice(rng, &Nature::ALL)
        .copied()
        .wrap_expectation("no natures to choose from")
}

/// Creates a new Mon of the given species.
///
/// Random values are consumed in a fixed order: gender, then individual values, then nature. Each
/// is skipped when the seed already supplies it.
pub fn acquire_mon(
    species: &SpeciesData,
    level: u8,
    seed: MonSeed,
    rng: &mut dyn RandomSource,
    data: &dyn DataStore,
    options: &EngineOptions,
    shiny: bool,
) -> Result<MonInstance> {
    if level == 0 || level > options.max_level {
        return Err(general_error(format!(
            "level {level} is outside of [1, {}]",
            options.max_level
        )));
    }
    let base_stats = seed
        .base_stats
        .as_ref()
        .map(StatTable::complete)
        .transpose()
        .map_err(|err| {
            IncompleteSpeciesDataError {
                species: species.name.clone(),
                missing: err.missing,
            }
            .wrap_error()
        })?;

    let gender = match seed.gender {
        Some(gender) => gender,
        None => assign_species_gender(species, rng)?,
    };
    let ivs = match &seed.ivs {
        Some(ivs) => StatTable::from(ivs),
        None => random_ivs(rng),
    };
    let nature = match &seed.nature {
        Some(nature) => parse_nature_or_neutral(nature),
        None => random_nature(rng)?,
    };

    let mut mon = match base_stats {
        Some(base_stats) => {
            MonInstance::with_base_stats(species, base_stats, level, ivs, nature, gender, shiny)
        }
        None => MonInstance::new(species, level, ivs, nature, gender, shiny),
    };
    mon.moves = assign_move_slots(&species.learnset, level, data, options)?;
    Ok(mon)
}
