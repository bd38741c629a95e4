use anyhow::Result;

use crate::{
    Gender,
    SpeciesData,
    error::{
        InvalidGenderRateError,
        WrapError,
    },
    rng::{
        RandomSource,
        rand_util,
    },
};

/// Gender rate of species without a gender.
pub const GENDERLESS_RATE: i8 = -1;

/// Gender rate of species that are always female.
pub const ALWAYS_FEMALE_RATE: i8 = 8;

/// Assigns a gender to a new Mon from its species' gender rate.
///
/// The gender rate is the chance of being female in eighths, or -1 for genderless species. Only
/// mixed rates consume a random value.
pub fn assign_gender(gender_rate: i8, rng: &mut dyn RandomSource) -> Result<Gender> {
    match gender_rate {
        GENDERLESS_RATE => Ok(Gender::Genderless),
        0 => Ok(Gender::Male),
        ALWAYS_FEMALE_RATE => Ok(Gender::Female),
        1..ALWAYS_FEMALE_RATE => {
            if rand_util::chance(rng, gender_rate as u64, ALWAYS_FEMALE_RATE as u64) {
                Ok(Gender::Female)
            } else {
                Ok(Gender::Male)
            }
        }
        _ => Err(InvalidGenderRateError {
            species: "unknown species".to_owned(),
            gender_rate: Some(gender_rate),
        }
        .wrap_error()),
    }
}

/// Assigns a gender to a new Mon of the given species.
pub fn assign_species_gender(species: &SpeciesData, rng: &mut dyn RandomSource) -> Result<Gender> {
    let invalid = || {
        InvalidGenderRateError {
            species: species.name.clone(),
            gender_rate: species.gender_rate,
        }
        .wrap_error()
    };
    match species.gender_rate {
        Some(gender_rate @ GENDERLESS_RATE..=ALWAYS_FEMALE_RATE) => assign_gender(gender_rate, rng),
        _ => Err(invalid()),
    }
}
