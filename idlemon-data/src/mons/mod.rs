mod gender;
mod learnset;
mod species_data;
mod stat;
mod r#type;

pub use gender::Gender;
pub use learnset::{
    LearnSet,
    LearnableMove,
};
pub use species_data::{
    IncompleteSpeciesDataError,
    SpeciesData,
    SpeciesRecord,
};
pub use stat::{
    IncompleteStatTableError,
    PartialStatTable,
    Stat,
    StatMap,
    StatTable,
    StatTableEntries,
};
pub use r#type::Type;
