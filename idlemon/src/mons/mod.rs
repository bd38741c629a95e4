mod acquisition;
mod calculations;
mod gender;
mod mon;
mod move_slots;
mod natures;

pub use acquisition::{
    MonSeed,
    acquire_mon,
    random_ivs,
    roll_shiny,
};
pub use calculations::{
    apply_nature_to_stats,
    calculate_mon_stats,
};
pub use gender::{
    assign_gender,
    assign_species_gender,
};
pub use mon::MonInstance;
pub use move_slots::{
    MoveSlot,
    assign_move_slots,
};
pub use natures::{
    Nature,
    NatureModifier,
    lookup_nature,
    lookup_nature_or_neutral,
    parse_nature_or_neutral,
};
