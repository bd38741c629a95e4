use serde::{
    Deserialize,
    Serialize,
};

fn default_starting_level() -> u8 {
    5
}

fn default_max_level() -> u8 {
    100
}

fn default_max_move_slots() -> usize {
    4
}

fn default_pp() -> u8 {
    35
}

fn default_shiny_chance() -> u64 {
    100
}

/// Options that change how Mons are created and grown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Level of newly chosen starters, and of captured Mons whose level is unknown.
    #[serde(default = "default_starting_level")]
    pub starting_level: u8,

    /// Highest level a Mon can reach by leveling up.
    #[serde(default = "default_max_level")]
    pub max_level: u8,

    /// Number of move slots filled when a Mon is acquired.
    #[serde(default = "default_max_move_slots")]
    pub max_move_slots: usize,

    /// Power points given to a move slot when the move has no base PP in the catalog.
    #[serde(default = "default_pp")]
    pub default_pp: u8,

    /// A captured Mon is shiny with a chance of one in this many.
    ///
    /// Zero disables shiny Mons.
    #[serde(default = "default_shiny_chance")]
    pub shiny_chance: u64,

    /// Should catch values and capture rolls be logged?
    ///
    /// Helpful for debugging.
    #[serde(default)]
    pub log_catch_rate: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            starting_level: default_starting_level(),
            max_level: default_max_level(),
            max_move_slots: default_max_move_slots(),
            default_pp: default_pp(),
            shiny_chance: default_shiny_chance(),
            log_catch_rate: false,
        }
    }
}
