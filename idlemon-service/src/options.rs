use idlemon::config::EngineOptions;
use serde::{
    Deserialize,
    Serialize,
};

fn default_max_team_size() -> usize {
    6
}

fn default_starter_reward() -> u32 {
    10000
}

fn default_starter_items() -> Vec<(String, u32)> {
    Vec::from_iter([
        ("Poke Ball".to_owned(), 10),
        ("Super Ball".to_owned(), 10),
        ("Poción".to_owned(), 5),
    ])
}

fn default_heal_amount() -> u16 {
    20
}

fn default_unlimited_stock() -> u32 {
    9999
}

/// Options for configuring [`GameService`][`crate::GameService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameServiceOptions {
    /// Options for creating and growing Mons.
    #[serde(default)]
    pub engine: EngineOptions,

    /// Seed for the service's random number generator.
    ///
    /// A random seed is used if absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of Mons that can be on a player's active team.
    ///
    /// Additional Mons go to the PC box.
    #[serde(default = "default_max_team_size")]
    pub max_team_size: usize,

    /// Pokédollars given for choosing a starter.
    #[serde(default = "default_starter_reward")]
    pub starter_reward: u32,

    /// Items, by name, given for choosing a starter.
    #[serde(default = "default_starter_items")]
    pub starter_items: Vec<(String, u32)>,

    /// HP restored by healing items that do not specify an amount.
    #[serde(default = "default_heal_amount")]
    pub default_heal_amount: u16,

    /// Stock value of shop entries that never run out.
    #[serde(default = "default_unlimited_stock")]
    pub unlimited_stock: u32,

    /// Pokédollars of new accounts.
    #[serde(default)]
    pub initial_pokedollars: u32,
}

impl Default for GameServiceOptions {
    fn default() -> Self {
        Self {
            engine: EngineOptions::default(),
            seed: None,
            max_team_size: default_max_team_size(),
            starter_reward: default_starter_reward(),
            starter_items: default_starter_items(),
            default_heal_amount: default_heal_amount(),
            unlimited_stock: default_unlimited_stock(),
            initial_pokedollars: 0,
        }
    }
}
