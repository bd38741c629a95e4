use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The shelf an item is sold on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum ShopCategory {
    #[string = "pokeballs"]
    PokeBalls,
    #[string = "healing"]
    Healing,
    #[string = "battle_items"]
    BattleItems,
    #[string = "berries"]
    Berries,
    #[string = "evolution"]
    Evolution,
    #[string = "key_items"]
    KeyItems,
    #[string = "treasures"]
    Treasures,
}

fn default_as_true() -> bool {
    true
}

/// An item for sale in the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopEntry {
    /// ID of the shop entry.
    pub id: u32,
    /// ID of the item template sold.
    pub item: u32,
    /// Shelf the item is sold on.
    pub category: ShopCategory,
    /// Remaining stock.
    pub stock: u32,
    /// Is the entry for sale?
    #[serde(default = "default_as_true")]
    pub available: bool,
    /// Discount, as a fraction of the cost (0.1 = 10% off).
    #[serde(default)]
    pub discount: f64,
}
