use idlemon::{
    Gender,
    ItemData,
    PartialStatTable,
    ShopEntry,
    StatTable,
    mons::{
        MonInstance,
        Nature,
    },
};
use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

/// Public view of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    pub id: Uuid,
    pub nickname: String,
    pub pokedollars: u32,
    pub starter_chosen: bool,
    pub team_size: usize,
    pub box_size: usize,
}

/// A Mon owned by an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedMon {
    pub id: u64,
    #[serde(flatten)]
    pub mon: MonInstance,
}

/// Response for choosing a starter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarterResponse {
    pub message: String,
    pub mon: OwnedMon,
    pub pokedollars: u32,
}

/// Snapshot of a wild Mon at the moment a ball is thrown.
///
/// Properties the battle already decided carry over to the captured Mon.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct WildMon {
    pub pokedex_id: u32,
    #[serde(default)]
    pub level: Option<u8>,
    pub current_hp: i32,
    pub max_hp: i32,
    #[serde(default)]
    pub ivs: Option<PartialStatTable>,
    #[serde(default)]
    pub nature: Option<String>,
    /// Gender name. Unknown names leave the gender to be rolled.
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub base_stats: Option<PartialStatTable>,
}

/// A newly captured Mon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedMon {
    pub id: u64,
    pub nickname: String,
    pub level: u8,
    pub gender: Gender,
    pub nature: Nature,
    pub ivs: StatTable,
    pub stats: StatTable,
    pub current_hp: u16,
    pub shiny: bool,
    pub active: bool,
    pub slot: u8,
    pub slot_pc: u32,
}

/// Response for throwing a ball.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureResponse {
    pub captured: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mon: Option<CapturedMon>,
    /// Balls of the thrown kind left.
    pub balls_left: u32,
}

/// Response for leveling up a Mon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpResponse {
    pub message: String,
    pub level: u8,
    pub stats: StatTable,
    pub current_hp: u16,
}

/// Response for using an item on a Mon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseItemResponse {
    pub message: String,
    pub healed: u16,
    pub current_hp: u16,
    pub max_hp: u16,
    /// Quantity of the item left.
    pub remaining: u32,
}

/// Response for buying from the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseResponse {
    pub message: String,
    pub total_cost: u32,
    pub pokedollars: u32,
    /// Quantity of the item now in the inventory.
    pub quantity: u32,
}

/// An item in an account's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub item: ItemData,
    pub quantity: u32,
}

/// An item for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    #[serde(flatten)]
    pub entry: ShopEntry,
    pub item_data: ItemData,
    /// Cost of one item after discount.
    pub price: u32,
}
