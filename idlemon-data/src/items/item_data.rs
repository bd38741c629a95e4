use serde::{
    Deserialize,
    Serialize,
};

/// Data about a particular item template.
///
/// Players own quantities of templates. A template with a nonzero capture rate is a capture tool,
/// and a healing template restores HP when used on a Mon.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    /// Catalog ID of the item.
    pub id: u32,
    /// Name of the item.
    pub name: String,
    /// Catalog category.
    #[serde(default)]
    pub category: String,
    /// Price in the shop.
    #[serde(default)]
    pub cost: u32,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Sprite path.
    #[serde(default)]
    pub sprite: String,
    /// Can the item restore HP?
    #[serde(default)]
    pub is_healing: bool,
    /// Amount of HP restored, if healing.
    #[serde(default)]
    pub heal_amount: u16,
    /// Can the item be held by a Mon?
    #[serde(default)]
    pub is_equipable: bool,
    /// Capture strength multiplier, if the item is a ball.
    ///
    /// Values of 255 or more always capture.
    #[serde(default)]
    pub capture_rate: f64,
}

impl ItemData {
    /// Is the item a ball that can be thrown at a wild Mon?
    pub fn is_ball(&self) -> bool {
        self.name.to_lowercase().contains("ball")
    }
}
