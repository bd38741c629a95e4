use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Type;

/// The category of a move, which determines which stats it uses.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    #[string = "physical"]
    #[default]
    Physical,
    #[string = "special"]
    Special,
    #[string = "status"]
    Status,
}

/// Data about a particular move.
///
/// Only the fields needed to fill a Mon's move slots and describe the move to clients are kept.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    /// Catalog ID of the move.
    pub id: u32,
    /// Name of the move.
    pub name: String,
    /// Move type.
    #[serde(rename = "type")]
    pub primary_type: Type,
    /// Move category.
    pub category: MoveCategory,
    /// Base power, absent for status moves.
    pub power: Option<u16>,
    /// Base accuracy, absent for moves that never miss.
    pub accuracy: Option<u8>,
    /// Base power points.
    pub pp: Option<u8>,
    /// Description.
    pub description: Option<String>,
}
