use anyhow::Result;
use itertools::Itertools;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    DataStore,
    LearnableMove,
    config::EngineOptions,
    error::WrapOptionError,
};

/// A move known by a Mon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSlot {
    /// Position of the move, starting at 1.
    pub slot: u8,
    #[serde(rename = "move")]
    pub move_id: u32,
    pub name: String,
    pub pp_current: u8,
    pub pp_max: u8,
}

/// Fills move slots with the most recently learned level-up moves.
///
/// Moves learned at the same level keep their learnset order.
pub fn assign_move_slots(
    learnset: &[LearnableMove],
    level: u8,
    data: &dyn DataStore,
    options: &EngineOptions,
) -> Result<Vec<MoveSlot>> {
    learnset
        .iter()
        .filter(|learnable| learnable.by_level_up() && learnable.level <= level)
        .sorted_by(|a, b| b.level.cmp(&a.level))
        .take(options.max_move_slots)
        .enumerate()
        .map(|(i, learnable)| -> Result<MoveSlot> {
            let move_data = data
                .get_move(learnable.move_id)?
                .wrap_not_found("move", learnable.move_id)?;
            let pp = move_data.pp.unwrap_or(options.default_pp);
            Ok(MoveSlot {
                slot: i as u8 + 1,
                move_id: move_data.id,
                name: move_data.name,
                pp_current: pp,
                pp_max: pp,
            })
        })
        .collect()
}
