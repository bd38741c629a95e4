use serde::{
    Deserialize,
    Serialize,
};

fn default_method() -> String {
    "unknown".to_owned()
}

/// A single learnable move of a species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnableMove {
    /// ID of the move.
    #[serde(rename = "move")]
    pub move_id: u32,
    /// Level the move is learned at.
    ///
    /// Zero for moves that are not learned by leveling up.
    #[serde(default)]
    pub level: u8,
    /// How the move is learned, as named by the catalog (e.g., `level-up`, `machine`).
    #[serde(default = "default_method")]
    pub method: String,
}

impl LearnableMove {
    /// Learn method for moves gained on level up.
    pub const LEVEL_UP: &str = "level-up";

    /// Is the move learned by leveling up?
    pub fn by_level_up(&self) -> bool {
        self.method == Self::LEVEL_UP
    }
}

/// All moves a species can learn.
pub type LearnSet = Vec<LearnableMove>;
