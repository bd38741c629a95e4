use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The elemental type of a species or move.
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
pub enum Type {
    #[string = "normal"]
    #[default]
    Normal,
    #[string = "fighting"]
    Fighting,
    #[string = "flying"]
    Flying,
    #[string = "poison"]
    Poison,
    #[string = "ground"]
    Ground,
    #[string = "rock"]
    Rock,
    #[string = "bug"]
    Bug,
    #[string = "ghost"]
    Ghost,
    #[string = "steel"]
    Steel,
    #[string = "fire"]
    Fire,
    #[string = "water"]
    Water,
    #[string = "grass"]
    Grass,
    #[string = "electric"]
    Electric,
    #[string = "psychic"]
    Psychic,
    #[string = "ice"]
    Ice,
    #[string = "dragon"]
    Dragon,
    #[string = "dark"]
    Dark,
    #[string = "fairy"]
    Fairy,
}
