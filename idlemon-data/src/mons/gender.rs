use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The gender of a specific Mon.
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
pub enum Gender {
    #[string = "male"]
    #[alias = "M"]
    Male,
    #[string = "female"]
    #[alias = "F"]
    Female,
    #[string = "genderless"]
    #[alias = "N"]
    Genderless,
}
