use core::str::FromStr;

use anyhow::Result;
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    Stat,
    error::{
        UnknownNatureError,
        WrapError,
    },
    mons::calculations::Multiplier,
};

/// A Mon's nature, which boosts and drops particular stat values.
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
pub enum Nature {
    #[string = "Hardy"]
    Hardy,
    #[string = "Lonely"]
    Lonely,
    #[string = "Adamant"]
    Adamant,
    #[string = "Naughty"]
    Naughty,
    #[string = "Brave"]
    Brave,
    #[string = "Bold"]
    Bold,
    #[string = "Docile"]
    Docile,
    #[string = "Impish"]
    Impish,
    #[string = "Lax"]
    Lax,
    #[string = "Relaxed"]
    Relaxed,
    #[string = "Modest"]
    Modest,
    #[string = "Mild"]
    Mild,
    #[string = "Bashful"]
    Bashful,
    #[string = "Rash"]
    Rash,
    #[string = "Quiet"]
    Quiet,
    #[string = "Calm"]
    Calm,
    #[string = "Gentle"]
    Gentle,
    #[string = "Careful"]
    Careful,
    #[string = "Quirky"]
    Quirky,
    #[string = "Sassy"]
    Sassy,
    #[string = "Timid"]
    Timid,
    #[string = "Hasty"]
    Hasty,
    #[string = "Jolly"]
    Jolly,
    #[string = "Naive"]
    Naive,
    #[string = "Serious"]
    Serious,
}

impl Nature {
    /// All natures.
    ///
    /// Laid out as a 5x5 grid: the row selects the boosted stat and the column selects the
    /// dropped stat, so the diagonal holds the neutral natures.
    pub const ALL: [Nature; 25] = [
        Self::Hardy,
        Self::Lonely,
        Self::Adamant,
        Self::Naughty,
        Self::Brave,
        Self::Bold,
        Self::Docile,
        Self::Impish,
        Self::Lax,
        Self::Relaxed,
        Self::Modest,
        Self::Mild,
        Self::Bashful,
        Self::Rash,
        Self::Quiet,
        Self::Calm,
        Self::Gentle,
        Self::Careful,
        Self::Quirky,
        Self::Sassy,
        Self::Timid,
        Self::Hasty,
        Self::Jolly,
        Self::Naive,
        Self::Serious,
    ];

    /// Nature used in place of an unrecognized nature name.
    pub const NEUTRAL: Nature = Nature::Hardy;

    fn boosts(&self) -> Stat {
        match self {
            Self::Hardy | Self::Lonely | Self::Adamant | Self::Naughty | Self::Brave => Stat::Atk,
            Self::Bold | Self::Docile | Self::Impish | Self::Lax | Self::Relaxed => Stat::Def,
            Self::Modest | Self::Mild | Self::Bashful | Self::Rash | Self::Quiet => Stat::SpAtk,
            Self::Calm | Self::Gentle | Self::Careful | Self::Quirky | Self::Sassy => Stat::SpDef,
            Self::Timid | Self::Hasty | Self::Jolly | Self::Naive | Self::Serious => Stat::Spe,
        }
    }

    fn drops(&self) -> Stat {
        match self {
            Self::Hardy | Self::Bold | Self::Modest | Self::Calm | Self::Timid => Stat::Atk,
            Self::Lonely | Self::Docile | Self::Mild | Self::Gentle | Self::Hasty => Stat::Def,
            Self::Adamant | Self::Impish | Self::Bashful | Self::Careful | Self::Jolly => {
                Stat::SpAtk
            }
            Self::Naughty | Self::Lax | Self::Rash | Self::Quirky | Self::Naive => Stat::SpDef,
            Self::Brave | Self::Relaxed | Self::Quiet | Self::Sassy | Self::Serious => Stat::Spe,
        }
    }

    /// The stat modifiers of the nature.
    pub fn modifier(&self) -> NatureModifier {
        NatureModifier::new(self.boosts(), self.drops())
    }

    /// Is the nature neutral?
    pub fn is_neutral(&self) -> bool {
        self.modifier() == NatureModifier::NEUTRAL
    }
}

/// The stat boosted and the stat dropped by a nature.
///
/// Neutral natures boost and drop nothing. A stat is never both boosted and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NatureModifier {
    boosted: Option<Stat>,
    dropped: Option<Stat>,
}

impl NatureModifier {
    /// The modifier of neutral natures.
    pub const NEUTRAL: NatureModifier = NatureModifier {
        boosted: None,
        dropped: None,
    };

    fn new(boosted: Stat, dropped: Stat) -> Self {
        if boosted == dropped {
            Self::NEUTRAL
        } else {
            Self {
                boosted: Some(boosted),
                dropped: Some(dropped),
            }
        }
    }

    /// The stat boosted by 10%.
    pub fn boosted(&self) -> Option<Stat> {
        self.boosted
    }

    /// The stat dropped by 10%.
    pub fn dropped(&self) -> Option<Stat> {
        self.dropped
    }

    pub(crate) fn multiplier(&self, stat: Stat) -> Multiplier {
        if self.boosted == Some(stat) {
            Multiplier::Boost
        } else if self.dropped == Some(stat) {
            Multiplier::Drop
        } else {
            Multiplier::Neutral
        }
    }
}

/// Looks up the modifier of a nature by name, ignoring case.
///
/// Fails with [`UnknownNatureError`] for names outside of the 25 natures.
pub fn lookup_nature(name: &str) -> Result<NatureModifier> {
    Nature::from_str(name)
        .map(|nature| nature.modifier())
        .map_err(|_| {
            UnknownNatureError {
                nature: name.to_owned(),
            }
            .wrap_error()
        })
}

/// Looks up the modifier of a nature by name, degrading to neutral for unknown names.
///
/// Legacy records may carry misspelled natures. These are logged rather than rejected.
pub fn lookup_nature_or_neutral(name: &str) -> NatureModifier {
    parse_nature_or_neutral(name).modifier()
}

/// Parses a nature by name, degrading to [`Nature::NEUTRAL`] for unknown names.
pub fn parse_nature_or_neutral(name: &str) -> Nature {
    match Nature::from_str(name) {
        Ok(nature) => nature,
        Err(_) => {
            log::warn!("unknown nature \"{name}\" treated as neutral");
            Nature::NEUTRAL
        }
    }
}
