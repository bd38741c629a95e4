use core::fmt::Debug;

use ahash::HashMap;
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use thiserror::Error;

/// One of the six battle statistics.
///
/// The canonical labels are the camel-case keys stored on every Mon. Catalog exports spell the
/// special stats with hyphens, so those spellings are accepted as aliases.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Stat {
    #[string = "hp"]
    #[alias = "Hit Points"]
    HP,
    #[string = "attack"]
    #[alias = "atk"]
    Atk,
    #[string = "defense"]
    #[alias = "def"]
    Def,
    #[string = "spAttack"]
    #[alias = "special-attack"]
    #[alias = "Special Attack"]
    #[alias = "spa"]
    SpAtk,
    #[string = "spDefense"]
    #[alias = "special-defense"]
    #[alias = "Special Defense"]
    #[alias = "spd"]
    SpDef,
    #[string = "speed"]
    #[alias = "spe"]
    Spe,
}

impl Stat {
    /// All stats, in table order.
    pub const ALL: [Stat; 6] = [
        Stat::HP,
        Stat::Atk,
        Stat::Def,
        Stat::SpAtk,
        Stat::SpDef,
        Stat::Spe,
    ];
}

/// A map of values for each stat.
pub type StatMap<T> = HashMap<Stat, T>;

/// A stat table that may be missing entries, as read from loosely-typed input.
pub type PartialStatTable = StatMap<u16>;

/// Error for a stat table that is required to define all six stats.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("stat table is missing {missing}")]
pub struct IncompleteStatTableError {
    pub missing: Stat,
}

/// Iterator over the entries of a [`StatTable`].
pub struct StatTableEntries<'s> {
    table: &'s StatTable,
    next: usize,
}

impl<'s> Iterator for StatTableEntries<'s> {
    type Item = (Stat, u16);

    fn next(&mut self) -> Option<Self::Item> {
        let stat = *Stat::ALL.get(self.next)?;
        self.next += 1;
        Some((stat, self.table.get(stat)))
    }
}

/// A full stat table.
///
/// Used for base stats, individual values, and derived stats alike. Missing keys deserialize to
/// zero; use [`StatTable::complete`] where every stat must be present.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatTable {
    #[serde(default)]
    pub hp: u16,
    #[serde(default, rename = "attack")]
    pub atk: u16,
    #[serde(default, rename = "defense")]
    pub def: u16,
    #[serde(default, rename = "spAttack", alias = "special-attack")]
    pub spa: u16,
    #[serde(default, rename = "spDefense", alias = "special-defense")]
    pub spd: u16,
    #[serde(default, rename = "speed")]
    pub spe: u16,
}

impl StatTable {
    /// Creates a table with the same value for every stat.
    pub fn uniform(value: u16) -> Self {
        Self {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    /// Builds a table from a partial one, failing on the first missing stat.
    pub fn complete(table: &PartialStatTable) -> Result<Self, IncompleteStatTableError> {
        Stat::ALL
            .iter()
            .map(|stat| {
                table
                    .get(stat)
                    .map(|value| (*stat, *value))
                    .ok_or(IncompleteStatTableError { missing: *stat })
            })
            .collect()
    }

    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Sets the given value in the stat table.
    pub fn set(&mut self, stat: Stat, value: u16) {
        let entry = match stat {
            Stat::HP => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.spa,
            Stat::SpDef => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *entry = value;
    }

    /// Creates an iterator over all stat entries.
    pub fn entries(&self) -> StatTableEntries<'_> {
        StatTableEntries {
            table: self,
            next: 0,
        }
    }

    /// Creates an iterator over all stat values.
    pub fn values(&self) -> impl Iterator<Item = u16> + '_ {
        self.entries().map(|(_, value)| value)
    }
}

impl From<&PartialStatTable> for StatTable {
    fn from(value: &PartialStatTable) -> Self {
        value.iter().map(|(stat, value)| (*stat, *value)).collect()
    }
}

impl FromIterator<(Stat, u16)> for StatTable {
    fn from_iter<T: IntoIterator<Item = (Stat, u16)>>(iter: T) -> Self {
        let mut out = StatTable::default();
        for (stat, value) in iter {
            out.set(stat, value);
        }
        out
    }
}

impl<'s> IntoIterator for &'s StatTable {
    type IntoIter = StatTableEntries<'s>;
    type Item = (Stat, u16);
    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}
