use crate::{
    Stat,
    StatTable,
    mons::{
        Nature,
        NatureModifier,
    },
};

/// Effect of a nature on a single stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Multiplier {
    Boost,
    Neutral,
    Drop,
}

impl Multiplier {
    /// Applies the multiplier, truncating the result.
    ///
    /// Equal to `floor(value * 1.1)` and `floor(value * 0.9)`, computed without floating point.
    fn apply(self, value: u32) -> u32 {
        match self {
            Self::Boost => value + value * 10 / 100,
            Self::Neutral => value,
            Self::Drop => value - (value * 10).div_ceil(100),
        }
    }
}

fn saturate(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Calculates a Mon's actual stats from its species' base stats, individual values, nature, and
/// level.
///
/// Each stage truncates before the next: the level term is divided first, the flat addend is
/// added, and only then is the nature multiplier applied and truncated again. HP is never
/// affected by nature.
pub fn calculate_mon_stats(
    base_stats: &StatTable,
    ivs: &StatTable,
    nature: Nature,
    level: u8,
) -> StatTable {
    let level = level as u32;
    let mut stats = StatTable::default();
    for (stat, base) in base_stats {
        let value = (2 * base as u32 + ivs.get(stat) as u32) * level / 100;
        let value = if stat == Stat::HP {
            value + level + 10
        } else {
            value + 5
        };
        stats.set(stat, saturate(value));
    }
    apply_nature_to_stats(stats, nature.modifier())
}

/// Applies the given nature modifier to the stat table, returning the new stat table.
pub fn apply_nature_to_stats(mut stats: StatTable, modifier: NatureModifier) -> StatTable {
    for stat in [modifier.boosted(), modifier.dropped()].into_iter().flatten() {
        let value = modifier.multiplier(stat).apply(stats.get(stat) as u32);
        stats.set(stat, saturate(value));
    }
    stats
}
