use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One rank band of a game's ladder.
///
/// `rank_share` is the percentage of players sitting exactly in this tier and
/// `cumulative_percentile` the running total from the lowest tier up to and
/// including this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierEntry {
    pub tier: String,
    pub rank_share: Decimal,
    pub cumulative_percentile: Decimal,
}

impl TierEntry {
    pub fn new(
        tier: impl Into<String>,
        rank_share: Decimal,
        cumulative_percentile: Decimal,
    ) -> Self {
        Self {
            tier: tier.into(),
            rank_share,
            cumulative_percentile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDistribution {
    #[error("distribution has no tiers")]
    Empty,

    #[error("duplicate tier: {0:?}")]
    DuplicateTier(String),

    #[error("negative rank share for tier {tier:?}: {share}")]
    NegativeShare { tier: String, share: Decimal },

    #[error("cumulative percentile decreases at tier {tier:?}: {previous} -> {current}")]
    NotMonotonic {
        tier: String,
        previous: Decimal,
        current: Decimal,
    },
}

/// Tier entries of one game, lowest skill first.
///
/// Always non-empty, tier labels are unique and the cumulative curve never
/// decreases. Once built it is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TierEntry>", into = "Vec<TierEntry>")]
pub struct Distribution {
    entries: Vec<TierEntry>,
}

impl Distribution {
    pub fn entries(&self) -> &[TierEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> &TierEntry {
        &self.entries[0]
    }

    pub fn last(&self) -> &TierEntry {
        &self.entries[self.entries.len() - 1]
    }

    pub fn get(&self, tier: &str) -> Option<&TierEntry> {
        self.entries.iter().find(|e| e.tier == tier)
    }

    pub fn position(&self, tier: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.tier == tier)
    }

    pub fn tiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.tier.as_str())
    }

    /// Cumulative percentile of the highest tier.
    pub fn total(&self) -> Decimal {
        self.last().cumulative_percentile
    }

    /// True when the curve ends at exactly 100.
    pub fn is_normalized(&self) -> bool {
        self.total() == Decimal::ONE_HUNDRED
    }
}

impl TryFrom<Vec<TierEntry>> for Distribution {
    type Error = InvalidDistribution;

    fn try_from(entries: Vec<TierEntry>) -> Result<Self, Self::Error> {
        validate(&entries)?;
        Ok(Self { entries })
    }
}

fn validate(entries: &[TierEntry]) -> Result<(), InvalidDistribution> {
    if entries.is_empty() {
        return Err(InvalidDistribution::Empty);
    }

    let mut seen = HashSet::with_capacity(entries.len());
    let mut previous = Decimal::ZERO;
    for entry in entries {
        if !seen.insert(entry.tier.as_str()) {
            return Err(InvalidDistribution::DuplicateTier(entry.tier.clone()));
        }
        if entry.rank_share < Decimal::ZERO {
            return Err(InvalidDistribution::NegativeShare {
                tier: entry.tier.clone(),
                share: entry.rank_share,
            });
        }
        if entry.cumulative_percentile < previous {
            return Err(InvalidDistribution::NotMonotonic {
                tier: entry.tier.clone(),
                previous,
                current: entry.cumulative_percentile,
            });
        }
        previous = entry.cumulative_percentile;
    }
    Ok(())
}

impl From<Distribution> for Vec<TierEntry> {
    fn from(distribution: Distribution) -> Self {
        distribution.entries
    }
}
