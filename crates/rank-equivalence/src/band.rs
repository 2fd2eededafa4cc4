use rust_decimal::Decimal;

use models::{Distribution, TierEntry};

/// Where a percentile lands on a target curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band<'a> {
    /// Matched the lowest tier; there is no lower neighbour to interpolate from.
    Bottom(&'a TierEntry),
    /// Matched the highest tier.
    Top(&'a TierEntry),
    Interior {
        lower: &'a TierEntry,
        matched: &'a TierEntry,
    },
}

impl<'a> Band<'a> {
    pub fn matched(&self) -> &'a TierEntry {
        match *self {
            Band::Bottom(entry) | Band::Top(entry) => entry,
            Band::Interior { matched, .. } => matched,
        }
    }

    /// Position of `percentile` inside the band, 0 at the lower edge and 100
    /// at the matched tier's cumulative percentile. Edge bands report 100.
    pub fn within_tier_percentile(&self, percentile: Decimal) -> Decimal {
        match *self {
            Band::Bottom(_) | Band::Top(_) => Decimal::ONE_HUNDRED,
            Band::Interior { lower, matched } => {
                // lower < percentile <= matched, so the width is never zero
                let width = matched.cumulative_percentile - lower.cumulative_percentile;
                (percentile - lower.cumulative_percentile) / width * Decimal::ONE_HUNDRED
            }
        }
    }
}

/// Find the first tier whose cumulative percentile reaches `percentile`,
/// together with its lower neighbour.
///
/// `None` when the percentile is above the whole curve.
pub fn band_for(target: &Distribution, percentile: Decimal) -> Option<Band<'_>> {
    let mut lower: Option<&TierEntry> = None;
    let mut entries = target.entries().iter().peekable();

    while let Some(entry) = entries.next() {
        if entry.cumulative_percentile >= percentile {
            let band = match (lower, entries.peek()) {
                (None, _) => Band::Bottom(entry),
                (Some(_), None) => Band::Top(entry),
                (Some(lower), Some(_)) => Band::Interior {
                    lower,
                    matched: entry,
                },
            };
            return Some(band);
        }
        lower = Some(entry);
    }

    None
}
