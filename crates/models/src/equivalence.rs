use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Fractional digits kept in externally visible percentiles.
pub const PERCENT_DP: u32 = 2;

/// Round half away from zero and pad to exactly [`PERCENT_DP`] digits, so
/// `100` is shown as `100.00`.
pub fn round_percent(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(PERCENT_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PERCENT_DP);
    rounded
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivalenceResult {
    /// Matched tier in the target game.
    pub tier: String,
    /// Cumulative percentile of the matched tier in the target game.
    pub tier_percentile: Decimal,
    /// Cumulative percentile of the source tier in its own game.
    pub source_percentile: Decimal,
    /// Position of the source percentile inside the matched tier's band.
    pub within_tier_percentile: Decimal,
}

impl EquivalenceResult {
    pub fn new(
        tier: impl Into<String>,
        tier_percentile: Decimal,
        source_percentile: Decimal,
        within_tier_percentile: Decimal,
    ) -> Self {
        Self {
            tier: tier.into(),
            tier_percentile: round_percent(tier_percentile),
            source_percentile: round_percent(source_percentile),
            within_tier_percentile: round_percent(within_tier_percentile),
        }
    }
}

/// Outcome of an equivalence lookup.
///
/// `NoEquivalentRank` is a regular answer: the source sits above every tier
/// recorded for the target game. It still reports where the source tier sits
/// in its own game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Equivalence {
    #[serde(rename = "equivalent")]
    Found(EquivalenceResult),
    NoEquivalentRank { source_percentile: Decimal },
}

impl Equivalence {
    pub fn result(&self) -> Option<&EquivalenceResult> {
        match self {
            Self::Found(result) => Some(result),
            Self::NoEquivalentRank { .. } => None,
        }
    }

    /// Cumulative percentile of the source tier in its own game.
    pub fn source_percentile(&self) -> Decimal {
        match self {
            Self::Found(result) => result.source_percentile,
            Self::NoEquivalentRank { source_percentile } => *source_percentile,
        }
    }

    pub fn no_equivalent_rank(source_percentile: Decimal) -> Self {
        Self::NoEquivalentRank {
            source_percentile: round_percent(source_percentile),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_percent(dec!(12.345)), dec!(12.35));
        assert_eq!(round_percent(dec!(12.355)), dec!(12.36));
        assert_eq!(round_percent(dec!(33.3333333)), dec!(33.33));
        assert_eq!(round_percent(dec!(100)), dec!(100));
    }

    #[test]
    fn result_values_are_rounded_on_construction() {
        let result = EquivalenceResult::new("Gold 2", dec!(60.004), dec!(49.996), dec!(66.6666));
        assert_eq!(result.tier_percentile, dec!(60.00));
        assert_eq!(result.source_percentile, dec!(50.00));
        assert_eq!(result.within_tier_percentile, dec!(66.67));
    }

    #[test]
    fn outcome_tag_distinguishes_variants() {
        let none = Equivalence::no_equivalent_rank(dec!(99.5));
        assert_eq!(none.source_percentile(), dec!(99.50));
        assert_eq!(
            serde_json::to_value(&none).unwrap(),
            serde_json::json!({"outcome": "no_equivalent_rank", "source_percentile": "99.50"})
        );

        let found = Equivalence::Found(EquivalenceResult::new(
            "Platinum 1",
            dec!(60),
            dec!(50),
            dec!(50),
        ));
        let value = serde_json::to_value(&found).unwrap();
        assert_eq!(value["outcome"], "equivalent");
        assert_eq!(value["tier"], "Platinum 1");
        assert_eq!(found.result().map(|r| r.tier.as_str()), Some("Platinum 1"));
        assert_eq!(found.source_percentile(), dec!(50));
    }

    #[test]
    fn whole_values_keep_two_fractional_digits() {
        assert_eq!(round_percent(dec!(100)).to_string(), "100.00");
        assert_eq!(round_percent(dec!(7.5)).to_string(), "7.50");
        assert_eq!(round_percent(dec!(12.345)).to_string(), "12.35");

        let result = EquivalenceResult::new("Radiant", dec!(100), dec!(50), dec!(100));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["tier_percentile"], "100.00");
        assert_eq!(value["source_percentile"], "50.00");
        assert_eq!(value["within_tier_percentile"], "100.00");
    }
}
