use rust_decimal::Decimal;

use models::{Distribution, TierEntry};

use crate::error::BuildError;

/// Spread rounding drift over every tier so the curve ends at exactly 100.
///
/// Each share becomes `share * 100 / total`, i.e. it grows by
/// `share * inaccuracy / total`, so larger tiers absorb more of the
/// correction and relative shares are kept. The few units in the last place
/// that decimal division can leave behind go to the highest tier with a
/// non-zero share. Tier order is unchanged.
pub fn normalize(mut entries: Vec<TierEntry>) -> Result<Distribution, BuildError> {
    let Some(last) = entries.last() else {
        return Err(BuildError::EmptyDistribution);
    };
    let total = last.cumulative_percentile;
    if total <= Decimal::ZERO {
        return Err(BuildError::DegenerateDistribution { total });
    }
    let inaccuracy = Decimal::ONE_HUNDRED - total;
    tracing::debug!(%total, %inaccuracy, "adjusting rank shares");

    let mut cumulative = Decimal::ZERO;
    for entry in &mut entries {
        entry.rank_share = entry
            .rank_share
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.checked_div(total))
            .ok_or_else(|| BuildError::Overflow {
                tier: entry.tier.clone(),
            })?;
        cumulative = cumulative
            .checked_add(entry.rank_share)
            .ok_or_else(|| BuildError::Overflow {
                tier: entry.tier.clone(),
            })?;
        entry.cumulative_percentile = cumulative;
    }

    absorb_residue(&mut entries, Decimal::ONE_HUNDRED - cumulative);

    Ok(Distribution::try_from(entries)?)
}

fn absorb_residue(entries: &mut [TierEntry], residue: Decimal) {
    if residue.is_zero() {
        return;
    }
    let Some(idx) = entries.iter().rposition(|e| e.rank_share > Decimal::ZERO) else {
        return;
    };
    tracing::trace!(%residue, tier = %entries[idx].tier, "absorbing division residue");

    entries[idx].rank_share += residue;
    for entry in &mut entries[idx..] {
        entry.cumulative_percentile += residue;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_lines;
    use rust_decimal_macros::dec;

    fn shares(dist: &Distribution) -> Vec<Decimal> {
        dist.entries().iter().map(|e| e.rank_share).collect()
    }

    #[test]
    fn exact_hundred_is_a_no_op() {
        let raw = parse_lines(&["Iron 1 10.00%", "Iron 2 5.00%", "Bronze 1 85.00%"]).unwrap();
        let dist = normalize(raw.clone()).unwrap();
        assert_eq!(dist.entries(), raw.as_slice());
        assert!(dist.is_normalized());
    }

    #[test]
    fn scales_proportionally_to_exact_hundred() {
        let raw = parse_lines(&["Gold 1 49.50%", "Gold 2 49.50%"]).unwrap();
        let dist = normalize(raw).unwrap();

        assert_eq!(shares(&dist), [dec!(50), dec!(50)]);
        assert_eq!(dist.last().cumulative_percentile, dec!(100));
    }

    #[test]
    fn larger_tiers_absorb_more_correction() {
        let raw = parse_lines(&["Silver 30.00%", "Gold 60.00%"]).unwrap();
        let dist = normalize(raw).unwrap();
        assert_eq!(dist.total(), dec!(100));

        let (silver, gold) = (dist.entries()[0].rank_share, dist.entries()[1].rank_share);
        assert_eq!(silver.round_dp(2), dec!(33.33));
        assert_eq!(gold.round_dp(2), dec!(66.67));
        assert!((gold - silver * dec!(2)).abs() < dec!(0.000000000001));
    }

    #[test]
    fn over_hundred_scales_down() {
        let raw = parse_lines(&["A 25.00%", "B 25.00%", "C 75.00%"]).unwrap();
        let dist = normalize(raw).unwrap();

        assert_eq!(shares(&dist), [dec!(20), dec!(20), dec!(60)]);
        assert_eq!(dist.total(), dec!(100));
    }

    #[test]
    fn repeating_fractions_still_end_at_exactly_hundred() {
        let raw = parse_lines(&["A 1.00%", "B 1.00%", "C 1.00%", "D 0.00%"]).unwrap();
        let dist = normalize(raw).unwrap();

        assert_eq!(dist.total(), Decimal::ONE_HUNDRED);
        let cumulative = dist
            .entries()
            .iter()
            .map(|e| e.cumulative_percentile)
            .collect::<Vec<_>>();
        assert!(cumulative.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(cumulative[2], cumulative[3]);
        assert_eq!(dist.entries()[3].rank_share, Decimal::ZERO);
    }

    #[test]
    fn huge_single_share_scales_to_hundred() {
        let raw = parse_lines(&["Gold 1000000000000000%"]).unwrap();
        let dist = normalize(raw).unwrap();
        assert_eq!(dist.total(), dec!(100));
        assert_eq!(dist.first().rank_share, dec!(100));
    }

    #[test]
    fn share_too_large_to_scale_is_an_error() {
        let raw = parse_lines(&["A 79228162514264337593543950335%"]).unwrap();
        assert_eq!(
            normalize(raw),
            Err(BuildError::Overflow {
                tier: "A".to_string()
            })
        );
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(normalize(Vec::new()), Err(BuildError::EmptyDistribution));
    }

    #[test]
    fn all_zero_shares_cannot_be_scaled() {
        let raw = parse_lines(&["A 0.00%", "B 0.00%"]).unwrap();
        assert!(matches!(
            normalize(raw),
            Err(BuildError::DegenerateDistribution { .. })
        ));
    }

    #[test]
    fn duplicate_tiers_are_rejected() {
        let raw = parse_lines(&["Gold 50.00%", "Gold 49.00%"]).unwrap();
        assert!(matches!(normalize(raw), Err(BuildError::Invalid(_))));
    }
}
