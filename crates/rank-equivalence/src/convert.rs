use models::{Distribution, Equivalence, EquivalenceResult};

use crate::band::band_for;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tier: {tier:?}")]
pub struct UnknownTierError {
    pub tier: String,
}

/// Map `source_tier` from one game's curve onto the equivalent tier of
/// another game's curve.
///
/// A source above every target tier is answered with
/// [`Equivalence::NoEquivalentRank`]; only a tier missing from `source` is an
/// error. Neither distribution is modified.
pub fn convert(
    source: &Distribution,
    source_tier: &str,
    target: &Distribution,
) -> Result<Equivalence, UnknownTierError> {
    let entry = source.get(source_tier).ok_or_else(|| UnknownTierError {
        tier: source_tier.to_string(),
    })?;
    let percentile = entry.cumulative_percentile;

    let Some(band) = band_for(target, percentile) else {
        tracing::debug!(tier = source_tier, %percentile, "no equivalent rank");
        return Ok(Equivalence::no_equivalent_rank(percentile));
    };

    let matched = band.matched();
    tracing::debug!(
        tier = source_tier,
        %percentile,
        equivalent = %matched.tier,
        "equivalent rank found"
    );

    Ok(Equivalence::Found(EquivalenceResult::new(
        matched.tier.clone(),
        matched.cumulative_percentile,
        percentile,
        band.within_tier_percentile(percentile),
    )))
}
