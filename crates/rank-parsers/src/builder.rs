use models::Distribution;

use crate::error::BuildError;
use crate::lines::parse_lines;
use crate::normalize::normalize;

/// Parse scraped rank lines and normalize them into a distribution.
///
/// Nothing is returned unless every line parsed and the curve could be
/// brought to exactly 100.
pub fn build_distribution<S: AsRef<str>>(lines: &[S]) -> Result<Distribution, BuildError> {
    let result = parse_lines(lines)
        .map_err(BuildError::from)
        .and_then(|entries| {
            tracing::info!(tiers = entries.len(), "lines parsed");
            if let Some(last) = entries.last() {
                tracing::debug!(total = %last.cumulative_percentile, "raw cumulative total");
            }
            normalize(entries)
        });

    match &result {
        Ok(distribution) => tracing::info!(tiers = distribution.len(), "distribution built"),
        Err(e) => tracing::error!("failed to build distribution: {e}"),
    }
    result
}
