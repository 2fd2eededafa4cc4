use std::path::{Path, PathBuf};

use eyre::WrapErr;
use models::{Equivalence, Game};
use rank_parsers::{build_distribution, collapse_cells};

use crate::store::DistributionStore;

#[derive(Debug)]
pub struct BuildOutcome {
    pub path: PathBuf,
    pub tiers: usize,
}

/// Read scraped cells from `input`, build the game's distribution and store it.
pub fn build(
    store: &DistributionStore,
    game: Game,
    input: &Path,
    skip_header: bool,
) -> eyre::Result<BuildOutcome> {
    let text = std::fs::read_to_string(input)
        .wrap_err_with(|| format!("read input file: {}", input.display()))?;
    let lines = collapse_cells(text.lines(), skip_header);
    tracing::info!(%game, lines = lines.len(), "building distribution");

    let distribution = build_distribution(&lines)
        .wrap_err_with(|| format!("build {game} distribution"))?;
    let path = store.save(game, &distribution)?;

    Ok(BuildOutcome {
        path,
        tiers: distribution.len(),
    })
}

/// Convert `tier` of game `from` into game `to` (the other game when `None`).
pub fn convert(
    store: &DistributionStore,
    from: Game,
    to: Option<Game>,
    tier: &str,
) -> eyre::Result<Equivalence> {
    let to = to.unwrap_or_else(|| from.other());
    let source = store.load(from)?;
    let target = store.load(to)?;

    let equivalence = rank_equivalence::convert(&source, tier, &target)
        .wrap_err_with(|| format!("convert {from} rank"))?;
    match &equivalence {
        Equivalence::Found(result) => {
            tracing::info!(%from, %to, tier, equivalent = %result.tier, "converted")
        }
        Equivalence::NoEquivalentRank { source_percentile } => {
            tracing::info!(%from, %to, tier, %source_percentile, "no equivalent rank")
        }
    }
    Ok(equivalence)
}
