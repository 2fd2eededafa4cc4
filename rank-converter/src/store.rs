use std::path::PathBuf;

use eyre::WrapErr;
use models::{Distribution, Game};

/// Stored distributions, one pretty-printed JSON record list per game.
#[derive(Debug, Clone)]
pub struct DistributionStore {
    dir: PathBuf,
}

impl DistributionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, game: Game) -> PathBuf {
        self.dir.join(format!("{}.json", game.slug()))
    }

    pub fn save(&self, game: Game, distribution: &Distribution) -> eyre::Result<PathBuf> {
        std::fs::create_dir_all(&self.dir).wrap_err("create store directory")?;

        let path = self.path_for(game);
        let json = serde_json::to_string_pretty(distribution).wrap_err("serialize distribution")?;
        std::fs::write(&path, json)
            .wrap_err_with(|| format!("write distribution: {}", path.display()))?;

        tracing::info!(
            %game,
            path = %path.display(),
            tiers = distribution.len(),
            "distribution stored"
        );
        Ok(path)
    }

    pub fn load(&self, game: Game) -> eyre::Result<Distribution> {
        let path = self.path_for(game);
        let json = std::fs::read_to_string(&path).wrap_err_with(|| {
            format!(
                "read distribution for {game}: {} (run `build --game {}` first)",
                path.display(),
                game.slug()
            )
        })?;
        serde_json::from_str(&json)
            .wrap_err_with(|| format!("parse distribution: {}", path.display()))
    }
}
