use std::path::PathBuf;

use eyre::WrapErr;

use crate::cli::RootArgs;

const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone)]
pub struct ConverterConfig {
    pub data_dir: PathBuf,
}

impl ConverterConfig {
    /// `--data-dir` wins over the `DATA_DIR` env var.
    pub fn from_env_and_args(args: &RootArgs) -> eyre::Result<Self> {
        let data_dir = match &args.data_dir {
            Some(dir) => dir.clone(),
            None => std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
        };
        if data_dir.as_os_str().is_empty() {
            return Err(eyre::eyre!("data directory must not be empty"));
        }

        Ok(Self { data_dir })
    }

    pub fn ensure_dirs(&self) -> eyre::Result<()> {
        std::fs::create_dir_all(&self.data_dir).wrap_err("create data_dir")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn flag_overrides_env() {
        let args = RootArgs::try_parse_from([
            "rank-converter",
            "--data-dir",
            "custom",
            "convert",
            "--from",
            "league",
            "--tier",
            "Gold II",
        ])
        .unwrap();
        let config = ConverterConfig::from_env_and_args(&args).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("custom"));
    }

    #[test]
    fn ensure_dirs_creates_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ConverterConfig {
            data_dir: tmp.path().join("a/b"),
        };
        config.ensure_dirs().unwrap();
        assert!(config.data_dir.is_dir());
    }
}
