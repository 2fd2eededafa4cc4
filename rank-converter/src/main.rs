use clap::Parser;
use eyre::WrapErr;

use rank_converter::cli::{Command, RootArgs};
use rank_converter::commands;
use rank_converter::config::ConverterConfig;
use rank_converter::store::DistributionStore;

fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = RootArgs::parse();
    let config = ConverterConfig::from_env_and_args(&args).wrap_err("load config")?;
    config.ensure_dirs().wrap_err("create data directories")?;

    let store = DistributionStore::new(&config.data_dir);

    match args.command {
        Command::Build {
            game,
            input,
            skip_header,
        } => {
            let outcome = commands::build(&store, game, &input, skip_header)?;
            println!("saved={} tiers={}", outcome.path.display(), outcome.tiers);
        }
        Command::Convert { from, to, tier } => {
            let equivalence = commands::convert(&store, from, to, &tier)?;
            let json = serde_json::to_string_pretty(&equivalence).wrap_err("serialize json")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "rank_converter=info,rank_parsers=info,rank_equivalence=info".into()
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
