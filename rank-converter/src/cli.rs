use std::path::PathBuf;

use clap::{Parser, Subcommand};
use models::Game;

#[derive(Debug, Parser)]
#[command(name = "rank-converter")]
#[command(about = "Convert a competitive rank into the equivalent rank of another game")]
#[command(arg_required_else_help = true)]
pub struct RootArgs {
    #[arg(
        long,
        value_name = "DIR",
        help = "Directory holding stored distributions (overrides DATA_DIR, default: data)"
    )]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Build a normalized distribution from scraped rank lines and store it")]
    Build {
        #[arg(long, value_name = "GAME", help = "Game the lines belong to (league, valorant)")]
        game: Game,

        #[arg(
            long,
            value_name = "FILE",
            help = "Text file with one scraped table cell per line"
        )]
        input: PathBuf,

        #[arg(long, help = "Discard the first non-empty cell (table header)")]
        skip_header: bool,
    },
    #[command(about = "Find the equivalent rank in another game and print it as JSON")]
    Convert {
        #[arg(long, value_name = "GAME", help = "Game of the rank being converted")]
        from: Game,

        #[arg(
            long,
            value_name = "GAME",
            help = "Game to convert into. Omit for the other game."
        )]
        to: Option<Game>,

        #[arg(long, value_name = "TIER", help = "Tier label exactly as stored, e.g. \"Gold 2\"")]
        tier: String,
    },
}
