use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub mod distribution;
pub mod equivalence;

pub use distribution::{Distribution, InvalidDistribution, TierEntry};
pub use equivalence::{Equivalence, EquivalenceResult};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Game {
    #[serde(rename = "league")]
    #[strum(
        serialize = "league",
        serialize = "lol",
        serialize = "league of legends",
        to_string = "League of Legends"
    )]
    LeagueOfLegends,
    #[serde(rename = "valorant")]
    #[strum(serialize = "valorant", serialize = "val", to_string = "Valorant")]
    Valorant,
}

impl Game {
    pub const ALL: [Game; 2] = [Game::LeagueOfLegends, Game::Valorant];

    /// File-system friendly name ("league", "valorant").
    pub const fn slug(self) -> &'static str {
        match self {
            Self::LeagueOfLegends => "league",
            Self::Valorant => "valorant",
        }
    }

    /// The game a rank is converted into when no target is given.
    pub const fn other(self) -> Self {
        match self {
            Self::LeagueOfLegends => Self::Valorant,
            Self::Valorant => Self::LeagueOfLegends,
        }
    }
}
