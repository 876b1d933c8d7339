//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use types::{time::parse_date, LeagueId, Season, Week};

use crate::config::ConfigLayer;

/// Export projected points for every free agent in an ESPN league.
///
/// Every flag is optional; unset values come from `ESPN_FFL_LEAGUE_ID` /
/// `ESPN_FFL_SEASON`, then the config file, then built-in defaults.
#[derive(Debug, Parser)]
#[clap(name = "espn-ffl-fa", about = "ESPN Fantasy Football free agent projection export")]
pub struct ESPN {
    /// League ID (or set `ESPN_FFL_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Season year (e.g. 2025).
    #[clap(long, short)]
    pub season: Option<Season>,

    /// First day of week 1 (YYYY-MM-DD). Defaults to the Thursday after Labor Day.
    #[clap(long, value_parser = parse_date)]
    pub season_start: Option<NaiveDate>,

    /// Last week of the season; later dates are clamped to it.
    #[clap(long)]
    pub max_week: Option<Week>,

    /// Output JSON file.
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Maximum number of players to request from ESPN.
    #[clap(long)]
    pub limit: Option<u32>,

    /// JSON config file (default: <config dir>/espn-ffl/fa-export.json when present).
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[clap(long, short)]
    pub verbose: bool,
}

impl ESPN {
    /// Flags as the highest-priority config layer.
    pub fn config_layer(&self) -> ConfigLayer {
        ConfigLayer {
            league_id: self.league_id,
            season: self.season,
            season_start: self.season_start,
            max_week: self.max_week,
            output: self.output.clone(),
            limit: self.limit,
        }
    }
}
