//! Run configuration: league, season, calendar and output settings.
//!
//! Values are layered, highest priority first: command-line flags,
//! environment variables, an optional JSON config file, built-in defaults.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{
    cli::types::{LeagueId, Season, Week},
    core::{default_config_path, try_read_to_string},
    EspnError, Result, LEAGUE_ID_ENV_VAR, SEASON_ENV_VAR,
};


pub const DEFAULT_OUTPUT_FILE: &str = "player_data.json";
pub const DEFAULT_FETCH_LIMIT: u32 = 2000;

/// Fully resolved settings for one export run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub league_id: LeagueId,
    pub season: Season,
    /// First day of week 1.
    pub season_start: NaiveDate,
    pub max_week: Week,
    pub output_path: PathBuf,
    /// Upper bound on players requested from ESPN.
    pub fetch_limit: u32,
}

/// One source of partial settings. Unset fields defer to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub league_id: Option<LeagueId>,
    pub season: Option<Season>,
    pub season_start: Option<NaiveDate>,
    pub max_week: Option<Week>,
    pub output: Option<PathBuf>,
    pub limit: Option<u32>,
}

impl ConfigLayer {
    /// Fill unset fields from `lower`.
    pub fn or(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            league_id: self.league_id.or(lower.league_id),
            season: self.season.or(lower.season),
            season_start: self.season_start.or(lower.season_start),
            max_week: self.max_week.or(lower.max_week),
            output: self.output.or(lower.output),
            limit: self.limit.or(lower.limit),
        }
    }

    /// Read `ESPN_FFL_LEAGUE_ID` / `ESPN_FFL_SEASON` through `lookup`.
    ///
    /// Blank values are treated as unset.
    pub fn from_env_with<F>(lookup: F) -> Result<ConfigLayer>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(ConfigLayer {
            league_id: read(LEAGUE_ID_ENV_VAR).map(|v| v.parse()).transpose()?,
            season: read(SEASON_ENV_VAR).map(|v| v.parse()).transpose()?,
            ..ConfigLayer::default()
        })
    }

    pub fn from_env() -> Result<ConfigLayer> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Parse a JSON config file. A missing file is an error here; callers
    /// decide whether the file is optional.
    pub fn from_file(path: &Path) -> Result<ConfigLayer> {
        let text = try_read_to_string(path).ok_or_else(|| {
            EspnError::config(format!("cannot read config file {}", path.display()))
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl ExportConfig {
    /// Resolve settings from CLI flags, the environment and a config file.
    ///
    /// `config_path` names an explicit file that must exist; otherwise the
    /// per-user default file is used only when present.
    pub fn resolve(cli: ConfigLayer, config_path: Option<&Path>) -> Result<ExportConfig> {
        let file = match config_path {
            Some(path) => ConfigLayer::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => {
                    debug!(path = %path.display(), "Loading config file");
                    ConfigLayer::from_file(&path)?
                }
                _ => ConfigLayer::default(),
            },
        };

        Self::from_layer(cli.or(ConfigLayer::from_env()?).or(file))
    }

    /// Apply defaults and validate a merged layer.
    pub fn from_layer(layer: ConfigLayer) -> Result<ExportConfig> {
        let league_id = layer.league_id.unwrap_or_default();
        if league_id.as_u32() == 0 {
            return Err(EspnError::config("league id must be non-zero"));
        }

        let season = layer.season.unwrap_or_default();
        let season_start = match layer.season_start {
            Some(date) => date,
            None => season.kickoff_date().ok_or_else(|| {
                EspnError::config(format!("cannot derive season start for {}", season))
            })?,
        };

        let max_week = layer.max_week.unwrap_or(Week::MAX);
        if max_week.as_u16() == 0 {
            return Err(EspnError::config("max week must be at least 1"));
        }

        let fetch_limit = layer.limit.unwrap_or(DEFAULT_FETCH_LIMIT);
        if fetch_limit == 0 {
            return Err(EspnError::config("fetch limit must be at least 1"));
        }

        let output_path = layer
            .output
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

        Ok(ExportConfig {
            league_id,
            season,
            season_start,
            max_week,
            output_path,
            fetch_limit,
        })
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            league_id: LeagueId::default(),
            season: Season::default(),
            season_start: Season::default().kickoff_date().unwrap_or_default(),
            max_week: Week::MAX,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            fetch_limit: DEFAULT_FETCH_LIMIT,
        }
    }
}
