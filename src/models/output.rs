//! Output models used for JSON serialization.
//!
//! The week projection key embeds the week number (`week_3_projection`) while
//! the season projection key is fixed, so [`OutputRecord`] carries hand-written
//! serde impls instead of derives.

use serde::{
    de::{self, Deserializer},
    ser::{SerializeMap, Serializer},
    Deserialize, Serialize,
};
use std::collections::BTreeMap;

use crate::cli::types::{PlayerId, Week};
use crate::espn::compute::ProjectionResult;
use crate::espn::types::FreeAgent;


pub const SEASON_PROJECTION_KEY: &str = "season_projection";

/// `week_{N}_projection`
pub fn week_projection_key(week: Week) -> String {
    format!("week_{}_projection", week.as_u16())
}

fn parse_week_projection_key(key: &str) -> Option<Week> {
    key.strip_prefix("week_")?
        .strip_suffix("_projection")?
        .parse()
        .ok()
        .map(Week::new)
}

#[derive(Debug, Serialize, Deserialize)]
struct SeasonProjection {
    #[serde(default)]
    projected_avg_points: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WeekProjection {
    #[serde(default)]
    projected_points: Option<f64>,
}

/// One exported player.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    pub player_id: PlayerId,
    pub player_name: String,
    pub season_projection: Option<f64>,
    pub week_projection: Option<f64>,
    pub week_number: Week,
}

impl OutputRecord {
    pub fn new(player: &FreeAgent, projection: ProjectionResult, week: Week) -> Self {
        Self {
            player_id: player.id,
            player_name: player.name.clone(),
            season_projection: projection.season_projection,
            week_projection: projection.week_projection,
            week_number: week,
        }
    }
}

impl Serialize for OutputRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("playerId", &self.player_id)?;
        map.serialize_entry("playerName", &self.player_name)?;
        map.serialize_entry(
            SEASON_PROJECTION_KEY,
            &SeasonProjection {
                projected_avg_points: self.season_projection,
            },
        )?;
        map.serialize_entry(
            &week_projection_key(self.week_number),
            &WeekProjection {
                projected_points: self.week_projection,
            },
        )?;
        map.end()
    }
}

#[derive(Deserialize)]
struct RawOutputRecord {
    #[serde(rename = "playerId")]
    player_id: PlayerId,
    #[serde(rename = "playerName")]
    player_name: String,
    season_projection: SeasonProjection,
    #[serde(flatten)]
    weekly: BTreeMap<String, WeekProjection>,
}

impl<'de> Deserialize<'de> for OutputRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawOutputRecord::deserialize(deserializer)?;

        let mut weekly = raw
            .weekly
            .into_iter()
            .filter_map(|(key, proj)| parse_week_projection_key(&key).map(|w| (w, proj)));

        let (week_number, week) = weekly
            .next()
            .ok_or_else(|| <D::Error as de::Error>::missing_field("week_{N}_projection"))?;
        if weekly.next().is_some() {
            return Err(<D::Error as de::Error>::custom(
                "more than one week_{N}_projection field",
            ));
        }

        Ok(OutputRecord {
            player_id: raw.player_id,
            player_name: raw.player_name,
            season_projection: raw.season_projection.projected_avg_points,
            week_projection: week.projected_points,
            week_number,
        })
    }
}

/// Counts reported after a successful export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub week: Week,
    pub total_players: usize,
    pub with_week_projection: usize,
    pub with_season_projection: usize,
}

impl ExportSummary {
    pub fn from_records(records: &[OutputRecord], week: Week) -> Self {
        Self {
            week,
            total_players: records.len(),
            with_week_projection: records
                .iter()
                .filter(|r| r.week_projection.is_some())
                .count(),
            with_season_projection: records
                .iter()
                .filter(|r| r.season_projection.is_some())
                .count(),
        }
    }
}
