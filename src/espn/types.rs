//! Serde models for ESPN's `kona_player_info` free-agent payload and the
//! per-week stats structure the projection logic reads.

use crate::cli::types::{PlayerId, Season};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;


/// ESPN `statSourceId` for real game results.
pub const STAT_SOURCE_ACTUAL: u8 = 0;
/// ESPN `statSourceId` for projections.
pub const STAT_SOURCE_PROJECTED: u8 = 1;

/// ESPN `statSplitTypeId` for whole-season lines.
pub const STAT_SPLIT_SEASON: u8 = 0;
/// ESPN `statSplitTypeId` for single-week lines.
pub const STAT_SPLIT_WEEK: u8 = 1;

/// Accept any JSON value and keep it only if it is a number.
fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.as_f64()))
}

/// Points are reported to two decimals.
fn round_points(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Top-level envelope for `view=kona_player_info`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FreeAgentsEnvelope {
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
}

/// One entry of the league player pool.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerEntry {
    pub player: PlayerInfo,
}

/// Player data from ESPN API
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerInfo {
    pub id: PlayerId,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub stats: Vec<StatSplit>,
}

/// A single stat line: one season/period/source combination.
#[derive(Debug, Clone, Deserialize)]
pub struct StatSplit {
    #[serde(rename = "seasonId", default)]
    pub season_id: Option<Season>,
    #[serde(rename = "scoringPeriodId", default)]
    pub scoring_period_id: Option<u16>,
    #[serde(rename = "statSourceId", default)]
    pub stat_source_id: Option<u8>,
    #[serde(rename = "statSplitTypeId", default)]
    pub stat_split_type_id: Option<u8>,
    #[serde(rename = "appliedTotal", default, deserialize_with = "de_lenient_f64")]
    pub applied_total: Option<f64>,
    #[serde(rename = "appliedAverage", default, deserialize_with = "de_lenient_f64")]
    pub applied_average: Option<f64>,
}

/// Fantasy points for one scoring period, split by source.
///
/// Under key 0 (season aggregate) the `*_avg_points` fields carry the
/// per-game averages; under weekly keys only the totals are meaningful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekStats {
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default)]
    pub avg_points: Option<f64>,
    #[serde(default)]
    pub projected_points: Option<f64>,
    #[serde(default)]
    pub projected_avg_points: Option<f64>,
}

/// Week index (0 = season aggregate) to stats for that period.
pub type RawPlayerStats = BTreeMap<u16, WeekStats>;

/// A free agent reduced to what the exporter needs.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeAgent {
    pub id: PlayerId,
    pub name: String,
    pub stats: RawPlayerStats,
}

impl PlayerInfo {
    /// Fold ESPN stat splits for `season` into a [`RawPlayerStats`] map.
    ///
    /// Only season (type 0) and weekly (type 1) splits of `season` that carry
    /// a scoring period and a known source are kept. Point values are rounded
    /// to two decimals.
    pub fn into_free_agent(self, season: Season) -> FreeAgent {
        let mut stats = RawPlayerStats::new();

        for split in &self.stats {
            if split.season_id != Some(season) {
                continue;
            }
            if !matches!(
                split.stat_split_type_id,
                Some(STAT_SPLIT_SEASON | STAT_SPLIT_WEEK)
            ) {
                continue;
            }
            let Some(period) = split.scoring_period_id else {
                continue;
            };

            let total = split.applied_total.map(round_points);
            let average = split.applied_average.map(round_points);

            match split.stat_source_id {
                Some(STAT_SOURCE_ACTUAL) => {
                    let entry = stats.entry(period).or_default();
                    entry.points = total.or(entry.points);
                    entry.avg_points = average.or(entry.avg_points);
                }
                Some(STAT_SOURCE_PROJECTED) => {
                    let entry = stats.entry(period).or_default();
                    entry.projected_points = total.or(entry.projected_points);
                    entry.projected_avg_points = average.or(entry.projected_avg_points);
                }
                _ => {}
            }
        }

        FreeAgent {
            id: self.id,
            name: self.full_name.unwrap_or_default(),
            stats,
        }
    }
}

impl FreeAgentsEnvelope {
    /// Convert every pool entry, preserving ESPN's ordering.
    pub fn into_free_agents(self, season: Season) -> Vec<FreeAgent> {
        self.players
            .into_iter()
            .map(|entry| entry.player.into_free_agent(season))
            .collect()
    }
}
