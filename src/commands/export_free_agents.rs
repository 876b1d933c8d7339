//! Free-agent projection export.
//!
//! Resolves the current week once, pulls the league's free-agent pool,
//! extracts week and season projections for every player and writes the
//! records to a JSON file in the order ESPN returned them.
//!
//! # Usage
//!
//! The entry point is [`handle_export_free_agents`], which takes any
//! [`FreeAgentSource`] so tests can supply players without the network.

use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::{debug, error, info, warn};

use crate::{
    cli::types::Week,
    config::ExportConfig,
    core::write_json_pretty,
    espn::{
        compute::{extract_projections, resolve_current_week},
        http::FreeAgentSource,
        types::FreeAgent,
    },
    models::{ExportSummary, OutputRecord},
    Result,
};

const PROGRESS_EVERY: usize = 100;

/// Fetch the pool, treating any failure as an empty pool.
pub async fn fetch_all_free_agents<S>(source: &S, week: Week) -> Vec<FreeAgent>
where
    S: FreeAgentSource,
{
    info!("Fetching all free agent players...");
    match source.fetch_free_agents(week).await {
        Ok(players) => {
            info!(count = players.len(), "Total free agent players found");
            players
        }
        Err(e) => {
            error!(error = %e, "An error occurred while fetching free agents");
            Vec::new()
        }
    }
}

/// One output record per player, same order as `players`.
pub fn build_output_records(players: &[FreeAgent], week: Week) -> Vec<OutputRecord> {
    let total = players.len();
    players
        .par_iter()
        .enumerate()
        .map(|(i, player)| {
            if i % PROGRESS_EVERY == 0 {
                debug!("Processing player {}/{}...", i + 1, total);
            }
            OutputRecord::new(player, extract_projections(&player.stats, week), week)
        })
        .collect()
}

/// Run one export.
///
/// Returns `Ok(None)` when no players were fetched; nothing is written in
/// that case. A failed write is logged and returned as an error.
pub async fn handle_export_free_agents<S>(
    source: &S,
    config: &ExportConfig,
    today: NaiveDate,
) -> Result<Option<ExportSummary>>
where
    S: FreeAgentSource,
{
    info!(
        league_id = %config.league_id,
        season = %config.season,
        "ESPN Fantasy Football free agent export"
    );

    let week = resolve_current_week(today, config.season_start, config.max_week);
    info!(
        week = week.as_u16(),
        %today,
        season_start = %config.season_start,
        "Resolved current week"
    );

    let players = fetch_all_free_agents(source, week).await;
    if players.is_empty() {
        warn!("No players found. Exiting.");
        return Ok(None);
    }

    info!("Processing projections for week {}...", week);
    let records = build_output_records(&players, week);

    let path = &config.output_path;
    info!("Saving {} players to {}...", records.len(), path.display());
    if let Err(e) = write_json_pretty(path, &records) {
        error!(path = %path.display(), error = %e, "Error saving to file");
        return Err(e);
    }
    info!("Successfully saved player data to {}", path.display());

    let summary = ExportSummary::from_records(&records, week);
    info!(
        total = summary.total_players,
        with_week_projection = summary.with_week_projection,
        with_season_projection = summary.with_season_projection,
        week = summary.week.as_u16(),
        "Data summary"
    );

    Ok(Some(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::types::PlayerId,
        espn::types::{RawPlayerStats, WeekStats},
        EspnError,
    };
    use std::sync::Mutex;
    use tempfile::TempDir;

    struct FixedSource {
        players: Vec<FreeAgent>,
        requested: Mutex<Vec<Week>>,
    }

    impl FreeAgentSource for FixedSource {
        async fn fetch_free_agents(&self, week: Week) -> Result<Vec<FreeAgent>> {
            self.requested.lock().unwrap().push(week);
            Ok(self.players.clone())
        }
    }

    struct FailingSource;

    impl FreeAgentSource for FailingSource {
        async fn fetch_free_agents(&self, _week: Week) -> Result<Vec<FreeAgent>> {
            let bad_cookie = reqwest::header::HeaderValue::from_str("bad\nswid").unwrap_err();
            Err(EspnError::from(bad_cookie))
        }
    }

    fn player(id: u64, week_points: Option<(u16, f64)>, season_avg: Option<f64>) -> FreeAgent {
        let mut stats = RawPlayerStats::new();
        if let Some(avg) = season_avg {
            stats.entry(0).or_insert_with(WeekStats::default).projected_avg_points = Some(avg);
        }
        if let Some((w, pts)) = week_points {
            stats.entry(w).or_insert_with(WeekStats::default).projected_points = Some(pts);
        }
        FreeAgent {
            id: PlayerId::new(id),
            name: format!("Player {}", id),
            stats,
        }
    }

    fn config_in(dir: &TempDir) -> ExportConfig {
        ExportConfig {
            output_path: dir.path().join("player_data.json"),
            ..ExportConfig::default()
        }
    }

    #[test]
    fn test_build_output_records_preserves_order() {
        let players: Vec<FreeAgent> = (0..1000u64)
            .rev()
            .map(|id| player(id, Some((2, id as f64)), None))
            .collect();

        let records = build_output_records(&players, Week::new(2));
        assert_eq!(records.len(), players.len());
        for (rec, p) in records.iter().zip(&players) {
            assert_eq!(rec.player_id, p.id);
            assert_eq!(rec.week_projection, Some(p.id.as_u64() as f64));
            assert_eq!(rec.week_number, Week::new(2));
        }
    }

    #[test]
    fn test_build_output_records_empty() {
        assert!(build_output_records(&[], Week::new(1)).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_free_agents_swallows_errors() {
        let players = fetch_all_free_agents(&FailingSource, Week::new(1)).await;
        assert!(players.is_empty());
    }

    #[tokio::test]
    async fn test_export_writes_file() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let source = FixedSource {
            players: vec![
                player(1, Some((1, 9.0)), Some(12.5)),
                player(2, None, Some(3.0)),
                player(3, None, None),
            ],
            requested: Mutex::new(Vec::new()),
        };
        // 2025-09-18 is two weeks after kickoff
        let today = NaiveDate::from_ymd_opt(2025, 9, 18).unwrap();

        let summary = handle_export_free_agents(&source, &config, today)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(summary.week, Week::new(3));
        assert_eq!(summary.total_players, 3);
        assert_eq!(summary.with_week_projection, 1);
        assert_eq!(summary.with_season_projection, 2);
        assert_eq!(*source.requested.lock().unwrap(), vec![Week::new(3)]);

        let text = std::fs::read_to_string(&config.output_path).unwrap();
        let records: Vec<OutputRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].week_projection, Some(9.0));
        assert_eq!(records[0].season_projection, Some(12.5));
        assert_eq!(records[1].week_projection, None);
        assert!(records.iter().all(|r| r.week_number == Week::new(3)));
        assert!(text.contains("\"week_3_projection\""));
    }

    #[tokio::test]
    async fn test_export_fetch_failure_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();

        let result = handle_export_free_agents(&FailingSource, &config, today)
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(!config.output_path.exists());
    }

    #[tokio::test]
    async fn test_export_write_failure_is_error() {
        let dir = TempDir::new().unwrap();
        let config = ExportConfig {
            output_path: dir.path().to_path_buf(),
            ..ExportConfig::default()
        };
        let source = FixedSource {
            players: vec![player(1, None, None)],
            requested: Mutex::new(Vec::new()),
        };
        let today = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();

        let result = handle_export_free_agents(&source, &config, today).await;
        assert!(matches!(result, Err(EspnError::Io(_))));
    }
}
