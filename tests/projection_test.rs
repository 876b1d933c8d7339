//! Week resolution and projection extraction through the public API

use chrono::{Duration, NaiveDate};
use espn_ffl_fa::{
    extract_projections, resolve_current_week, ProjectionResult, RawPlayerStats, Week, WeekStats,
};

fn kickoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 4).unwrap()
}

fn week_on_day(days: i64) -> Week {
    resolve_current_week(kickoff() + Duration::days(days), kickoff(), Week::MAX)
}

fn stats(entries: &[(u16, Option<f64>, Option<f64>)]) -> RawPlayerStats {
    entries
        .iter()
        .map(|&(period, projected_points, projected_avg_points)| {
            (
                period,
                WeekStats {
                    projected_points,
                    projected_avg_points,
                    ..WeekStats::default()
                },
            )
        })
        .collect()
}

#[test]
fn test_week_resolver_reference_days() {
    assert_eq!(week_on_day(-10), Week::new(1));
    assert_eq!(week_on_day(0), Week::new(1));
    assert_eq!(week_on_day(6), Week::new(1));
    assert_eq!(week_on_day(7), Week::new(2));
    assert_eq!(week_on_day(119), Week::new(18));
    assert_eq!(week_on_day(200), Week::new(18));
}

#[test]
fn test_reference_stats() {
    let s = stats(&[(0, None, Some(12.5)), (1, Some(9.0), None), (3, Some(7.5), None)]);

    assert_eq!(
        extract_projections(&s, Week::new(3)),
        ProjectionResult {
            week_projection: Some(7.5),
            season_projection: Some(12.5),
        }
    );
    assert_eq!(
        extract_projections(&s, Week::new(5)),
        ProjectionResult {
            week_projection: Some(9.0),
            season_projection: Some(12.5),
        }
    );
}

#[test]
fn test_week_one_without_entry() {
    let s = stats(&[(0, None, Some(12.5))]);
    assert_eq!(
        extract_projections(&s, Week::new(1)),
        ProjectionResult {
            week_projection: None,
            season_projection: Some(12.5),
        }
    );
}

#[test]
fn test_empty_stats() {
    let s = RawPlayerStats::new();
    assert_eq!(
        extract_projections(&s, Week::new(4)),
        ProjectionResult::default()
    );
}

#[test]
fn test_resolved_week_feeds_extractor() {
    let s = stats(&[(0, None, Some(10.0)), (1, Some(2.0), None), (6, Some(6.0), None)]);

    // Thursday Oct 9 opens week 6, the day before is still week 5
    let week6 = resolve_current_week(
        NaiveDate::from_ymd_opt(2025, 10, 9).unwrap(),
        kickoff(),
        Week::MAX,
    );
    let week5 = resolve_current_week(
        NaiveDate::from_ymd_opt(2025, 10, 8).unwrap(),
        kickoff(),
        Week::MAX,
    );

    assert_eq!(extract_projections(&s, week6).week_projection, Some(6.0));
    assert_eq!(extract_projections(&s, week5).week_projection, Some(2.0));
}
