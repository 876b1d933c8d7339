//! Week resolution and projection selection.
//!
//! Both functions are pure: the caller supplies today's date, and the stats
//! map comes from [`crate::espn::types::PlayerInfo::into_free_agent`].

use chrono::NaiveDate;

use crate::cli::types::Week;
use crate::espn::types::RawPlayerStats;


/// Scoring period ESPN uses for the season aggregate.
pub const SEASON_PERIOD: u16 = 0;

/// Week and season projected points for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectionResult {
    pub week_projection: Option<f64>,
    pub season_projection: Option<f64>,
}

/// Week number for `today` relative to `season_start`.
///
/// Anything before kickoff is week 1; after that one week per 7 days,
/// capped at `max_week`.
pub fn resolve_current_week(today: NaiveDate, season_start: NaiveDate, max_week: Week) -> Week {
    let days_since_start = today.signed_duration_since(season_start).num_days();
    if days_since_start < 0 {
        return Week::new(1);
    }

    let cap = i64::from(max_week.as_u16().max(1));
    let week = (days_since_start / 7 + 1).min(cap);
    Week::new(week as u16)
}

/// Pick the week-specific and season-average projections out of `stats`.
///
/// The week value falls back to week 1 when `week` has nothing, unless
/// `week` already is 1. The season value never falls back.
pub fn extract_projections(stats: &RawPlayerStats, week: Week) -> ProjectionResult {
    if stats.is_empty() {
        return ProjectionResult::default();
    }

    let projected_for = |period: u16| stats.get(&period).and_then(|s| s.projected_points);

    let week_projection = projected_for(week.as_u16()).or_else(|| {
        if week.as_u16() != 1 {
            projected_for(1)
        } else {
            None
        }
    });

    let season_projection = stats
        .get(&SEASON_PERIOD)
        .and_then(|s| s.projected_avg_points);

    ProjectionResult {
        week_projection,
        season_projection,
    }
}
