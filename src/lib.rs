//! ESPN Fantasy Football free agent projection export
//!
//! Pulls the free-agent pool of an ESPN league and writes, per player, the
//! projected points for the current week and the season-average projection.
//!
//! ## Pieces
//!
//! - [`espn::compute::resolve_current_week`]: week number from a date and the season start
//! - [`espn::compute::extract_projections`]: week and season projection for one player
//! - [`espn::http::EspnClient`]: the `kona_player_info` free-agent query
//! - [`commands::export_free_agents`]: fetch, extract, write
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::Local;
//! use espn_ffl_fa::{
//!     commands::export_free_agents::handle_export_free_agents, config::ExportConfig,
//!     espn::http::EspnClient,
//! };
//!
//! # async fn example() -> espn_ffl_fa::Result<()> {
//! let config = ExportConfig::default();
//! let client = EspnClient::new(&config)?;
//! handle_export_free_agents(&client, &config, Local::now().date_naive()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export ESPN_FFL_LEAGUE_ID=123456
//! export ESPN_FFL_SEASON=2025
//! # private leagues only
//! export ESPN_SWID='{...}'
//! export ESPN_S2='...'
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod espn;
pub mod models;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Season, Week};
pub use error::{EspnError, Result};
pub use espn::compute::{extract_projections, resolve_current_week, ProjectionResult};
pub use espn::types::{FreeAgent, RawPlayerStats, WeekStats};
pub use models::{ExportSummary, OutputRecord};

pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_FFL_LEAGUE_ID";
pub const SEASON_ENV_VAR: &str = "ESPN_FFL_SEASON";
