//! ESPN Fantasy API client for the league free-agent pool.

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT},
    Client,
};
use std::future::Future;
use tracing::debug;

use crate::{
    cli::types::{LeagueId, Season, Week},
    config::ExportConfig,
    core::{build_free_agent_filter, EspnCookies, IntoHeaderValue},
    espn::types::{FreeAgent, FreeAgentsEnvelope},
    Result,
};


/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

const FANTASY_FILTER_HEADER: &str = "x-fantasy-filter";
const USER_AGENT: &str = concat!("espn-ffl-fa/", env!("CARGO_PKG_VERSION"));

/// Anything that can hand back the league's free agents for a scoring period.
pub trait FreeAgentSource {
    fn fetch_free_agents(&self, week: Week) -> impl Future<Output = Result<Vec<FreeAgent>>> + Send;
}

/// Reads the free-agent pool for one league and season.
#[derive(Debug, Clone)]
pub struct EspnClient {
    http: Client,
    base_url: String,
    league_id: LeagueId,
    season: Season,
    limit: u32,
    cookies: EspnCookies,
}

impl EspnClient {
    /// Client for the configured league, with cookies from `ESPN_SWID` /
    /// `ESPN_S2` when both are set. Cookie values are only checked when a
    /// request is built.
    pub fn new(config: &ExportConfig) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: FFL_BASE_URL.to_string(),
            league_id: config.league_id,
            season: config.season,
            limit: config.fetch_limit,
            cookies: EspnCookies::from_env(),
        })
    }

    /// Point the client at another host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_cookies(mut self, cookies: EspnCookies) -> Self {
        self.cookies = cookies;
        self
    }

    fn league_url(&self) -> String {
        format!(
            "{}/seasons/{}/segments/0/leagues/{}",
            self.base_url, self.season, self.league_id
        )
    }

    fn request_headers(&self) -> Result<HeaderMap> {
        let mut headers = self.cookies.header_map()?.unwrap_or_default();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(FANTASY_FILTER_HEADER),
            build_free_agent_filter(self.limit).to_header_value()?,
        );
        Ok(headers)
    }

    /// `GET .../leagues/{id}?view=kona_player_info&scoringPeriodId={week}`
    pub async fn get_free_agents(&self, week: Week) -> Result<FreeAgentsEnvelope> {
        let url = self.league_url();
        let params = [
            ("view", "kona_player_info".to_string()),
            ("scoringPeriodId", week.to_string()),
        ];

        debug!(%url, week = week.as_u16(), limit = self.limit, "Requesting free agents");

        let envelope = self
            .http
            .get(&url)
            .headers(self.request_headers()?)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<FreeAgentsEnvelope>()
            .await?;

        Ok(envelope)
    }
}

impl FreeAgentSource for EspnClient {
    async fn fetch_free_agents(&self, week: Week) -> Result<Vec<FreeAgent>> {
        let envelope = self.get_free_agents(week).await?;
        Ok(envelope.into_free_agents(self.season))
    }
}
