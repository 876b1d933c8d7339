//! `X-Fantasy-Filter` header payload for the free-agent pool query.
//!
//! ESPN reads player-pool filters from a JSON header rather than the query
//! string. The free-agent view needs a status filter, a result limit, and a
//! sort so that the most-owned players come first when the limit truncates.

use crate::Result;
use reqwest::header::HeaderValue;
use serde::Serialize;

/// Player pool statuses that count as available to add.
pub const FREE_AGENT_STATUSES: [&str; 2] = ["FREEAGENT", "WAIVERS"];

/// Wrapper for ESPN-style filter values.
///
/// ESPN API expects filter values to be wrapped in objects with a "value" field.
/// For example: `{"filterStatus": {"value": ["FREEAGENT"]}}`
#[derive(Debug, Serialize)]
pub struct Val<T> {
    pub value: T,
}

/// Sort directive, e.g. `{"sortPriority": 1, "sortAsc": false}`.
#[derive(Debug, Serialize)]
pub struct Sort {
    #[serde(rename = "sortPriority")]
    pub sort_priority: u8,
    #[serde(rename = "sortAsc")]
    pub sort_asc: bool,
}

/// Filter parameters for the league player pool.
#[derive(Debug, Serialize)]
pub struct PlayersFilter {
    #[serde(rename = "filterStatus")]
    pub filter_status: Val<Vec<String>>,

    pub limit: u32,

    #[serde(rename = "sortPercOwned", skip_serializing_if = "Option::is_none")]
    pub sort_perc_owned: Option<Sort>,
}

/// Root object of the `X-Fantasy-Filter` header.
#[derive(Debug, Serialize)]
pub struct FantasyFilter {
    pub players: PlayersFilter,
}

/// General-purpose helper: any Serialize → JSON → HeaderValue
pub trait IntoHeaderValue {
    fn to_header_value(&self) -> Result<HeaderValue>;
}

impl<T> IntoHeaderValue for T
where
    T: Serialize,
{
    fn to_header_value(&self) -> Result<HeaderValue> {
        let s = serde_json::to_string(self)?;
        Ok(HeaderValue::from_str(&s)?)
    }
}

/// Free agents and waiver players, most-owned first, at most `limit` of them.
pub fn build_free_agent_filter(limit: u32) -> FantasyFilter {
    FantasyFilter {
        players: PlayersFilter {
            filter_status: Val {
                value: FREE_AGENT_STATUSES.iter().map(|s| s.to_string()).collect(),
            },
            limit,
            sort_perc_owned: Some(Sort {
                sort_priority: 1,
                sort_asc: false,
            }),
        },
    }
}
