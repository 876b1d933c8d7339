//! HTTP utilities for ESPN API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};

pub const SWID_ENV_VAR: &str = "ESPN_SWID";
pub const S2_ENV_VAR: &str = "ESPN_S2";

/// Private-league cookie values. Turned into headers per request, so a bad
/// value fails the fetch rather than client construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EspnCookies {
    pub swid: Option<String>,
    pub s2: Option<String>,
}

impl EspnCookies {
    pub fn new(swid: Option<&str>, s2: Option<&str>) -> Self {
        Self {
            swid: swid.map(str::to_string),
            s2: s2.map(str::to_string),
        }
    }

    /// Read `ESPN_SWID` and `ESPN_S2`; either may be unset (public leagues).
    pub fn from_env() -> Self {
        Self {
            swid: std::env::var(SWID_ENV_VAR).ok(),
            s2: std::env::var(S2_ENV_VAR).ok(),
        }
    }

    pub fn header_map(&self) -> Result<Option<HeaderMap>> {
        cookie_header_map(self.swid.as_deref(), self.s2.as_deref())
    }
}

/// Cookie headers for a private league, or `None` unless both values are set.
pub fn cookie_header_map(swid: Option<&str>, s2: Option<&str>) -> Result<Option<HeaderMap>> {
    match (swid, s2) {
        (Some(swid), Some(s2)) if !swid.is_empty() && !s2.is_empty() => {
            let mut h = HeaderMap::new();
            h.insert(ACCEPT, HeaderValue::from_static("application/json"));
            let cookie = format!("SWID={}; espn_s2={}", swid, s2);
            h.insert(COOKIE, HeaderValue::from_str(&cookie)?);
            Ok(Some(h))
        }
        _ => Ok(None),
    }
}
