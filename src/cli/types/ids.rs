//! Numeric ESPN identifiers used in request paths and export records.

use crate::error::{EspnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// League whose free-agent pool is exported. Defaults to the league the
/// export was first written for; override with `--league-id`,
/// `ESPN_FFL_LEAGUE_ID` or the config file.
///
/// # Examples
///
/// ```rust
/// use espn_ffl_fa::LeagueId;
///
/// let league_id = LeagueId::new(1947635809);
/// assert_eq!(league_id.as_u32(), 1947635809);
/// assert_eq!(league_id.to_string(), "1947635809");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(pub u32);

impl LeagueId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Default for LeagueId {
    fn default() -> Self {
        Self(1947635809)
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = EspnError;

    /// Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// ESPN player id from `players[].player.id`; written out as `playerId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
