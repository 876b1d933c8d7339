//! Type-safe wrappers for ESPN Fantasy Football identifiers and calendar values.

pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

pub use ids::{LeagueId, PlayerId};
pub use time::{Season, Week};
