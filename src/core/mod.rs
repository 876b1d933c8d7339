//! Core utilities shared by the exporter
//!
//! - `files`: config file lookup and JSON output
//! - `filters`: ESPN `X-Fantasy-Filter` header payloads
//! - `http`: private-league cookie headers

pub mod files;
pub mod filters;
pub mod http;

// Re-export commonly used items for convenience
pub use files::{default_config_path, try_read_to_string, write_json_pretty};
pub use filters::{build_free_agent_filter, FantasyFilter, IntoHeaderValue, Val};
pub use http::{cookie_header_map, EspnCookies};
