//! ESPN Fantasy API access and projection computation.

pub mod compute;
pub mod http;
pub mod types;
