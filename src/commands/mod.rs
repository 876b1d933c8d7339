//! Command implementations

pub mod export_free_agents;
