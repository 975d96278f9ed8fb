// Persistent state
pub mod config_store;
