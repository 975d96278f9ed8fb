// External platform clients
pub mod discord;
