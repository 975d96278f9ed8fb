// Bot features
pub mod access;
pub mod channels;
pub mod guild_events;
pub mod quotes;
pub mod relay;
