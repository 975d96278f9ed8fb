// Slash commands
pub mod channels;
pub mod checks;
pub mod help;
pub mod id;
pub mod quote;
