// Data models
pub mod guild;
pub mod quote;
