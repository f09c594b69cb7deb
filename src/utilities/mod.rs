pub mod api_messages;
pub mod config;
pub mod helpers;
pub mod logger;
