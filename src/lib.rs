pub mod api;
pub mod config;
pub mod content;
pub mod session;
