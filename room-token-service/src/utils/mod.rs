pub mod admin_auth;
pub mod config;

pub use admin_auth::*;
pub use config::Config;
