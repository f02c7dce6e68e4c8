mod admin;
mod token;

pub use admin::*;
pub use token::*;
