pub mod token_issuer;
pub mod token_verifier;

pub use token_issuer::*;
pub use token_verifier::*;
