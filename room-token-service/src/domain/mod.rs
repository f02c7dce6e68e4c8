pub mod access_claims;
pub mod claim_summary;
pub mod credential_state;
pub mod issued_tokens;
pub mod participant_identity;
pub mod permission_set;
pub mod room_name;
pub mod token_errors;
pub mod token_request;
pub mod token_response;

pub use access_claims::*;
pub use claim_summary::*;
pub use credential_state::*;
pub use issued_tokens::*;
pub use participant_identity::*;
pub use permission_set::*;
pub use room_name::*;
pub use token_errors::*;
pub use token_request::*;
pub use token_response::*;
