pub(crate) mod decode_token;
pub(crate) mod generate_token;
pub(crate) mod health;
pub(crate) mod issued_tokens;
pub(crate) mod test_token;

// re-export items from sub-modules
pub use decode_token::*;
pub use generate_token::*;
pub use health::*;
pub use issued_tokens::*;
pub use test_token::*;
