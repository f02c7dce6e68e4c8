use thiserror::Error;

/// Failures of `TokenIssuer::issue`. All of them are deterministic; retrying
/// with the same input fails the same way.
#[derive(Debug, Error)]
pub enum IssueError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("ttl of {requested}s is outside the allowed range 1..={max}s")]
    TtlOutOfRange { requested: i64, max: i64 },

    #[error("failed to sign credential: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// A credential handed to `decode_for_display` could not be read.
///
/// Callers treat this as "no usable expiry information".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed credential: {0}")]
    Malformed(String),
}

/// Reasons a conforming verifier rejects a credential.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("malformed credential")]
    Malformed,

    #[error("credential signature does not match")]
    InvalidSignature,

    #[error("credential was issued for an unknown api key")]
    UnknownIssuer,

    #[error("credential is not valid yet")]
    NotYetValid,

    #[error("credential has expired")]
    Expired,
}
