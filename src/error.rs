use thiserror::Error;

/// Input-validation and entropy failures.
///
/// A proof that fails verification is not an error: `verify` reports it as
/// `None`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VRFError {
    #[error("invalid length: expected {expected} got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("scalar encoding is not canonical")]
    InvalidScalar,

    #[error("invalid compressed G1 point")]
    InvalidPoint,

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("invalid hex string")]
    InvalidHex,

    #[error("public key does not match secret key")]
    KeyMismatch,

    #[error("nonce must be non-zero")]
    ZeroNonce,

    #[error("randomness source failed")]
    Entropy,
}

impl From<hex::FromHexError> for VRFError {
    fn from(_: hex::FromHexError) -> Self {
        VRFError::InvalidHex
    }
}
