//! A verifiable random function over the G1 group of BLS12-381.
//!
//! The proof is a Chaum-Pedersen proof of discrete-log equality between
//! `public = G * x` and `preout = H_G(alpha) * x`, made non-interactive with a
//! Keccak-256 Fiat-Shamir challenge. The VRF output is
//! `keccak256(preout || alpha)` and is only released by a successful verify.
use bls12_381::{G1Projective, Scalar};
use ff::PrimeField;

mod encoding;
mod error;
mod hash;
mod keys;
mod prove;
mod verify;

pub use encoding::{
    point_from_bytes, point_to_bytes, scalar_from_bytes, scalar_from_digest, scalar_to_bytes,
    to_array, POINT_LENGTH, PROOF_LENGTH, SCALAR_LENGTH,
};
pub use error::VRFError;
pub use hash::{hash_to_curve, hash_to_scalar, keccak256, HashInput, HASH_TO_CURVE_DST};
pub use keys::generate_key_pair;
pub use prove::{prove, MAX_RETRIES};
pub use verify::verify;

/// Re-export of the curve types used across the public API.
pub use bls12_381;

/// Order `r` of the BLS12-381 scalar field, as exported by the curve library.
pub const CURVE_ORDER: &str = <Scalar as PrimeField>::MODULUS;

/// The pseudorandom value released by a successful verification.
pub type VRFOutput = [u8; 32];

#[derive(Debug, Clone, Copy)]
pub struct VRFKeypair {
    pub public_key: VRFPubkey,
    pub private_key: VRFPrikey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct VRFPubkey {
    pub point_y: G1Projective,
}

/// Secret scalar `x`. Never printed: `Debug` is redacted.
#[derive(Clone, Copy)]
pub struct VRFPrikey {
    pub(crate) scalar_x: Scalar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct VRFProof {
    pub challenge_c: Scalar,
    pub scalar_s: Scalar,
    /// Compressed encoding of `H_G(alpha) * x`.
    pub preout: [u8; POINT_LENGTH],
}
