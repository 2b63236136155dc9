use bls12_381::hash_to_curve::{ExpandMsgXmd, HashToCurve};
use bls12_381::{G1Projective, Scalar};
use tiny_keccak::{Hasher, Keccak};

use crate::encoding::{scalar_from_digest, scalar_to_bytes, POINT_LENGTH};

/// Domain-separation tag for hashing VRF inputs onto G1.
pub const HASH_TO_CURVE_DST: &[u8] = b"VRF_BLS12381_HASH_TO_CURVE";

/// One element of the `H_p` transcript.
#[derive(Debug, Clone, Copy)]
pub enum HashInput<'a> {
    /// Absorbed as-is. Strings enter as their UTF-8 bytes.
    Bytes(&'a [u8]),
    /// Absorbed as 32 big-endian bytes.
    Scalar(Scalar),
}

impl<'a> From<&'a [u8]> for HashInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        HashInput::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for HashInput<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        HashInput::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for HashInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        HashInput::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for HashInput<'a> {
    fn from(s: &'a str) -> Self {
        HashInput::Bytes(s.as_bytes())
    }
}

impl From<&Scalar> for HashInput<'_> {
    fn from(scalar: &Scalar) -> Self {
        HashInput::Scalar(*scalar)
    }
}

/// Keccak-256 over the concatenation of `parts`.
pub fn keccak256(parts: &[&[u8]]) -> [u8; 32] {
    let mut output = [0u8; 32];
    let mut hasher = Keccak::v256();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize(&mut output);
    output
}

/// `H_p`: Keccak-256 of the ordered inputs, read big-endian and reduced mod `r`.
pub fn hash_to_scalar<'a, I>(inputs: I) -> Scalar
where
    I: IntoIterator<Item = HashInput<'a>>,
{
    let mut hasher = Keccak::v256();
    for input in inputs {
        match input {
            HashInput::Bytes(bytes) => hasher.update(bytes),
            HashInput::Scalar(scalar) => hasher.update(&scalar_to_bytes(&scalar)),
        }
    }
    let mut digest = [0u8; 32];
    hasher.finalize(&mut digest);
    scalar_from_digest(&digest)
}

/// `H_G`: RFC 9380 `hash_to_curve` onto G1 (expand_message_xmd with SHA-256,
/// simplified SWU with the 11-isogeny, cofactor cleared).
pub fn hash_to_curve(alpha: &[u8]) -> G1Projective {
    hash_to_curve_with_dst(alpha, HASH_TO_CURVE_DST)
}

pub(crate) fn hash_to_curve_with_dst(msg: &[u8], dst: &[u8]) -> G1Projective {
    <G1Projective as HashToCurve<ExpandMsgXmd<sha2::Sha256>>>::hash_to_curve(msg, dst)
}

/// The VRF output for an already-checked pre-output point.
pub(crate) fn output_hash(preout: &[u8; POINT_LENGTH], alpha: &[u8]) -> [u8; 32] {
    keccak256(&[preout.as_slice(), alpha])
}
