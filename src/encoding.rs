//! Byte-level conventions shared by hashing, keys and proofs.
//!
//! Scalars cross the API boundary as 32-byte big-endian integers, points as
//! the 48-byte compressed G1 encoding of the curve library.
use core::fmt;
use core::str::FromStr;

use bls12_381::{G1Affine, G1Projective, Scalar};
use ff::PrimeField;
use group::Curve;

use crate::{VRFError, VRFProof, VRFPubkey};

pub const SCALAR_LENGTH: usize = 32;
pub const POINT_LENGTH: usize = 48;
/// `c || s || preout`
pub const PROOF_LENGTH: usize = 2 * SCALAR_LENGTH + POINT_LENGTH;

/// Copy a slice into a fixed-size array, rejecting any other length.
pub fn to_array<const N: usize>(bytes: &[u8]) -> Result<[u8; N], VRFError> {
    bytes.try_into().map_err(|_| VRFError::InvalidLength {
        expected: N,
        got: bytes.len(),
    })
}

/// Big-endian, zero-padded encoding of a scalar.
pub fn scalar_to_bytes(scalar: &Scalar) -> [u8; SCALAR_LENGTH] {
    let mut bytes = scalar.to_repr();
    bytes.reverse();
    bytes
}

/// Decode a big-endian scalar. Values `>= r` are rejected, not reduced.
pub fn scalar_from_bytes(bytes: &[u8; SCALAR_LENGTH]) -> Result<Scalar, VRFError> {
    let mut repr = *bytes;
    repr.reverse();
    Option::<Scalar>::from(Scalar::from_repr(repr)).ok_or(VRFError::InvalidScalar)
}

/// Interpret a 32-byte big-endian digest as an integer and reduce it mod `r`.
pub fn scalar_from_digest(digest: &[u8; 32]) -> Scalar {
    let mut wide = [0u8; 64];
    for (dst, src) in wide.iter_mut().zip(digest.iter().rev()) {
        *dst = *src;
    }
    Scalar::from_bytes_wide(&wide)
}

pub fn point_to_bytes(point: &G1Projective) -> [u8; POINT_LENGTH] {
    point.to_affine().to_compressed()
}

/// Decode a compressed point. The curve library checks the flag bits, that
/// the point is on the curve and that it lies in the prime-order subgroup.
pub fn point_from_bytes(bytes: &[u8; POINT_LENGTH]) -> Result<G1Affine, VRFError> {
    Option::<G1Affine>::from(G1Affine::from_compressed(bytes)).ok_or(VRFError::InvalidPoint)
}

impl VRFProof {
    pub fn to_bytes(&self) -> [u8; PROOF_LENGTH] {
        let mut bytes = [0u8; PROOF_LENGTH];
        bytes[..SCALAR_LENGTH].copy_from_slice(&scalar_to_bytes(&self.challenge_c));
        bytes[SCALAR_LENGTH..2 * SCALAR_LENGTH].copy_from_slice(&scalar_to_bytes(&self.scalar_s));
        bytes[2 * SCALAR_LENGTH..].copy_from_slice(&self.preout);
        bytes
    }

    /// Parse the wire form. The scalars must be canonical; `preout` is kept
    /// as bytes and only decoded during verification.
    pub fn from_bytes(bytes: &[u8; PROOF_LENGTH]) -> Result<Self, VRFError> {
        let challenge_c = scalar_from_bytes(&to_array(&bytes[..SCALAR_LENGTH])?)?;
        let scalar_s = scalar_from_bytes(&to_array(&bytes[SCALAR_LENGTH..2 * SCALAR_LENGTH])?)?;
        let preout = to_array(&bytes[2 * SCALAR_LENGTH..])?;
        Ok(VRFProof {
            challenge_c,
            scalar_s,
            preout,
        })
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, VRFError> {
        Self::from_bytes(&to_array(bytes)?)
    }
}

impl fmt::Display for VRFProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}

impl FromStr for VRFProof {
    type Err = VRFError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(&hex::decode(s.trim())?)
    }
}

impl From<VRFProof> for String {
    fn from(proof: VRFProof) -> Self {
        proof.to_string()
    }
}

impl TryFrom<String> for VRFProof {
    type Error = VRFError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for VRFPubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}

impl FromStr for VRFPubkey {
    type Err = VRFError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(&to_array(&hex::decode(s.trim())?)?)
    }
}

impl From<VRFPubkey> for String {
    fn from(pk: VRFPubkey) -> Self {
        pk.to_string()
    }
}

impl TryFrom<String> for VRFPubkey {
    type Error = VRFError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
