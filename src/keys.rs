use core::fmt;

use bls12_381::{G1Projective, Scalar};
use ff::Field;
use group::Group;
use log::{debug, error};
use rand_core::{CryptoRng, OsRng, RngCore};
use sha2::{Digest, Sha512};

use crate::encoding::{point_from_bytes, point_to_bytes, scalar_from_bytes, scalar_to_bytes};
use crate::{VRFError, VRFKeypair, VRFPrikey, VRFPubkey, POINT_LENGTH, SCALAR_LENGTH};

/// Generate a key pair from the operating system's CSPRNG.
pub fn generate_key_pair() -> Result<VRFKeypair, VRFError> {
    VRFKeypair::random(OsRng)
}

impl VRFKeypair {
    /// Build a new pair of VRF keys
    pub fn new(seed: [u8; 32]) -> Self {
        let mut hasher = Sha512::new();
        hasher.update(seed);
        let mut output = [0u8; 64];
        output.copy_from_slice(&hasher.finalize());
        // 64 bytes reduced mod r keep the secret's bias negligible
        let sk = VRFPrikey {
            scalar_x: Scalar::from_bytes_wide(&output),
        };
        Self::from_secret(sk)
    }

    /// Build a new pair of VRF keys from rng
    pub fn random(mut rng: impl RngCore + CryptoRng) -> Result<Self, VRFError> {
        let mut seed = [0u8; 32];
        rng.try_fill_bytes(&mut seed).map_err(|e| {
            error!("key generation aborted, rng failed: {e}");
            VRFError::Entropy
        })?;
        Ok(Self::new(seed))
    }

    pub fn from_secret(private_key: VRFPrikey) -> Self {
        let public_key = VRFPubkey::from(&private_key);
        debug!("derived VRF public key {public_key}");
        VRFKeypair {
            public_key,
            private_key,
        }
    }
}

impl From<&VRFPrikey> for VRFPubkey {
    fn from(sk: &VRFPrikey) -> Self {
        VRFPubkey {
            point_y: G1Projective::generator() * sk.scalar_x,
        }
    }
}

impl VRFPrikey {
    /// Convert the private key to big-endian bytes.
    pub fn to_bytes(&self) -> [u8; SCALAR_LENGTH] {
        scalar_to_bytes(&self.scalar_x)
    }

    /// Convert big-endian bytes to a private key. Zero is not a valid secret.
    pub fn from_bytes(bytes: &[u8; SCALAR_LENGTH]) -> Result<Self, VRFError> {
        let scalar_x = scalar_from_bytes(bytes)?;
        if bool::from(scalar_x.is_zero()) {
            return Err(VRFError::InvalidScalar);
        }
        Ok(Self { scalar_x })
    }
}

impl fmt::Debug for VRFPrikey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VRFPrikey(<redacted>)")
    }
}

impl VRFPubkey {
    pub fn to_bytes(&self) -> [u8; POINT_LENGTH] {
        point_to_bytes(&self.point_y)
    }

    /// Decode and validate a public key. The identity is rejected since it
    /// can only come from a zero secret.
    pub fn from_bytes(bytes: &[u8; POINT_LENGTH]) -> Result<Self, VRFError> {
        let point = point_from_bytes(bytes).map_err(|_| VRFError::InvalidPublicKey)?;
        let point_y = G1Projective::from(point);
        if bool::from(point_y.is_identity()) {
            return Err(VRFError::InvalidPublicKey);
        }
        Ok(VRFPubkey { point_y })
    }
}
