use bls12_381::{G1Projective, Scalar};
use ff::Field;
use group::Group;
use log::{debug, error, trace};
use rand_core::{CryptoRng, OsRng, RngCore};

use crate::encoding::point_to_bytes;
use crate::hash::{hash_to_curve, hash_to_scalar, HashInput};
use crate::{VRFError, VRFKeypair, VRFPrikey, VRFProof, VRFPubkey, POINT_LENGTH};

/// Zero draws tolerated before nonce sampling gives up.
pub const MAX_RETRIES: u32 = 100;

/// Prove `alpha` under an explicit secret and encoded public key.
///
/// `public` must be `G * secret`; a mismatch is reported as
/// [`VRFError::KeyMismatch`] instead of producing a proof that can never
/// verify. Without `r1` a fresh nonce is drawn from the OS CSPRNG. A
/// caller-supplied `r1` of zero is refused with [`VRFError::ZeroNonce`],
/// since `s_1 = c * secret` would then reveal the secret.
pub fn prove(
    secret: &VRFPrikey,
    public: &[u8; POINT_LENGTH],
    alpha: impl AsRef<[u8]>,
    r1: Option<Scalar>,
) -> Result<VRFProof, VRFError> {
    let public_key = VRFPubkey::from_bytes(public)?;
    let keypair = VRFKeypair::from_secret(*secret);
    if keypair.public_key != public_key {
        return Err(VRFError::KeyMismatch);
    }
    match r1 {
        Some(nonce) => keypair.prove_with_nonce(alpha, nonce),
        None => keypair.prove(alpha),
    }
}

/// Sample a uniform non-zero scalar: 64 bytes reduced mod r.
fn random_nonzero_scalar(rng: &mut impl RngCore) -> Result<Scalar, VRFError> {
    for _ in 0..MAX_RETRIES {
        let mut wide = [0u8; 64];
        rng.try_fill_bytes(&mut wide).map_err(|e| {
            error!("nonce generation aborted, rng failed: {e}");
            VRFError::Entropy
        })?;
        let scalar = Scalar::from_bytes_wide(&wide);
        if !bool::from(scalar.is_zero()) {
            return Ok(scalar);
        }
    }
    error!("rng returned zero {MAX_RETRIES} times");
    Err(VRFError::Entropy)
}

impl VRFKeypair {
    /// Prove with a fresh nonce from the operating system's CSPRNG.
    pub fn prove(&self, alpha: impl AsRef<[u8]>) -> Result<VRFProof, VRFError> {
        self.prove_with_rng(alpha, OsRng)
    }

    /// Prove with a fresh nonce drawn from `rng`. Never reuse a nonce across
    /// inputs: two proofs sharing `r1` reveal the secret.
    pub fn prove_with_rng(
        &self,
        alpha: impl AsRef<[u8]>,
        mut rng: impl RngCore + CryptoRng,
    ) -> Result<VRFProof, VRFError> {
        let nonce = random_nonzero_scalar(&mut rng)?;
        self.prove_with_nonce(alpha, nonce)
    }

    /// Construct a proof for `alpha` with the caller's nonce `r1`.
    pub fn prove_with_nonce(
        &self,
        alpha: impl AsRef<[u8]>,
        r1: Scalar,
    ) -> Result<VRFProof, VRFError> {
        let alpha = alpha.as_ref();
        if bool::from(r1.is_zero()) {
            return Err(VRFError::ZeroNonce);
        }

        // h = hash_to_curve(alpha)
        let generator_h = hash_to_curve(alpha);
        trace!("generator h in proving: {:?}", generator_h);

        // preout = x * h
        let preout = point_to_bytes(&(generator_h * self.private_key.scalar_x));

        // R = r1 * G, R_m = r1 * h
        let commitment_g = point_to_bytes(&(G1Projective::generator() * r1));
        let commitment_h = point_to_bytes(&(generator_h * r1));

        // c = H_p(alpha, Y, preout, R, R_m)
        let public = self.public_key.to_bytes();
        let challenge_c = hash_to_scalar([
            HashInput::from(alpha),
            HashInput::from(&public),
            HashInput::from(&preout),
            HashInput::from(&commitment_g),
            HashInput::from(&commitment_h),
        ]);

        // s = r1 + c * x
        let scalar_s = r1 + challenge_c * self.private_key.scalar_x;
        debug!(
            "proved VRF input of {} bytes, preout {}",
            alpha.len(),
            hex::encode(preout)
        );

        Ok(VRFProof {
            challenge_c,
            scalar_s,
            preout,
        })
    }
}
