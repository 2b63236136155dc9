use bls12_381::G1Projective;
use group::Group;
use log::debug;
use subtle::ConstantTimeEq;

use crate::encoding::{point_from_bytes, point_to_bytes};
use crate::hash::{hash_to_curve, hash_to_scalar, output_hash, HashInput};
use crate::{VRFError, VRFOutput, VRFProof, VRFPubkey, POINT_LENGTH};

/// Verify `proof` for `alpha` under an encoded public key.
///
/// A malformed public key is an error. A proof that does not check out,
/// including one whose `preout` does not decode, yields `Ok(None)`.
pub fn verify(
    public: &[u8; POINT_LENGTH],
    alpha: impl AsRef<[u8]>,
    proof: &VRFProof,
) -> Result<Option<VRFOutput>, VRFError> {
    let public_key = VRFPubkey::from_bytes(public)?;
    Ok(proof.verify(&public_key, alpha))
}

impl VRFProof {
    /// Check the proof and return the VRF output for `alpha`, or `None` if
    /// the proof is rejected. Verification never mutates the proof.
    pub fn verify(&self, public_key: &VRFPubkey, alpha: impl AsRef<[u8]>) -> Option<VRFOutput> {
        let alpha = alpha.as_ref();

        let preout = match point_from_bytes(&self.preout) {
            Ok(point) => G1Projective::from(point),
            Err(e) => {
                debug!("rejecting VRF proof: preout: {e}");
                return None;
            }
        };

        // h = hash_to_curve(alpha)
        let generator_h = hash_to_curve(alpha);

        // R' = s * G - c * Y
        let commitment_g = G1Projective::generator() * self.scalar_s
            - public_key.point_y * self.challenge_c;

        // R_m' = s * h - c * preout
        let commitment_h = generator_h * self.scalar_s - preout * self.challenge_c;

        // c' = H_p(alpha, Y, preout, R', R_m')
        let challenge_c = hash_to_scalar([
            HashInput::from(alpha),
            HashInput::from(&public_key.to_bytes()),
            HashInput::from(&self.preout),
            HashInput::from(&point_to_bytes(&commitment_g)),
            HashInput::from(&point_to_bytes(&commitment_h)),
        ]);

        if !bool::from(self.challenge_c.ct_eq(&challenge_c)) {
            debug!("rejecting VRF proof: challenge mismatch");
            return None;
        }
        Some(output_hash(&self.preout, alpha))
    }
}
