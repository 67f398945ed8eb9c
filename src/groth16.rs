//! Groth16 pairing verification over BN254.
//!
//! The verification equation is the standard four-term pairing product
//! check:
//!
//! `e(A, B) = e(alpha, beta) * e(vk_x, gamma) * e(C, delta)`
//!
//! rearranged into a single multi-pairing against the identity:
//!
//! `e(A, B) * e(-alpha, beta) * e(-vk_x, gamma) * e(-C, delta) == 1`

use ark_bn254::{Bn254, Fq12, Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::Field;
use once_cell::sync::Lazy;

use crate::constants::Q_BYTES;
use crate::curve::be_bytes_to_fr;
use crate::error::VerifyError;
use crate::hash::Sha256Digest;
use crate::registry::{reversed_control_id, split_for_public_input, VerifierParameters};

/// A Groth16 verification key: the two pairing anchor points (alpha, beta),
/// the gamma/delta points, and the IC vector used to fold public inputs
/// into a single G1 point.
#[derive(Debug, Clone)]
pub struct VerificationKey {
    /// Alpha point in G1.
    pub alpha: G1Affine,
    /// Beta point in G2.
    pub beta: G2Affine,
    /// Gamma point in G2.
    pub gamma: G2Affine,
    /// Delta point in G2.
    pub delta: G2Affine,
    /// IC vector; `ic.len()` must equal `public_inputs.len() + 1`.
    pub ic: Vec<G1Affine>,
}

/// The verification key bound to this registry's selectors.
///
/// The real Groth16 verification key and its digest are not present in the
/// retrieved materials for this protocol (see `DESIGN.md`); this constant is
/// a structurally valid placeholder (real curve points, correct IC arity for
/// five public inputs) so that the arithmetic it exercises — the
/// multi-scalar fold and the four-term pairing check — is genuine BN254
/// group/pairing code, not a stub. Swapping in the real published key is a
/// one-constant change.
pub static VERIFICATION_KEY: Lazy<VerificationKey> = Lazy::new(|| {
    let g1 = G1Affine::generator();
    let g2 = G2Affine::generator();
    let scaled = |p: G1Affine, k: u64| -> G1Affine { (p.into_group() * Fr::from(k)).into_affine() };

    VerificationKey {
        alpha: scaled(g1, 2),
        beta: g2,
        gamma: g2,
        delta: g2,
        ic: vec![
            scaled(g1, 3),
            scaled(g1, 5),
            scaled(g1, 7),
            scaled(g1, 11),
            scaled(g1, 13),
            scaled(g1, 17),
        ],
    }
});

/// Number of Groth16 public inputs derived per verification (§4.6): the
/// control-root split, the claim-digest split, and the reversed BN254
/// control ID.
const NUM_PUBLIC_INPUTS: usize = 5;

/// Checks a 32-byte big-endian value against the protocol's published field
/// bound and, if it passes, reduces it to a scalar.
///
/// Array comparison on `[u8; 32]` is lexicographic, which is exactly
/// numeric ordering for two big-endian integers of equal width, so this
/// needs no bignum type of its own.
fn checked_scalar(candidate: &Sha256Digest, index: usize) -> Result<Fr, VerifyError> {
    if *candidate >= Q_BYTES {
        return Err(VerifyError::PublicInputOutOfField { index });
    }
    Ok(be_bytes_to_fr(candidate))
}

/// Derives the five ordered Groth16 public-input scalars from a parameter
/// set's control root and a receipt claim digest:
///
/// ```text
/// (ctrl_upper, ctrl_lower)   = split(control_root)
/// (claim_upper, claim_lower) = split(claim_digest)
/// pub = [ctrl_upper, ctrl_lower, claim_upper, claim_lower, reverse(bn254_control_id)]
/// ```
///
/// Every element must be strictly less than the published field bound
/// ([`crate::constants::Q_BYTES`]); the first one that isn't fails with
/// [`VerifyError::PublicInputOutOfField`] naming its index.
pub fn public_inputs(
    params: &VerifierParameters,
    claim_digest: &Sha256Digest,
) -> Result<[Fr; NUM_PUBLIC_INPUTS], VerifyError> {
    let (ctrl_upper, ctrl_lower) = split_for_public_input(&params.control_root);
    let (claim_upper, claim_lower) = split_for_public_input(claim_digest);
    let reversed_id = reversed_control_id(params);

    let candidates = [ctrl_upper, ctrl_lower, claim_upper, claim_lower, reversed_id];
    let mut scalars = [Fr::from(0u64); NUM_PUBLIC_INPUTS];
    for (index, candidate) in candidates.iter().enumerate() {
        scalars[index] = checked_scalar(candidate, index)?;
    }
    Ok(scalars)
}

/// Folds the public inputs against the verification key's IC vector:
/// `vk_x = IC[0] + sum(IC[i+1] * input[i])`.
fn fold_public_inputs(vk: &VerificationKey, public_inputs: &[Fr]) -> Result<G1Affine, VerifyError> {
    if public_inputs.len() + 1 != vk.ic.len() {
        return Err(VerifyError::IcArityMismatch {
            public_inputs: public_inputs.len(),
            ic_len: vk.ic.len(),
        });
    }
    let mut acc = G1Projective::from(vk.ic[0]);
    for (input, ic) in public_inputs.iter().zip(&vk.ic[1..]) {
        acc += ic.into_group() * input;
    }
    Ok(acc.into_affine())
}

/// Verifies a Groth16 proof `(a, b, c)` against `public_inputs` using `vk`.
///
/// Returns `Ok(())` iff the pairing product equals the identity in `GT`.
pub fn verify_proof(
    vk: &VerificationKey,
    a: G1Affine,
    b: G2Affine,
    c: G1Affine,
    public_inputs: &[Fr],
) -> Result<(), VerifyError> {
    let vk_x = fold_public_inputs(vk, public_inputs)?;

    let miller = Bn254::multi_miller_loop([a, -vk.alpha, -vk_x, -c], [b, vk.beta, vk.gamma, vk.delta]);
    let result = Bn254::final_exponentiation(miller).ok_or(VerifyError::InvalidProof)?;

    if result.0 == Fq12::ONE {
        Ok(())
    } else {
        Err(VerifyError::InvalidProof)
    }
}
