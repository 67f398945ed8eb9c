//! BN254 scalar and point decoding.
//!
//! The wire format for every field element in this protocol is 32
//! big-endian bytes. `ark-bn254`/`ark-ff` work natively in little-endian
//! limb order, so every conversion here goes through a single
//! `be_bytes_to_fq`/`be_bytes_to_fr` choke point rather than being
//! re-derived at each call site.

use ark_bn254::{Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_ff::{BigInteger256, PrimeField};

/// Converts 32 big-endian bytes into the little-endian limb order `ark-ff`
/// expects.
fn be_bytes_to_limbs(bytes: &[u8]) -> BigInteger256 {
    debug_assert_eq!(bytes.len(), 32);
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let start = i * 8;
        let chunk: [u8; 8] = bytes[start..start + 8]
            .try_into()
            .expect("32-byte slice always yields four 8-byte chunks");
        *limb = u64::from_be_bytes(chunk);
    }
    limbs.reverse();
    BigInteger256::new(limbs)
}

/// Parses 32 big-endian bytes as a base-field element, rejecting
/// non-canonical encodings (value >= field modulus).
fn be_bytes_to_fq(bytes: &[u8]) -> Option<Fq> {
    Fq::from_bigint(be_bytes_to_limbs(bytes))
}

/// Reduces 32 big-endian bytes modulo the scalar-field order.
///
/// Unlike [`be_bytes_to_fq`] this never fails: public inputs are already
/// range-checked against the protocol's published modulus (see
/// [`crate::constants::Q_BYTES`]) before reaching this function, which
/// operates modulo the (smaller) scalar-field order actually used for
/// curve scalar multiplication.
pub fn be_bytes_to_fr(bytes: &[u8; 32]) -> Fr {
    Fr::from_be_bytes_mod_order(bytes)
}

/// Deserializes a 64-byte big-endian `(x, y)` pair into a G1 point,
/// checking curve membership.
///
/// G1 has cofactor 1 on BN254, so every point on the curve equation is
/// automatically in the prime-order subgroup.
pub fn g1_from_bytes(bytes: &[u8; 64]) -> Result<G1Affine, &'static str> {
    let x = be_bytes_to_fq(&bytes[0..32]).ok_or("x coordinate not a canonical field element")?;
    let y = be_bytes_to_fq(&bytes[32..64]).ok_or("y coordinate not a canonical field element")?;
    let point = G1Affine::new_unchecked(x, y);
    if !point.is_on_curve() {
        return Err("point is not on the BN254 G1 curve");
    }
    Ok(point)
}

/// Deserializes a 128-byte big-endian point into a G2 point.
///
/// The byte layout is `x.c1 || x.c0 || y.c1 || y.c0` (imaginary coefficient
/// first within each coordinate), matching the wire layout of the seal.
/// G2 has a nontrivial cofactor on BN254, so an explicit subgroup check is
/// required in addition to the on-curve check.
pub fn g2_from_bytes(bytes: &[u8; 128]) -> Result<G2Affine, &'static str> {
    let x_c1 = be_bytes_to_fq(&bytes[0..32]).ok_or("x.c1 not a canonical field element")?;
    let x_c0 = be_bytes_to_fq(&bytes[32..64]).ok_or("x.c0 not a canonical field element")?;
    let y_c1 = be_bytes_to_fq(&bytes[64..96]).ok_or("y.c1 not a canonical field element")?;
    let y_c0 = be_bytes_to_fq(&bytes[96..128]).ok_or("y.c0 not a canonical field element")?;

    let x = Fq2::new(x_c0, x_c1);
    let y = Fq2::new(y_c0, y_c1);
    let point = G2Affine::new_unchecked(x, y);
    if !point.is_on_curve() {
        return Err("point is not on the BN254 G2 curve");
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err("point is not in the prime-order G2 subgroup");
    }
    Ok(point)
}

/// Serializes a G1 point back to the 64-byte big-endian `(x, y)` layout.
///
/// Used by build-time/test fixtures that need to round-trip a known point;
/// not on the verification hot path.
pub fn g1_to_bytes(p: &G1Affine) -> [u8; 64] {
    let mut out = [0u8; 64];
    let (x, y) = p.xy().expect("verification key points are never the identity");
    out[0..32].copy_from_slice(&x.into_bigint().to_bytes_be());
    out[32..64].copy_from_slice(&y.into_bigint().to_bytes_be());
    out
}
