//! Wire decoding of a 260-byte RISC Zero Groth16 seal.
//!
//! Layout: `selector(4) || A(64) || B(128) || C(64)`, all big-endian. `A`
//! and `C` are G1 points; `B` is G2 with imaginary-part-first coordinate
//! ordering within each field.

use ark_bn254::{G1Affine, G2Affine};

use crate::constants::SEAL_LEN;
use crate::curve::{g1_from_bytes, g2_from_bytes};
use crate::error::{PointComponent, VerifyError};

/// A decoded seal: the 4-byte selector and the three Groth16 proof points.
#[derive(Debug, Clone, Copy)]
pub struct DecodedSeal {
    /// Identifies which verifier parameters this seal was produced under.
    pub selector: [u8; 4],
    /// Proof element `A` (G1).
    pub a: G1Affine,
    /// Proof element `B` (G2).
    pub b: G2Affine,
    /// Proof element `C` (G1).
    pub c: G1Affine,
}

/// Decodes a raw seal byte slice.
pub fn decode_seal(seal: &[u8]) -> Result<DecodedSeal, VerifyError> {
    if seal.len() != SEAL_LEN {
        return Err(VerifyError::InvalidSealLength {
            expected: SEAL_LEN,
            actual: seal.len(),
        });
    }

    let mut selector = [0u8; 4];
    selector.copy_from_slice(&seal[0..4]);

    let a_bytes: [u8; 64] = seal[4..68].try_into().expect("slice is exactly 64 bytes");
    let b_bytes: [u8; 128] = seal[68..196].try_into().expect("slice is exactly 128 bytes");
    let c_bytes: [u8; 64] = seal[196..260].try_into().expect("slice is exactly 64 bytes");

    let a = g1_from_bytes(&a_bytes).map_err(|reason| VerifyError::InvalidPointEncoding {
        component: PointComponent::A,
        reason,
    })?;
    let b = g2_from_bytes(&b_bytes).map_err(|reason| VerifyError::InvalidPointEncoding {
        component: PointComponent::B,
        reason,
    })?;
    let c = g1_from_bytes(&c_bytes).map_err(|reason| VerifyError::InvalidPointEncoding {
        component: PointComponent::C,
        reason,
    })?;

    Ok(DecodedSeal { selector, a, b, c })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::g1_to_bytes;

    fn sample_bytes() -> Vec<u8> {
        let mut bytes = vec![0u8; SEAL_LEN];
        bytes[0..4].copy_from_slice(&[0x50, 0xbd, 0x17, 0x69]);

        let g1 = G1Affine::generator_bytes();
        bytes[4..68].copy_from_slice(&g1);
        bytes[68..196].copy_from_slice(&g2_bytes());
        bytes[196..260].copy_from_slice(&g1);
        bytes
    }

    // Test-only helpers kept local to avoid widening the public curve API
    // just to support fixture construction.
    trait GeneratorBytes {
        fn generator_bytes() -> [u8; 64];
    }
    impl GeneratorBytes for G1Affine {
        fn generator_bytes() -> [u8; 64] {
            use ark_ec::AffineRepr;
            g1_to_bytes(&G1Affine::generator())
        }
    }
    fn g2_bytes() -> [u8; 128] {
        use ark_ec::AffineRepr;
        use ark_ff::BigInteger;
        use ark_ff::PrimeField;
        let generator = G2Affine::generator();
        let (x, y) = generator.xy().unwrap();
        let mut bytes = [0u8; 128];
        bytes[0..32].copy_from_slice(&x.c1.into_bigint().to_bytes_be());
        bytes[32..64].copy_from_slice(&x.c0.into_bigint().to_bytes_be());
        bytes[64..96].copy_from_slice(&y.c1.into_bigint().to_bytes_be());
        bytes[96..128].copy_from_slice(&y.c0.into_bigint().to_bytes_be());
        bytes
    }

    #[test]
    fn decodes_selector_and_points() {
        let bytes = sample_bytes();
        let decoded = decode_seal(&bytes).expect("well-formed seal decodes");
        assert_eq!(decoded.selector, [0x50, 0xbd, 0x17, 0x69]);
    }

    #[test]
    fn rejects_wrong_length() {
        let short = vec![0u8; SEAL_LEN - 1];
        let err = decode_seal(&short).unwrap_err();
        assert!(matches!(err, VerifyError::InvalidSealLength { .. }));
    }

    #[test]
    fn rejects_invalid_point() {
        let mut bytes = sample_bytes();
        // Corrupt A's y-coordinate so it is no longer on the curve.
        bytes[67] ^= 0xff;
        let err = decode_seal(&bytes).unwrap_err();
        assert!(matches!(
            err,
            VerifyError::InvalidPointEncoding {
                component: PointComponent::A,
                ..
            }
        ));
    }
}
