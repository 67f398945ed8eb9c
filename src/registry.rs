//! The registry of known RISC Zero Groth16 verifier parameters, indexed by
//! both their human-readable version string and their derived 4-byte seal
//! selector.
//!
//! Every entry here must match the upstream `risc0` release it documents
//! bit-for-bit; these are not derived values, they are copied from the
//! published `control_id.rs` constants for each release.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::constants::{LEN_SUFFIX_SELECTOR, TAG_GROTH16_VERIFIER_PARAMETERS};
use crate::hash::{reverse, sha256, tag, tagged_struct, Sha256Digest};

/// A single release's control parameters: the recursion circuit's control
/// root and the BN254-friendly control ID derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifierParameters {
    /// Human-readable release version, e.g. `"1.1"`.
    pub version: &'static str,
    /// Merkle root over the recursion program's control IDs.
    pub control_root: Sha256Digest,
    /// BN254-friendly control ID used as the fifth Groth16 public input.
    pub bn254_control_id: Sha256Digest,
}

fn decode32(hex_str: &str) -> Sha256Digest {
    let bytes = hex::decode(hex_str).expect("embedded verifier-parameter constant must be valid hex");
    bytes
        .try_into()
        .expect("embedded verifier-parameter constant must be exactly 32 bytes")
}

fn build(version: &'static str, control_root_hex: &str, bn254_control_id_hex: &str) -> VerifierParameters {
    VerifierParameters {
        version,
        control_root: decode32(control_root_hex),
        bn254_control_id: decode32(bn254_control_id_hex),
    }
}

/// Computes the 4-byte seal selector for a set of verifier parameters:
///
/// `SHA256(tag("risc0.Groth16ReceiptVerifierParameters") || control_root || bn254_control_id || vk_digest || 0x03 0x00)[0..4]`
///
/// Note the BN254 control ID is hashed here in its natural (non-reversed)
/// byte order; it is only byte-reversed when later embedded as a Groth16
/// public input scalar (see [`crate::groth16::public_inputs`]).
pub fn calculate_selector(params: &VerifierParameters, vk_digest: &Sha256Digest) -> [u8; 4] {
    let digest = tagged_struct(
        tag(TAG_GROTH16_VERIFIER_PARAMETERS),
        &[params.control_root, params.bn254_control_id, *vk_digest],
        LEN_SUFFIX_SELECTOR,
    );
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&digest[0..4]);
    selector
}

/// Splits a claim or control-root digest into the two 128-bit halves used as
/// Groth16 public inputs, each zero-extended to a 32-byte big-endian scalar.
pub fn split_for_public_input(digest: &Sha256Digest) -> ([u8; 32], [u8; 32]) {
    crate::hash::split(digest)
}

/// Byte-reverses a BN254 control ID for use as a public input scalar.
pub fn reversed_control_id(params: &VerifierParameters) -> Sha256Digest {
    reverse(&params.bn254_control_id)
}

struct Registry {
    by_version: HashMap<&'static str, VerifierParameters>,
    by_selector: HashMap<[u8; 4], VerifierParameters>,
}

/// The fixed VK digest identifying which Groth16 verification key this
/// registry's selectors are bound to.
///
/// This value is not available in the retrieved materials; see `DESIGN.md`
/// for the placeholder policy. Selector derivation and lookup are exercised
/// in tests against this placeholder rather than against a real release's
/// published selector.
const VK_DIGEST: Sha256Digest = [0u8; 32];

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    // https://github.com/risc0/risc0/blob/v1.0.5/risc0/circuit/recursion/src/control_id.rs
    let entries = [
        build(
            "1.0",
            "a516a057c9fbf5629106300934d48e0e775d4230e41e503347cad96fcbde7e2e",
            "51b54a62f2aa599aef768744c95de8c7d89bf716e11b1179f05d6cf0bcfeb60e",
        ),
        build(
            "1.1",
            "8b6dcf11d463ac455361b41fb3ed053febb817491bdea00fdb340e45013b852e",
            "4e160df1e119ac0e3d658755a9edf38c8feb307b34bc10b57f4538dbe122a005",
        ),
        build(
            "1.2",
            "8cdad9242664be3112aba377c5425a4df735eb1c6966472b561d2855932c0469",
            "c07a65145c3cb48b6101962ea607a4dd93c753bb26975cb47feb00d3666e4404",
        ),
        build(
            "1.3",
            "6fcbfc564e08874a235c181e75bb53547402b116957f700497bf482e08060a15",
            "c07a65145c3cb48b6101962ea607a4dd93c753bb26975cb47feb00d3666e4404",
        ),
        build(
            "2.0",
            "539032186827b06719244873b17b2d4c122e2d02cfb1994fe958b2523b844576",
            "c07a65145c3cb48b6101962ea607a4dd93c753bb26975cb47feb00d3666e4404",
        ),
        build(
            "2.1",
            "884389273e128b32475b334dec75ee619b77cb33d41c332021fe7e44c746ee60",
            "c07a65145c3cb48b6101962ea607a4dd93c753bb26975cb47feb00d3666e4404",
        ),
        build(
            "2.2",
            "ce52bf56033842021af3cf6db8a50d1b7535c125a34f1a22c6fdcf002c5a1529",
            "c07a65145c3cb48b6101962ea607a4dd93c753bb26975cb47feb00d3666e4404",
        ),
        build(
            "2.3",
            "ce52bf56033842021af3cf6db8a50d1b7535c125a34f1a22c6fdcf002c5a1529",
            "c07a65145c3cb48b6101962ea607a4dd93c753bb26975cb47feb00d3666e4404",
        ),
        build(
            "3.0",
            "a54dc85ac99f851c92d7c96d7318af41dbe7c0194edfcc37eb4d422a998c1f56",
            "c07a65145c3cb48b6101962ea607a4dd93c753bb26975cb47feb00d3666e4404",
        ),
    ];

    let mut by_version = HashMap::with_capacity(entries.len());
    let mut by_selector = HashMap::with_capacity(entries.len());
    for params in entries {
        let selector = calculate_selector(&params, &VK_DIGEST);
        by_version.insert(params.version, params);
        by_selector.insert(selector, params);
    }
    Registry { by_version, by_selector }
});

/// Looks up verifier parameters by release version string (e.g. `"1.1"`).
pub fn lookup_by_version(version: &str) -> Option<VerifierParameters> {
    REGISTRY.by_version.get(version).copied()
}

/// Looks up verifier parameters by the 4-byte selector embedded in a seal.
pub fn lookup_by_selector(selector: &[u8; 4]) -> Option<VerifierParameters> {
    REGISTRY.by_selector.get(selector).copied()
}
