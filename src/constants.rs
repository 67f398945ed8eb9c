//! Fixed, integrity-critical constants for the RISC Zero / Groth16 / BN254
//! verification protocol. Every value here must match the external prover
//! bit-for-bit; do not "simplify" or re-derive any of them at runtime.

/// BN254 field modulus used as the public-input range bound.
///
/// This is the constant the upstream verifier checks public inputs against
/// before scalar multiplication. Preserved exactly from the source protocol.
pub const Q_BYTES: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d, 0x3c, 0x20, 0x8c, 0x16, 0xd8, 0x7c, 0xfd, 0x47,
];

/// Fixed digest representing the zkVM's halted system state.
///
/// `a3acc27117418996340b84e5a90f3ef4c49d22c79e44aad822ec9c313e1eb8e2`
pub const SYSTEM_STATE_ZERO_DIGEST: [u8; 32] = [
    0xa3, 0xac, 0xc2, 0x71, 0x17, 0x41, 0x89, 0x96, 0x34, 0x0b, 0x84, 0xe5, 0xa9, 0x0f, 0x3e, 0xf4,
    0xc4, 0x9d, 0x22, 0xc7, 0x9e, 0x44, 0xaa, 0xd8, 0x22, 0xec, 0x9c, 0x31, 0x3e, 0x1e, 0xb8, 0xe2,
];

/// Domain-separation tag for the receipt claim digest.
pub const TAG_RECEIPT_CLAIM: &str = "risc0.ReceiptClaim";

/// Domain-separation tag for the claim output digest.
pub const TAG_OUTPUT: &str = "risc0.Output";

/// Domain-separation tag for the Groth16 verifier-parameter selector.
pub const TAG_GROTH16_VERIFIER_PARAMETERS: &str = "risc0.Groth16ReceiptVerifierParameters";

/// Two-byte length suffix used when hashing an `Output` struct (2 fields).
///
/// Deliberately a literal constant rather than derived from a field count at
/// call time: the two-byte markers are part of the external wire protocol,
/// not a runtime computation of "how many children did I pass".
pub const LEN_SUFFIX_OUTPUT: [u8; 2] = [0x02, 0x00];

/// Two-byte length suffix used when hashing the verifier-parameter selector
/// preimage (3 fields: control root, BN254 control id, vk digest).
pub const LEN_SUFFIX_SELECTOR: [u8; 2] = [0x03, 0x00];

/// Two-byte length suffix used when hashing a `ReceiptClaim` (4 fields).
pub const LEN_SUFFIX_CLAIM: [u8; 2] = [0x04, 0x00];

/// Length in bytes of a serialized seal: 4-byte selector + 256-byte Groth16 proof.
pub const SEAL_LEN: usize = 260;

/// Length in bytes of the Groth16 proof body within a seal (A || B || C).
pub const PROOF_BODY_LEN: usize = 256;
