//! Error taxonomy for the verification core.
//!
//! Every fallible step returns one of these variants; none of them is
//! retried internally, and none is ever silently downgraded to success.

use thiserror::Error;

/// The curve component a point-encoding failure was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointComponent {
    /// The `A` point of a Groth16 proof (G1).
    A,
    /// The `B` point of a Groth16 proof (G2).
    B,
    /// The `C` point of a Groth16 proof (G1).
    C,
}

impl std::fmt::Display for PointComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PointComponent::A => "A",
            PointComponent::B => "B",
            PointComponent::C => "C",
        };
        f.write_str(label)
    }
}

/// An ingress field that failed to hex-decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexField {
    /// `VoteRequest::image_id`.
    ImageId,
    /// `VoteRequest::journal`.
    Journal,
    /// `VoteRequest::seal`.
    Seal,
    /// `VoteRequest::journal_abi`.
    JournalAbi,
}

impl std::fmt::Display for HexField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HexField::ImageId => "image_id",
            HexField::Journal => "journal",
            HexField::Seal => "seal",
            HexField::JournalAbi => "journal_abi",
        };
        f.write_str(label)
    }
}

/// Every way a vote-checking request can fail.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// An ingress field was not valid lowercase hex.
    #[error("invalid hex in field {field}: {source}")]
    InvalidHex {
        /// Which request field failed to decode.
        field: HexField,
        /// The underlying hex-decoding error.
        #[source]
        source: hex::FromHexError,
    },

    /// The image ID was not exactly 32 bytes once decoded.
    #[error("image_id must be 32 bytes, got {len}")]
    InvalidImageIdLength {
        /// The decoded length, in bytes.
        len: usize,
    },

    /// The seal was not exactly [`crate::constants::SEAL_LEN`] bytes.
    #[error("invalid seal length: expected {expected}, got {actual}")]
    InvalidSealLength {
        /// The required length.
        expected: usize,
        /// The length actually observed.
        actual: usize,
    },

    /// A G1 or G2 point failed to deserialize to a valid curve point.
    #[error("invalid point encoding in proof component {component}: {reason}")]
    InvalidPointEncoding {
        /// Which proof component (A, B, or C) failed to decode.
        component: PointComponent,
        /// Human-readable reason (not on curve, not in subgroup, ...).
        reason: &'static str,
    },

    /// No verifier parameters are registered for the seal's selector.
    #[error("unknown selector: {}", hex::encode(.0))]
    UnknownSelector([u8; 4]),

    /// A public input scalar was not less than the field modulus.
    #[error("public input {index} is out of field range")]
    PublicInputOutOfField {
        /// Index of the offending public input (0..5).
        index: usize,
    },

    /// The number of public inputs plus one did not match the IC vector length.
    #[error("IC arity mismatch: {public_inputs} public inputs, {ic_len} IC entries")]
    IcArityMismatch {
        /// Number of public inputs supplied.
        public_inputs: usize,
        /// Length of the verification key's IC vector.
        ic_len: usize,
    },

    /// The Groth16 pairing product did not equal the identity.
    #[error("invalid proof: pairing check failed")]
    InvalidProof,

    /// The journal-ABI bytes were exhausted before every field was read.
    #[error("truncated journal: ran out of bytes reading {field}")]
    TruncatedJournal {
        /// Name of the field being read when the buffer ran out.
        field: &'static str,
    },
}
