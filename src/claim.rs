//! Construction of the "OK-halted" RISC Zero receipt claim digest.
//!
//! This is the digest that a Groth16 seal cryptographically attests to: it
//! binds together the guest program identity (the image ID), the fact that
//! execution halted normally with no committed input and no assumptions,
//! and the journal the guest committed.

use crate::constants::{
    LEN_SUFFIX_CLAIM, LEN_SUFFIX_OUTPUT, SYSTEM_STATE_ZERO_DIGEST, TAG_OUTPUT, TAG_RECEIPT_CLAIM,
};
use crate::hash::{sha256, tag, tagged_struct, Sha256Digest};

/// System-level exit code. Only the `Halted` path is constructed by this
/// crate; `Paused` and `SystemSplit` exist only to document the full exit
/// code space referenced by the digest layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum SystemExitCode {
    /// Normal termination.
    Halted = 0,
    /// Execution paused for a later continuation.
    Paused = 1,
    /// Host-initiated split between provable segments.
    SystemSplit = 2,
}

/// Computes the SHA-256 digest of a claim [`Output`]:
/// `SHA256(tag("risc0.Output") || journal_digest || assumptions_digest || 0x02 0x00)`.
fn output_digest(journal_digest: &Sha256Digest, assumptions_digest: &Sha256Digest) -> Sha256Digest {
    tagged_struct(
        tag(TAG_OUTPUT),
        &[*journal_digest, *assumptions_digest],
        LEN_SUFFIX_OUTPUT,
    )
}

/// Computes the digest of the standard OK/Halted receipt claim for a given
/// image ID and journal digest.
///
/// This is a pure function: the only inputs are `image_id` and
/// `journal_digest`; every other field of the underlying `ReceiptClaim` is a
/// fixed constant (zero input, zero assumptions, `Halted` exit with user
/// code 0, the fixed halted post-state digest).
pub fn calculate_claim_digest(image_id: &Sha256Digest, journal_digest: &Sha256Digest) -> Sha256Digest {
    let assumptions_digest = [0u8; 32];
    let output = output_digest(journal_digest, &assumptions_digest);

    let input = [0u8; 32];
    let exit_system_word = (SystemExitCode::Halted as u32) << 24;
    let exit_user_word: u32 = 0;

    // The claim digest packs two extra 4-byte exit-code words after the four
    // 32-byte children, ahead of the length suffix; tagged_struct's `down`
    // only models 32-byte children, so the exit words are appended by hand.
    let tag_digest = tag(TAG_RECEIPT_CLAIM);
    let mut buf = Vec::with_capacity(32 * 5 + 4 + 4 + 2);
    buf.extend_from_slice(&tag_digest);
    buf.extend_from_slice(&input);
    buf.extend_from_slice(image_id);
    buf.extend_from_slice(&SYSTEM_STATE_ZERO_DIGEST);
    buf.extend_from_slice(&output);
    buf.extend_from_slice(&exit_system_word.to_be_bytes());
    buf.extend_from_slice(&exit_user_word.to_be_bytes());
    buf.extend_from_slice(&LEN_SUFFIX_CLAIM);
    sha256(&buf)
}
