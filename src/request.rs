//! The ingress datum the orchestrator accepts.
//!
//! `VoteRequest` is constructed by the host (HTTP layer, out of scope here)
//! and consumed exactly once. The core only ever reads `seal`, `journal`,
//! `journal_abi`, and `image_id`; the remaining fields are opaque payload
//! the host attaches for its own bookkeeping and are carried through
//! unread.

use serde::{Deserialize, Serialize};

/// A vote-checking request, as received from the host before verification.
///
/// Every hex field is expected to be lowercase; [`crate::check_vote`]
/// surfaces [`crate::error::VerifyError::InvalidHex`] naming the offending
/// field rather than guessing at a looser encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRequest {
    /// Hex-encoded 260-byte Groth16 seal.
    pub seal: String,
    /// Hex-encoded raw journal bytes (the guest's public output).
    pub journal: String,
    /// Hex-encoded journal-ABI bytes (the structured encoding within the
    /// journal that [`crate::journal::decode_journal`] parses).
    pub journal_abi: String,
    /// Hex-encoded 32-byte image ID of the guest program.
    pub image_id: String,
    /// Host-supplied nullifier string, not read by the core.
    pub nullifier: String,
    /// Host-supplied voter age, not read by the core.
    pub age: u32,
    /// Host-supplied student flag, not read by the core.
    pub is_student: bool,
    /// Host-supplied poll identifier, not read by the core.
    pub poll_id: u64,
    /// Host-supplied first option's vote tally, not read by the core.
    pub option_a: u64,
    /// Host-supplied second option's vote tally, not read by the core.
    pub option_b: u64,
}
