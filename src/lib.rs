//! Verification core for a zkVM-backed anonymous-vote ballot checker.
//!
//! Given a [`request::VoteRequest`] carrying a hex-encoded Groth16 seal, the
//! image ID of the guest program that is supposed to have produced it, and
//! the journal it committed, [`check_vote`] decides whether the seal is a
//! valid proof of that claim and, if so, decodes the journal's embedded
//! vote fields into a [`journal::VoteResponse`].
//!
//! The pipeline is strictly sequential and side-effect free: hex-decode,
//! hash the journal, build the receipt-claim digest, decode the seal,
//! resolve verifier parameters by selector, derive and range-check the
//! Groth16 public inputs, run the pairing check, then decode the journal
//! ABI. Any step failing ends the request with a [`error::VerifyError`];
//! nothing is retried and nothing partially commits.
//!
//! Everything outside this pipeline — HTTP routing, authentication, proof
//! generation, vote persistence — is a deliberate non-goal of this crate.

pub mod claim;
pub mod constants;
pub mod curve;
pub mod error;
pub mod groth16;
pub mod hash;
pub mod journal;
pub mod registry;
pub mod request;
pub mod seal;

use tracing::{instrument, warn};

use crate::error::{HexField, VerifyError};
use crate::hash::sha256;
use crate::journal::VoteResponse;
use crate::request::VoteRequest;

/// Decodes a hex-encoded request field, attributing failures to `field`.
fn decode_hex(encoded: &str, field: HexField) -> Result<Vec<u8>, VerifyError> {
    hex::decode(encoded).map_err(|source| VerifyError::InvalidHex { field, source })
}

/// Runs the full verification pipeline for a single request.
///
/// `Ingress -> Decoded -> ClaimBuilt -> ProofDecoded -> ParamsResolved ->
/// Verified -> JournalDecoded -> Done`. Every step consumes the previous
/// step's output; dropping the call at any point (e.g. a cancelled async
/// task upstream) is safe, since no state is committed until `Ok` is
/// returned.
#[instrument(skip(req), fields(poll_id = req.poll_id))]
pub fn check_vote(req: &VoteRequest) -> Result<VoteResponse, VerifyError> {
    // Ingress -> Decoded: hex-decode every field the core reads.
    let image_id_bytes = decode_hex(&req.image_id, HexField::ImageId)?;
    let image_id: [u8; 32] = image_id_bytes
        .clone()
        .try_into()
        .map_err(|_| VerifyError::InvalidImageIdLength { len: image_id_bytes.len() })?;
    let journal_bytes = decode_hex(&req.journal, HexField::Journal)?;
    let seal_bytes = decode_hex(&req.seal, HexField::Seal)?;
    let journal_abi_bytes = decode_hex(&req.journal_abi, HexField::JournalAbi)?;

    // Decoded -> ClaimBuilt.
    let journal_digest = sha256(&journal_bytes);
    let claim_digest = claim::calculate_claim_digest(&image_id, &journal_digest);

    // ClaimBuilt -> ProofDecoded.
    let decoded_seal = seal::decode_seal(&seal_bytes)?;

    // ProofDecoded -> ParamsResolved.
    let params = registry::lookup_by_selector(&decoded_seal.selector).ok_or_else(|| {
        warn!(selector = %hex::encode(decoded_seal.selector), "no verifier parameters for selector");
        VerifyError::UnknownSelector(decoded_seal.selector)
    })?;

    // ParamsResolved -> Verified.
    let public_inputs = groth16::public_inputs(&params, &claim_digest)?;
    groth16::verify_proof(
        &groth16::VERIFICATION_KEY,
        decoded_seal.a,
        decoded_seal.b,
        decoded_seal.c,
        &public_inputs,
    )?;

    // Verified -> JournalDecoded -> Done.
    journal::decode_journal(&journal_abi_bytes)
}
