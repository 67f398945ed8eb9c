//! Decoding of the journal-ABI payload committed to by the guest program.
//!
//! The layout is a small bincode-compatible, length-prefixed little-endian
//! record: a UTF-8 nullifier string, an age, a student flag, and a poll ID.
//! Trailing bytes beyond the last field are allowed and ignored.

use serde::Serialize;

use crate::error::VerifyError;

/// The structured vote fields recovered from a journal-ABI payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteResponse {
    /// Opaque per-voter nullifier, asserted unique by the host.
    pub nullifier: String,
    /// Voter age as committed by the guest program.
    pub age: u32,
    /// Whether the voter identified as a student.
    pub is_student: bool,
    /// Identifier of the poll being voted on.
    pub poll_id: u64,
}

/// A forward-only cursor over a byte slice that turns running off the end
/// into [`VerifyError::TruncatedJournal`] rather than a panic.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, len: usize, field: &'static str) -> Result<&'a [u8], VerifyError> {
        let end = self
            .pos
            .checked_add(len)
            .ok_or(VerifyError::TruncatedJournal { field })?;
        let slice = self
            .bytes
            .get(self.pos..end)
            .ok_or(VerifyError::TruncatedJournal { field })?;
        self.pos = end;
        Ok(slice)
    }

    fn take_u64(&mut self, field: &'static str) -> Result<u64, VerifyError> {
        let bytes: [u8; 8] = self.take(8, field)?.try_into().expect("take(8) yields 8 bytes");
        Ok(u64::from_le_bytes(bytes))
    }

    fn take_u32(&mut self, field: &'static str) -> Result<u32, VerifyError> {
        let bytes: [u8; 4] = self.take(4, field)?.try_into().expect("take(4) yields 4 bytes");
        Ok(u32::from_le_bytes(bytes))
    }

    fn take_bool(&mut self, field: &'static str) -> Result<bool, VerifyError> {
        let byte = self.take(1, field)?[0];
        Ok(byte != 0)
    }
}

/// Decodes the journal-ABI byte string into a [`VoteResponse`].
///
/// Reads, in order: an 8-byte little-endian nullifier length, that many
/// bytes as a UTF-8 string, a 4-byte little-endian age, a 1-byte boolean
/// (nonzero is true), and an 8-byte little-endian poll ID. Bytes beyond the
/// poll ID are ignored, never inspected.
///
/// The closed error taxonomy has no dedicated "malformed encoding" kind, so
/// a nullifier payload that is fully present but not valid UTF-8 is also
/// reported as [`VerifyError::TruncatedJournal`], deliberately, with the
/// distinct field name `"nullifier_utf8"` so callers can tell a short read
/// (`field: "nullifier"`) apart from a present-but-invalid one.
pub fn decode_journal(bytes: &[u8]) -> Result<VoteResponse, VerifyError> {
    let mut cursor = Cursor::new(bytes);

    let nullifier_len = cursor.take_u64("nullifier_len")?;
    let nullifier_len =
        usize::try_from(nullifier_len).map_err(|_| VerifyError::TruncatedJournal { field: "nullifier" })?;
    let nullifier_bytes = cursor.take(nullifier_len, "nullifier")?;
    let nullifier = String::from_utf8(nullifier_bytes.to_vec())
        .map_err(|_| VerifyError::TruncatedJournal { field: "nullifier_utf8" })?;

    let age = cursor.take_u32("age")?;
    let is_student = cursor.take_bool("is_student")?;
    let poll_id = cursor.take_u64("poll_id")?;

    Ok(VoteResponse {
        nullifier,
        age,
        is_student,
        poll_id,
    })
}

/// Encodes a [`VoteResponse`] back into the journal-ABI wire layout.
///
/// Exists so the round-trip property in the test suite (encode then decode
/// yields the original record) has something concrete to encode with; the
/// orchestrator itself only ever decodes, never produces journal bytes.
pub fn encode_journal(response: &VoteResponse) -> Vec<u8> {
    let nullifier_bytes = response.nullifier.as_bytes();
    let nullifier_len =
        u64::try_from(nullifier_bytes.len()).expect("nullifier byte length always fits in a u64");
    let mut out = Vec::with_capacity(8 + nullifier_bytes.len() + 4 + 1 + 8);
    out.extend_from_slice(&nullifier_len.to_le_bytes());
    out.extend_from_slice(nullifier_bytes);
    out.extend_from_slice(&response.age.to_le_bytes());
    out.push(u8::from(response.is_student));
    out.extend_from_slice(&response.poll_id.to_le_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VoteResponse {
        VoteResponse {
            nullifier: "voter-42".to_string(),
            age: 21,
            is_student: true,
            poll_id: 1001,
        }
    }

    #[test]
    fn decodes_well_formed_journal() {
        let bytes = encode_journal(&sample());
        let decoded = decode_journal(&bytes).expect("well-formed journal decodes");
        assert_eq!(decoded, sample());
    }

    #[test]
    fn round_trips_through_encode_and_decode() {
        let original = sample();
        let bytes = encode_journal(&original);
        let decoded = decode_journal(&bytes).expect("round-trip decodes");
        assert_eq!(decoded, original);
    }

    #[test]
    fn allows_trailing_bytes() {
        let mut bytes = encode_journal(&sample());
        bytes.extend_from_slice(&[0xaa, 0xbb, 0xcc]);
        let decoded = decode_journal(&bytes).expect("trailing bytes are ignored");
        assert_eq!(decoded, sample());
    }

    #[test]
    fn empty_nullifier_decodes_to_empty_string() {
        let response = VoteResponse {
            nullifier: String::new(),
            age: 0,
            is_student: false,
            poll_id: 0,
        };
        let bytes = encode_journal(&response);
        let decoded = decode_journal(&bytes).expect("empty nullifier is valid");
        assert_eq!(decoded.nullifier, "");
    }

    #[test]
    fn truncated_length_prefix_fails() {
        let bytes = [0u8; 4];
        let err = decode_journal(&bytes).unwrap_err();
        assert!(matches!(
            err,
            VerifyError::TruncatedJournal { field: "nullifier_len" }
        ));
    }

    #[test]
    fn every_prefix_shorter_than_the_full_record_is_truncated() {
        let bytes = encode_journal(&sample());
        for prefix_len in 0..bytes.len() {
            let err = decode_journal(&bytes[..prefix_len]).unwrap_err();
            assert!(matches!(err, VerifyError::TruncatedJournal { .. }));
        }
    }

    #[test]
    fn non_utf8_nullifier_is_reported_as_invalid_encoding_not_a_short_read() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&4u64.to_le_bytes());
        bytes.extend_from_slice(&[0xff, 0xff, 0xff, 0xff]); // not valid UTF-8
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.push(0);
        bytes.extend_from_slice(&0u64.to_le_bytes());

        let err = decode_journal(&bytes).unwrap_err();
        assert!(matches!(
            err,
            VerifyError::TruncatedJournal { field: "nullifier_utf8" }
        ));
    }

    #[test]
    fn oversized_nullifier_length_is_truncated_not_panicking() {
        let mut bytes = vec![0u8; 8];
        bytes.copy_from_slice(&u64::MAX.to_le_bytes());
        let err = decode_journal(&bytes).unwrap_err();
        assert!(matches!(
            err,
            VerifyError::TruncatedJournal { field: "nullifier" }
        ));
    }

    #[test]
    fn egress_response_serializes_to_json() {
        let response = sample();
        let json = serde_json::to_string(&response).expect("VoteResponse serializes");
        assert!(json.contains("\"poll_id\":1001"));
        assert!(json.contains("\"is_student\":true"));
    }
}
