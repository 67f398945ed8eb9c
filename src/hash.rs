//! SHA-256 and the tagged-hash domain-separation scheme used throughout the
//! RISC Zero claim and verifier-parameter digests.

use sha2::{Digest, Sha256};

/// A 32-byte SHA-256 digest.
pub type Sha256Digest = [u8; 32];

/// Hashes a byte slice with SHA-256.
pub fn sha256(input: &[u8]) -> Sha256Digest {
    Sha256::digest(input).into()
}

/// Hashes a string tag with SHA-256, producing the tag digest fed into
/// [`tagged_struct`].
pub fn tag(s: &str) -> Sha256Digest {
    sha256(s.as_bytes())
}

/// Builds a tagged-struct digest:
///
/// `SHA256(tag_digest || down[0] || … || down[n-1] || length_suffix)`
///
/// `length_suffix` is always supplied by the caller as a literal two-byte
/// constant from [`crate::constants`] — it happens to equal the field count
/// for every struct in this protocol, but is never computed from
/// `down.len()` here, to avoid baking that coincidence into the code as if
/// it were the definition.
pub fn tagged_struct(tag_digest: Sha256Digest, down: &[Sha256Digest], length_suffix: [u8; 2]) -> Sha256Digest {
    let mut buf = Vec::with_capacity(32 * (down.len() + 1) + 2);
    buf.extend_from_slice(&tag_digest);
    for child in down {
        buf.extend_from_slice(child);
    }
    buf.extend_from_slice(&length_suffix);
    sha256(&buf)
}

/// Builds a tagged-list digest via a nil-terminated right fold:
///
/// ```text
/// fold(k) = [0u8; 32]
/// fold(i) = tagged_struct(tag(tag_str), [list[i], fold(i+1)], count_of([list[i], fold(i+1)]))
/// result  = fold(0)
/// ```
///
/// Exposed as a general-purpose utility for callers that need to digest an
/// ordered list of children under the external tagged-list convention (e.g.
/// an assumptions list); the OK-halted claim and output digests built in
/// [`crate::claim`] do not use it.
pub fn tagged_list(tag_str: &str, list: &[Sha256Digest]) -> Sha256Digest {
    let tag_digest = tag(tag_str);
    list.iter().rev().fold([0u8; 32], |tail, head| {
        tagged_struct(tag_digest, &[*head, tail], [0x02, 0x00])
    })
}

/// Reverses the byte order of a 32-byte digest.
pub fn reverse(bytes: &Sha256Digest) -> Sha256Digest {
    let mut out = *bytes;
    out.reverse();
    out
}

/// Splits a digest into `(upper128, lower128)` after reversing its byte
/// order, zero-extended on the left to 32 bytes each.
///
/// The reversal re-reads the digest as little-endian so that the two halves
/// can be embedded directly as scalar-field integers.
pub fn split(digest: &Sha256Digest) -> ([u8; 32], [u8; 32]) {
    let reversed = reverse(digest);
    let mut upper = [0u8; 32];
    let mut lower = [0u8; 32];
    upper[16..32].copy_from_slice(&reversed[16..32]);
    lower[16..32].copy_from_slice(&reversed[0..16]);
    (upper, lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_struct_matches_known_vector() {
        let digest1 = tagged_struct(tag("foo"), &[], [0x00, 0x00]);
        let digest2 = tagged_struct(tag("bar"), &[digest1, digest1], [0x02, 0x00]);
        let digest3 = tagged_struct(tag("baz"), &[digest1, digest2, digest1], [0x03, 0x00]);

        assert_eq!(
            hex::encode(digest3),
            "2228eb06bfbeaeb2cc12de86fd13373cb5ccdc8afac9af4299dd5a86a72afc4b"
        );
    }

    #[test]
    fn tagged_list_matches_known_vector() {
        let items = [[1u8; 32], [2u8; 32], [3u8; 32]];
        let list_hash = tagged_list("test_list", &items);
        assert_eq!(
            hex::encode(list_hash),
            "ce5bab9f0463274273c20a25618514bf4643a5964034a153c1244e48653e1354"
        );
    }

    #[test]
    fn tagged_list_empty_is_zero() {
        let list_hash = tagged_list("empty_list", &[]);
        assert_eq!(list_hash, [0u8; 32]);
    }

    #[test]
    fn reverse_is_involution() {
        let d: Sha256Digest = sha256(b"some digest input");
        assert_eq!(reverse(&reverse(&d)), d);
    }

    #[test]
    fn split_recombines_to_reverse() {
        let d: Sha256Digest = sha256(b"another digest input");
        let (upper, lower) = split(&d);
        let mut recombined = [0u8; 32];
        recombined[0..16].copy_from_slice(&lower[16..32]);
        recombined[16..32].copy_from_slice(&upper[16..32]);
        assert_eq!(reverse(&recombined), d);
    }
}
