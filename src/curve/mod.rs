//! BN254 elliptic-curve point and scalar decoding.

mod bn254;

pub use bn254::{be_bytes_to_fr, g1_from_bytes, g1_to_bytes, g2_from_bytes};
