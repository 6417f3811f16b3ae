//!
//! Sequence types and small helpers shared by every module
//!

/// Type of DNA sequence
///
/// Bases are stored as ascii bytes (`b'A'`, `b'C'`, `b'G'`, `b'T'`).
pub type Sequence = Vec<u8>;

/// Type of Bases as array
///
/// It is used in `AsRef<Bases>` or `&Bases`
pub type Bases = [u8];

///
/// Array of valid DNA bases
///
pub const VALID_BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

///
/// Default upper bound of the input sequence length
///
pub const DEFAULT_MAX_SEQ_LEN: usize = 1000;

/// Convert Sequence(Vec<u8>) into &str
/// useful in displaying
pub fn sequence_to_string<T: AsRef<Bases>>(seq: &T) -> &str {
    std::str::from_utf8(seq.as_ref()).expect("sequence is ascii")
}

///
/// Normalize a single base into uppercase.
/// Returns `None` if the byte is not one of `ACGTacgt`.
///
pub fn normalize_base(base: u8) -> Option<u8> {
    match base {
        b'A' | b'a' => Some(b'A'),
        b'C' | b'c' => Some(b'C'),
        b'G' | b'g' => Some(b'G'),
        b'T' | b't' => Some(b'T'),
        _ => None,
    }
}

///
/// Check that all bases in the sequence are uppercase `A/C/G/T`.
///
pub fn is_valid_sequence<T: AsRef<Bases>>(seq: &T) -> bool {
    seq.as_ref().iter().all(|base| VALID_BASES.contains(base))
}

//
// tests
//
