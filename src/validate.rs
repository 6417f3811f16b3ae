//!
//! Checks of the user input before assembly
//!
//! * sequence: non-empty, only `ACGTacgt`, not longer than the maximum length.
//!   Bases are normalized into uppercase.
//! * kmer size: positive and smaller than the sequence length.
//!
use crate::common::{normalize_base, Sequence};
use crate::error::AssemblyError;

///
/// Validate the raw sequence and return it in uppercase.
///
pub fn validate_sequence(raw: &str, max_len: usize) -> Result<Sequence, AssemblyError> {
    if raw.is_empty() {
        return Err(AssemblyError::EmptySequence);
    }
    let seq = raw
        .char_indices()
        .map(|(pos, c)| {
            let base = if c.is_ascii() { normalize_base(c as u8) } else { None };
            base.ok_or(AssemblyError::InvalidBase { base: c, pos })
        })
        .collect::<Result<Sequence, AssemblyError>>()?;
    if seq.len() > max_len {
        return Err(AssemblyError::SequenceTooLong {
            len: seq.len(),
            max: max_len,
        });
    }
    Ok(seq)
}

///
/// Validate kmer size `k` for the sequence of length `seq_len`.
///
pub fn validate_kmer_size(k: usize, seq_len: usize) -> Result<usize, AssemblyError> {
    if k == 0 {
        Err(AssemblyError::NonPositiveKmerSize)
    } else if k >= seq_len {
        Err(AssemblyError::KmerSizeTooLarge { k, len: seq_len })
    } else {
        Ok(k)
    }
}

//
// tests
//
